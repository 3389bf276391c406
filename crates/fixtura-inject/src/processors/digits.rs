use std::str::FromStr;

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Error, Result, TargetType};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext, decimal_value, priority};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

/// Largest digit cap honored; keeps `10^cap` inside `i128`.
const MAX_DIGIT_CAP: u32 = 18;

/// Digit-count caps (`Digits { integer, fraction }`). Runs after the range
/// narrowing and before the presence check, so the draw sees the final
/// narrowed bounds. Expected mode intersects the digit-cap window with the
/// narrowed numeric range, draws integer and fraction parts inside the
/// intersection and assembles a decimal string before casting to the target
/// kind. Anti mode forces an integer part with one digit more than the cap,
/// within what the target kind can represent — exceeding the cap is itself
/// the violation.
pub struct DigitsProcessor;

impl ConstraintProcessor for DigitsProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        kind == ConstraintKind::Digits
    }

    fn priority(&self) -> i32 {
        priority::DIGITS
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        config: &mut Config,
        def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        let ConstraintTag::Digits { integer, fraction } = tag else {
            return Ok(());
        };
        let integer_cap = (*integer).min(MAX_DIGIT_CAP);
        let fraction_cap = (*fraction).min(MAX_DIGIT_CAP);

        let decimal = match ctx.mode {
            InjectMode::Expected => {
                let scale_pow = 10_i128.pow(fraction_cap);
                let mut int_lo: i128 = 0;
                let mut int_hi = 10_i128.pow(integer_cap) - 1;
                // Conservative intersection with the narrowed range: ceil on
                // the low side keeps any fraction draw above the minimum.
                if let Some(min) = config.min_decimal {
                    if let Some(low) = min.ceil().to_i128() {
                        int_lo = int_lo.max(low);
                    }
                }
                if let Some(max) = config.max_decimal {
                    if let Some(high) = max.floor().to_i128() {
                        int_hi = int_hi.min(high);
                    }
                }
                if int_lo > int_hi {
                    return Err(Error::InvalidDefinition(format!(
                        "digits cap of {integer_cap} integer digits conflicts with the numeric range"
                    )));
                }
                let integer_part = ctx.rng.random_range(int_lo..=int_hi);

                let mut frac_hi = scale_pow - 1;
                if fraction_cap > 0 && integer_part == int_hi {
                    if let Some(max) = config.max_decimal {
                        let room = (max - Decimal::from_i128_with_scale(integer_part, 0))
                            * Decimal::from_i128_with_scale(scale_pow, 0);
                        if let Some(room) = room.floor().to_i128() {
                            frac_hi = frac_hi.min(room.max(0));
                        }
                    }
                }
                let fraction_part = if frac_hi <= 0 {
                    0
                } else {
                    ctx.rng.random_range(0..=frac_hi)
                };
                let text = format!(
                    "{integer_part}.{fraction_part:0width$}",
                    width = fraction_cap as usize
                );
                Decimal::from_str(&text).map_err(|err| {
                    Error::InvalidDefinition(format!("digits constraint assembly failed: {err}"))
                })?
            }
            InjectMode::AntiExpected => {
                let cap = integer_cap.min(MAX_DIGIT_CAP - 1);
                let lo = 10_i128.pow(cap);
                let mut hi = 10_i128.pow(cap + 1) - 1;
                if let Some(kind_max) = integral_max(&def.target) {
                    if lo > kind_max {
                        return Err(Error::Unsupported(format!(
                            "digits cap of {cap} integer digits cannot be exceeded by {:?}",
                            def.target
                        )));
                    }
                    hi = hi.min(kind_max);
                }
                Decimal::from_i128_with_scale(ctx.rng.random_range(lo..=hi), 0)
            }
            InjectMode::DefaultValue => return Ok(()),
        };

        let value = decimal_value(&def.target, decimal).ok_or_else(|| {
            Error::Unsupported(format!(
                "digits constraint on non-numeric kind {:?}",
                def.target
            ))
        })?;
        stmt.finish(value);
        Ok(())
    }
}

/// Largest integer the target kind can carry, for kinds narrower than the
/// global digit cap.
fn integral_max(target: &TargetType) -> Option<i128> {
    match target {
        TargetType::I8 => Some(i128::from(i8::MAX)),
        TargetType::I16 => Some(i128::from(i16::MAX)),
        TargetType::I32 => Some(i128::from(i32::MAX)),
        TargetType::I64 => Some(i128::from(i64::MAX)),
        _ => None,
    }
}
