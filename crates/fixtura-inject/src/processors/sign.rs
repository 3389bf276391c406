use rand::Rng;

use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Error, Result};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext, integral_value};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

const SIGN_MAGNITUDE: i64 = 1_000;

/// Sign family (`Positive`/`Negative`/`…OrZero`): self-contained, so the
/// produced value ignores any numeric range also present on the field.
/// Expected mode draws a value of the required sign; anti mode uses the
/// single boundary value that breaks the requirement. Both stop the chain.
pub struct SignProcessor;

impl ConstraintProcessor for SignProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        matches!(
            kind,
            ConstraintKind::Positive
                | ConstraintKind::PositiveOrZero
                | ConstraintKind::Negative
                | ConstraintKind::NegativeOrZero
        )
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        _config: &mut Config,
        def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        let drawn = match ctx.mode {
            InjectMode::Expected => match tag {
                ConstraintTag::Positive => ctx.rng.random_range(1..=SIGN_MAGNITUDE),
                ConstraintTag::PositiveOrZero => ctx.rng.random_range(0..=SIGN_MAGNITUDE),
                ConstraintTag::Negative => -ctx.rng.random_range(1..=SIGN_MAGNITUDE),
                ConstraintTag::NegativeOrZero => -ctx.rng.random_range(0..=SIGN_MAGNITUDE),
                _ => return Ok(()),
            },
            InjectMode::AntiExpected => match tag {
                ConstraintTag::Positive => 0,
                ConstraintTag::PositiveOrZero => -1,
                ConstraintTag::Negative => 0,
                ConstraintTag::NegativeOrZero => 1,
                _ => return Ok(()),
            },
            InjectMode::DefaultValue => return Ok(()),
        };

        let value = integral_value(&def.target, drawn).ok_or_else(|| {
            Error::Unsupported(format!(
                "sign constraint on non-numeric kind {:?}",
                def.target
            ))
        })?;
        stmt.finish(value);
        Ok(())
    }
}
