use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Result};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext, priority};
use crate::statement::DataStatement;

/// Range family (`Min`/`Max`/`DecimalMin`/`DecimalMax`): narrows the numeric
/// bounds in the config and never stops, so multiple range tags on one field
/// compose into a tightened interval before the strategy draws. A range tag
/// applies regardless of the field's concrete numeric kind, so bounds fan
/// out to every kind at once.
pub struct RangeProcessor;

impl ConstraintProcessor for RangeProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        matches!(
            kind,
            ConstraintKind::Min
                | ConstraintKind::Max
                | ConstraintKind::DecimalMin
                | ConstraintKind::DecimalMax
        )
    }

    fn priority(&self) -> i32 {
        priority::RANGE
    }

    fn process(
        &self,
        _ctx: &mut ProcessContext<'_>,
        config: &mut Config,
        _def: &Definition,
        tag: &ConstraintTag,
        _stmt: &mut DataStatement,
    ) -> Result<()> {
        match tag {
            ConstraintTag::Min { value } => config.set_all_number_min_value(*value),
            ConstraintTag::Max { value } => config.set_all_number_max_value(*value),
            ConstraintTag::DecimalMin { value, inclusive } => {
                // Exclusive bounds are tightened by one unit of the scale.
                let bound = if *inclusive {
                    *value
                } else {
                    *value + scale_unit(config.decimal_scale)
                };
                config.min_decimal = Some(bound);
                config.min_f64 = bound.to_f64().or(config.min_f64);
                config.min_f32 = bound.to_f32().or(config.min_f32);
            }
            ConstraintTag::DecimalMax { value, inclusive } => {
                let bound = if *inclusive {
                    *value
                } else {
                    *value - scale_unit(config.decimal_scale)
                };
                config.max_decimal = Some(bound);
                config.max_f64 = bound.to_f64().or(config.max_f64);
                config.max_f32 = bound.to_f32().or(config.max_f32);
            }
            _ => {}
        }
        Ok(())
    }
}

fn scale_unit(scale: u32) -> Decimal {
    Decimal::new(1, scale)
}
