use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Result, Value};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext, priority};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

/// `Size` tag. Expected mode copies the tag's bounds into the config and,
/// for containers, synthesizes the contents at that size right away. For
/// char sequences the narrowed length bounds are left for the final draw.
/// Anti mode breaks the chain immediately with a null placeholder: null is
/// already an out-of-bounds length.
pub struct SizeProcessor;

impl ConstraintProcessor for SizeProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        kind == ConstraintKind::Size
    }

    fn priority(&self) -> i32 {
        priority::SIZE
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        config: &mut Config,
        def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        let ConstraintTag::Size { min, max } = tag else {
            return Ok(());
        };
        match ctx.mode {
            InjectMode::AntiExpected => stmt.finish(Value::Null),
            InjectMode::Expected => {
                if def.target.is_container() {
                    config.min_size = Some(*min);
                    config.max_size = Some(*max);
                    let value = ctx.factory.container_value(
                        def,
                        ctx.mode,
                        config,
                        ctx.depth,
                        ctx.rng,
                    )?;
                    stmt.finish(value);
                } else {
                    // Char sequences: narrow the length bounds and leave the
                    // final draw to the strategy.
                    config.min_len = Some(*min);
                    config.max_len = Some(*max);
                }
            }
            InjectMode::DefaultValue => {}
        }
        Ok(())
    }
}
