use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Result, Value};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext, priority};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

/// Presence family (`NotNull`/`NotEmpty`/`NotBlank`).
///
/// Anti mode sets the value to null and stops — absence alone violates the
/// requirement, so no further narrowing is needed. Expected mode triggers a
/// recursive required synthesis, bumping the minimum size/length to one for
/// the empty/blank variants first.
pub struct NullabilityProcessor;

impl ConstraintProcessor for NullabilityProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        matches!(
            kind,
            ConstraintKind::NotNull | ConstraintKind::NotEmpty | ConstraintKind::NotBlank
        )
    }

    fn priority(&self) -> i32 {
        priority::NULLABILITY
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        config: &mut Config,
        def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        match ctx.mode {
            InjectMode::AntiExpected => stmt.finish(Value::Null),
            InjectMode::Expected => {
                if stmt.value.is_null() {
                    if matches!(tag, ConstraintTag::NotEmpty | ConstraintTag::NotBlank) {
                        config.min_size = Some(config.min_size.unwrap_or(1).max(1));
                        config.min_len = Some(config.min_len.unwrap_or(1).max(1));
                    }
                    let value =
                        ctx.factory
                            .required_value(def, ctx.mode, config, ctx.depth, ctx.rng)?;
                    stmt.finish(value);
                }
            }
            InjectMode::DefaultValue => {}
        }
        Ok(())
    }
}

/// Must-be-null tag: symmetric to the presence family.
pub struct NullProcessor;

impl ConstraintProcessor for NullProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        kind == ConstraintKind::Null
    }

    fn priority(&self) -> i32 {
        priority::NULLABILITY
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        config: &mut Config,
        def: &Definition,
        _tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        match ctx.mode {
            InjectMode::Expected => stmt.finish(Value::Null),
            InjectMode::AntiExpected => {
                let value =
                    ctx.factory
                        .required_value(def, ctx.mode, config, ctx.depth, ctx.rng)?;
                stmt.finish(value);
            }
            InjectMode::DefaultValue => {}
        }
        Ok(())
    }
}
