use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Result, Value};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

/// Boolean assertions (`AssertTrue`/`AssertFalse`): sets the boolean the
/// mode demands or forbids. No config interaction.
pub struct BooleanProcessor;

impl ConstraintProcessor for BooleanProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        matches!(kind, ConstraintKind::AssertTrue | ConstraintKind::AssertFalse)
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        _config: &mut Config,
        _def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        let required = matches!(tag, ConstraintTag::AssertTrue);
        let value = match ctx.mode {
            InjectMode::Expected => required,
            InjectMode::AntiExpected => !required,
            InjectMode::DefaultValue => return Ok(()),
        };
        stmt.finish(Value::Bool(value));
        Ok(())
    }
}
