use rand::Rng;
use tracing::warn;

use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Error, Result, Value};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

const MAX_REPEAT: u32 = 32;

/// `Pattern` tag. Expected mode samples a matching string from the regex.
/// Anti-expected generation is not supported: the processor logs a warning
/// and performs no narrowing (known limitation).
pub struct PatternProcessor;

impl ConstraintProcessor for PatternProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        kind == ConstraintKind::Pattern
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        _config: &mut Config,
        _def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        let ConstraintTag::Pattern { regex } = tag else {
            return Ok(());
        };
        match ctx.mode {
            InjectMode::Expected => {
                let compiled = rand_regex::Regex::compile(regex, MAX_REPEAT).map_err(|err| {
                    Error::InvalidDefinition(format!("invalid pattern constraint: {err}"))
                })?;
                let value: String = ctx.rng.sample(compiled);
                stmt.finish(Value::Text(value));
            }
            InjectMode::AntiExpected => {
                warn!(pattern = %regex, "pattern constraints are not supported for anti-expected generation; skipping");
            }
            InjectMode::DefaultValue => {}
        }
        Ok(())
    }
}
