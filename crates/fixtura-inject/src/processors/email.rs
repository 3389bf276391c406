use rand::Rng;

use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Result, Value};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

const DOMAINS: [&str; 3] = ["example.com", "example.org", "test.dev"];

/// `Email` tag. Expected mode assembles an address; anti mode uses absence
/// as the guaranteed violation, since no string is trivially "non-matching
/// but non-null" in this design.
pub struct EmailProcessor;

impl ConstraintProcessor for EmailProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        kind == ConstraintKind::Email
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        _config: &mut Config,
        _def: &Definition,
        _tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        match ctx.mode {
            InjectMode::Expected => {
                let user = ctx.rng.random_range(1..=9999_u32);
                let domain = DOMAINS[ctx.rng.random_range(0..DOMAINS.len())];
                stmt.finish(Value::Text(format!("user{user:04}@{domain}")));
            }
            InjectMode::AntiExpected => stmt.finish(Value::Null),
            InjectMode::DefaultValue => {}
        }
        Ok(())
    }
}
