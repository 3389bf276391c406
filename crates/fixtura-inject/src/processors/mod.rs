use rand::RngCore;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Error, Result, TargetType, Value};

use crate::config::Config;
use crate::factory::InjectorFactory;
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

mod boolean;
mod digits;
mod email;
mod nullability;
mod pattern;
mod range;
mod sign;
mod size;
mod temporal;

pub use boolean::BooleanProcessor;
pub use digits::DigitsProcessor;
pub use email::EmailProcessor;
pub use nullability::{NullProcessor, NullabilityProcessor};
pub use pattern::PatternProcessor;
pub use range::RangeProcessor;
pub use sign::SignProcessor;
pub use size::SizeProcessor;
pub use temporal::TemporalProcessor;

/// Chain positions. Ranges narrow first, size next, self-contained setters
/// after, digit caps behind them (they read the final narrowed range), and
/// nullability last so it only fires for fields still open; a field closed
/// by an earlier processor already carries a concrete value.
pub mod priority {
    pub const RANGE: i32 = 0;
    pub const SIZE: i32 = 10;
    pub const DIRECT: i32 = 20;
    pub const DIGITS: i32 = 30;
    pub const NULLABILITY: i32 = 50;
}

/// Context handed to each processor in the chain.
pub struct ProcessContext<'a> {
    pub factory: &'a InjectorFactory,
    pub mode: InjectMode,
    pub depth: usize,
    pub rng: &'a mut dyn RngCore,
}

/// Handles one family of constraint tags.
///
/// Processors mutate only the per-field `Config` clone and the
/// `DataStatement`; the `Definition` is never mutated.
pub trait ConstraintProcessor: Send + Sync {
    /// Whether this processor handles the given tag kind.
    fn processable(&self, kind: ConstraintKind) -> bool;

    /// Chain position; higher runs later. Declaration order breaks ties.
    fn priority(&self) -> i32 {
        priority::DIRECT
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        config: &mut Config,
        def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()>;
}

/// Explicit processor registry, built once at factory construction and
/// read-only afterwards.
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn ConstraintProcessor>>,
}

impl ProcessorRegistry {
    pub fn empty() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Registry covering every built-in constraint family.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.add(Box::new(RangeProcessor));
        registry.add(Box::new(SizeProcessor));
        registry.add(Box::new(SignProcessor));
        registry.add(Box::new(TemporalProcessor));
        registry.add(Box::new(BooleanProcessor));
        registry.add(Box::new(EmailProcessor));
        registry.add(Box::new(PatternProcessor));
        registry.add(Box::new(NullabilityProcessor));
        registry.add(Box::new(NullProcessor));
        registry.add(Box::new(DigitsProcessor));
        registry
    }

    /// Register a processor, rejecting overlap with an already-covered tag
    /// kind.
    pub fn register(&mut self, processor: Box<dyn ConstraintProcessor>) -> Result<()> {
        for kind in ConstraintKind::ALL {
            if processor.processable(kind) && self.processor_for(kind).is_some() {
                return Err(Error::Configuration(format!(
                    "duplicate constraint processor registration for {kind:?}"
                )));
            }
        }
        self.add(processor);
        Ok(())
    }

    fn add(&mut self, processor: Box<dyn ConstraintProcessor>) {
        self.processors.push(processor);
    }

    pub fn processor_for(&self, kind: ConstraintKind) -> Option<&dyn ConstraintProcessor> {
        self.processors
            .iter()
            .find(|processor| processor.processable(kind))
            .map(|processor| processor.as_ref())
    }

    /// Ordered chain for a definition: declaration order, stable-sorted by
    /// processor priority. Tags with no registered processor are skipped
    /// with a warning.
    pub(crate) fn chain<'a>(
        &'a self,
        def: &'a Definition,
    ) -> Vec<(&'a ConstraintTag, &'a dyn ConstraintProcessor)> {
        let mut chain = Vec::with_capacity(def.constraints.len());
        for tag in &def.constraints {
            match self.processor_for(tag.kind()) {
                Some(processor) => chain.push((tag, processor)),
                None => {
                    warn!(kind = ?tag.kind(), "no processor registered for constraint; skipping");
                }
            }
        }
        chain.sort_by_key(|(_, processor)| processor.priority());
        chain
    }
}

/// Cast an integral draw into the numeric value kind of `target`.
pub(crate) fn integral_value(target: &TargetType, value: i64) -> Option<Value> {
    Some(match target {
        TargetType::I8 => Value::I8(value.clamp(i64::from(i8::MIN), i64::from(i8::MAX)) as i8),
        TargetType::I16 => {
            Value::I16(value.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16)
        }
        TargetType::I32 => {
            Value::I32(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        }
        TargetType::I64 => Value::I64(value),
        TargetType::BigInt => Value::BigInt(i128::from(value)),
        TargetType::F32 => Value::F32(value as f32),
        TargetType::F64 => Value::F64(value as f64),
        TargetType::Decimal => Value::Decimal(Decimal::from(value)),
        _ => return None,
    })
}

/// Cast a decimal draw into the numeric value kind of `target`, truncating
/// the fraction for integer kinds.
pub(crate) fn decimal_value(target: &TargetType, value: Decimal) -> Option<Value> {
    match target {
        TargetType::F32 => value.to_f32().map(Value::F32),
        TargetType::F64 => value.to_f64().map(Value::F64),
        TargetType::Decimal => Some(Value::Decimal(value)),
        TargetType::I8 | TargetType::I16 | TargetType::I32 | TargetType::I64
        | TargetType::BigInt => {
            let truncated = value.trunc().to_i64()?;
            integral_value(target, truncated)
        }
        _ => None,
    }
}
