use std::collections::{BTreeMap, HashMap};

use chrono::TimeZone;
use chrono::Utc;
use rand::RngCore;
use tracing::warn;

use fixtura_core::{Definition, Error, Result, TargetType, Value};

use crate::config::Config;
use crate::processors::{ProcessContext, ProcessorRegistry};
use crate::statement::DataStatement;
use crate::strategy::{AntiExpected, DefaultValue, Expected, InjectMode, ValueStrategy};

/// Callback applied to the config copy around a strategy draw.
pub type ConfigHook = Box<dyn Fn(&mut Config) + Send + Sync>;

const DEFAULT_MAX_DEPTH: usize = 16;

/// Orchestrator: selects the strategy for the requested mode, runs the
/// ordered constraint chain per field, and recurses into nested
/// fields/elements, assembling the final value graph.
///
/// Built once and read-only afterwards, so concurrent callers may share one
/// factory freely; every call draws from its own RNG and its own config
/// copies.
pub struct InjectorFactory {
    registry: ProcessorRegistry,
    strategies: HashMap<InjectMode, Box<dyn ValueStrategy>>,
    default_config: Config,
    before_config: Option<ConfigHook>,
    after_config: Option<ConfigHook>,
    max_depth: usize,
}

impl InjectorFactory {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> InjectorFactoryBuilder {
        InjectorFactoryBuilder::new()
    }

    /// Synthesize a value for the definition under the given mode, using the
    /// factory's default bounds.
    pub fn inject(&self, def: &Definition, mode: InjectMode) -> Result<Value> {
        self.inject_with(def, mode, &self.default_config)
    }

    /// Synthesize with caller-supplied bounds.
    pub fn inject_with(&self, def: &Definition, mode: InjectMode, config: &Config) -> Result<Value> {
        let mut rng = rand::rng();
        self.inject_with_rng(def, mode, config, &mut rng)
    }

    /// Synthesize with caller-supplied bounds and RNG (deterministic runs).
    pub fn inject_with_rng(
        &self,
        def: &Definition,
        mode: InjectMode,
        config: &Config,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        let mut config = config.clone();
        self.synthesize(def, mode, &mut config, 0, rng)
    }

    /// Synthesize a non-null value for the definition.
    pub fn inject_required(&self, def: &Definition, mode: InjectMode) -> Result<Value> {
        let mut rng = rand::rng();
        let mut config = self.default_config.clone();
        self.required_value(def, mode, &mut config, 0, &mut rng)
    }

    /// Non-null synthesis used by the presence processors. Skips the
    /// constraint chain (its caller is the chain) and disables the null
    /// roll; if the mode's strategy still has no opinion, falls back to an
    /// expected draw so the result is concrete.
    pub fn required_value(
        &self,
        def: &Definition,
        mode: InjectMode,
        config: &mut Config,
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        config.nullable_probability = -1;
        let value = self.draw(def, mode, config, depth, rng)?;
        if value.is_null() {
            return self.draw(def, InjectMode::Expected, config, depth, rng);
        }
        Ok(value)
    }

    /// Container synthesis at the config's current size bounds; used by the
    /// size processor and the post-chain draw.
    pub fn container_value(
        &self,
        def: &Definition,
        mode: InjectMode,
        config: &mut Config,
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        let strategy = self.strategy_for(mode)?;
        let count = strategy.next_size(config, rng);
        match def.target {
            TargetType::List | TargetType::Array => {
                let element = def.element().ok_or_else(|| {
                    Error::InvalidDefinition(
                        "list definition is missing its element type".to_string(),
                    )
                })?;
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    let mut element_config = config.clone();
                    items.push(self.synthesize(element, mode, &mut element_config, depth + 1, rng)?);
                }
                Ok(Value::List(items))
            }
            TargetType::Map => {
                let key_def = def.key_arg().ok_or_else(|| {
                    Error::InvalidDefinition("map definition is missing its key type".to_string())
                })?;
                let value_def = def.value_arg().ok_or_else(|| {
                    Error::InvalidDefinition(
                        "map definition is missing its value type".to_string(),
                    )
                })?;
                let mut entries = Vec::with_capacity(count);
                for _ in 0..count {
                    let mut key_config = config.clone();
                    let key = self.required_value(key_def, mode, &mut key_config, depth + 1, rng)?;
                    let mut value_config = config.clone();
                    let value =
                        self.synthesize(value_def, mode, &mut value_config, depth + 1, rng)?;
                    entries.push((key, value));
                }
                Ok(Value::Map(entries))
            }
            _ => Err(Error::Unsupported(format!(
                "container synthesis requested for {:?}",
                def.target
            ))),
        }
    }

    /// Per-field state machine: OPEN while processors run, CLOSED once one
    /// sets the stop flag or the chain is exhausted. Fields still open after
    /// the chain draw their value from the mode's strategy against the
    /// narrowed config.
    fn synthesize(
        &self,
        def: &Definition,
        mode: InjectMode,
        config: &mut Config,
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        if depth > self.max_depth {
            warn!(depth, "max synthesis depth exceeded; substituting null");
            return Ok(Value::Null);
        }

        // Default-value mode ignores constraints entirely.
        if mode != InjectMode::DefaultValue {
            let mut stmt = DataStatement::new();
            let chain = self.registry.chain(def);
            let mut ctx = ProcessContext {
                factory: self,
                mode,
                depth,
                rng: &mut *rng,
            };
            for (tag, processor) in chain {
                if !stmt.is_open() {
                    break;
                }
                processor.process(&mut ctx, config, def, tag, &mut stmt)?;
            }
            if stmt.stop || !stmt.value.is_null() {
                return Ok(stmt.value);
            }

            // Field-level absence roll; the root of an inject call is never
            // rolled away.
            if depth > 0 && def.target.is_reference() {
                let strategy = self.strategy_for(mode)?;
                if strategy.roll_null(config, rng) {
                    return Ok(Value::Null);
                }
            }
        }

        self.draw(def, mode, config, depth, rng)
    }

    /// Strategy draw for an open field, decorated by the config hooks: the
    /// config is copied, `before` runs, the draw happens, `after` runs.
    fn draw(
        &self,
        def: &Definition,
        mode: InjectMode,
        config: &Config,
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        let mut config = config.clone();
        if let Some(hook) = &self.before_config {
            hook(&mut config);
        }
        let value = self.draw_inner(def, mode, &mut config, depth, rng)?;
        if let Some(hook) = &self.after_config {
            hook(&mut config);
        }
        Ok(value)
    }

    fn draw_inner(
        &self,
        def: &Definition,
        mode: InjectMode,
        config: &mut Config,
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        let strategy = self.strategy_for(mode)?;
        let value = match &def.target {
            TargetType::Bool => option_value(strategy.next_bool(config, rng), Value::Bool),
            TargetType::I8 => option_value(strategy.next_i8(config, rng), Value::I8),
            TargetType::I16 => option_value(strategy.next_i16(config, rng), Value::I16),
            TargetType::I32 => option_value(strategy.next_i32(config, rng), Value::I32),
            TargetType::I64 => option_value(strategy.next_i64(config, rng), Value::I64),
            TargetType::BigInt => option_value(strategy.next_i128(config, rng), Value::BigInt),
            TargetType::F32 => option_value(strategy.next_f32(config, rng), Value::F32),
            TargetType::F64 => option_value(strategy.next_f64(config, rng), Value::F64),
            TargetType::Decimal => option_value(strategy.next_decimal(config, rng), Value::Decimal),
            TargetType::Char => option_value(strategy.next_char(config, rng), Value::Char),
            TargetType::Text => option_value(strategy.next_text(config, rng), Value::Text),
            TargetType::Date => temporal_value(strategy.next_date_millis(config, rng), |ts| {
                Value::Date(ts.date_naive())
            }),
            TargetType::Time => temporal_value(strategy.next_date_millis(config, rng), |ts| {
                Value::Time(ts.time())
            }),
            TargetType::DateTime => temporal_value(strategy.next_date_millis(config, rng), |ts| {
                Value::DateTime(ts.naive_utc())
            }),
            TargetType::Timestamp => {
                temporal_value(strategy.next_date_millis(config, rng), Value::Timestamp)
            }
            TargetType::List | TargetType::Array | TargetType::Map => {
                self.container_value(def, mode, config, depth, rng)?
            }
            TargetType::Composite(composite) => {
                let mut fields = BTreeMap::new();
                for field in &composite.fields {
                    // Copy at the recursion boundary so a narrowing applied
                    // to one field never leaks into a sibling.
                    let mut field_config = config.clone();
                    let value = self.synthesize(
                        &field.definition,
                        mode,
                        &mut field_config,
                        depth + 1,
                        rng,
                    )?;
                    fields.insert(field.name.clone(), value);
                }
                Value::Object {
                    name: composite.name.clone(),
                    fields,
                }
            }
        };
        Ok(value)
    }

    fn strategy_for(&self, mode: InjectMode) -> Result<&dyn ValueStrategy> {
        self.strategies
            .get(&mode)
            .map(|strategy| strategy.as_ref())
            .ok_or_else(|| {
                Error::Configuration(format!("no strategy registered for mode {mode:?}"))
            })
    }
}

impl Default for InjectorFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn option_value<T>(drawn: Option<T>, wrap: impl FnOnce(T) -> Value) -> Value {
    drawn.map(wrap).unwrap_or(Value::Null)
}

fn temporal_value(
    millis: Option<i64>,
    assemble: impl FnOnce(chrono::DateTime<Utc>) -> Value,
) -> Value {
    millis
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(assemble)
        .unwrap_or(Value::Null)
}

/// Builder for `InjectorFactory`.
pub struct InjectorFactoryBuilder {
    registry: ProcessorRegistry,
    strategies: HashMap<InjectMode, Box<dyn ValueStrategy>>,
    default_config: Config,
    before_config: Option<ConfigHook>,
    after_config: Option<ConfigHook>,
    max_depth: usize,
}

impl InjectorFactoryBuilder {
    fn new() -> Self {
        let mut strategies: HashMap<InjectMode, Box<dyn ValueStrategy>> = HashMap::new();
        strategies.insert(InjectMode::Expected, Box::new(Expected));
        strategies.insert(InjectMode::AntiExpected, Box::new(AntiExpected));
        strategies.insert(InjectMode::DefaultValue, Box::new(DefaultValue));
        Self {
            registry: ProcessorRegistry::standard(),
            strategies,
            default_config: Config::default(),
            before_config: None,
            after_config: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the processor registry.
    pub fn registry(mut self, registry: ProcessorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the strategy for its own mode.
    pub fn strategy(mut self, strategy: Box<dyn ValueStrategy>) -> Self {
        self.strategies.insert(strategy.mode(), strategy);
        self
    }

    pub fn default_config(mut self, config: Config) -> Self {
        self.default_config = config;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn before_config(mut self, hook: impl Fn(&mut Config) + Send + Sync + 'static) -> Self {
        self.before_config = Some(Box::new(hook));
        self
    }

    pub fn after_config(mut self, hook: impl Fn(&mut Config) + Send + Sync + 'static) -> Self {
        self.after_config = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> InjectorFactory {
        InjectorFactory {
            registry: self.registry,
            strategies: self.strategies,
            default_config: self.default_config,
            before_config: self.before_config,
            after_config: self.after_config,
            max_depth: self.max_depth,
        }
    }
}
