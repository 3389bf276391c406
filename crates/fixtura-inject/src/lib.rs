//! Constraint-directed test-data synthesis engine.
//!
//! Given a `fixtura_core::Definition`, the `InjectorFactory` produces value
//! graphs that satisfy every constraint (`Expected`), violate at least one
//! (`AntiExpected`), or hold type-default zero/null values (`DefaultValue`),
//! without the caller writing fixture code.

pub mod config;
pub mod factory;
pub mod processors;
pub mod statement;
pub mod strategy;

pub use config::Config;
pub use factory::{ConfigHook, InjectorFactory, InjectorFactoryBuilder};
pub use processors::{ConstraintProcessor, ProcessContext, ProcessorRegistry};
pub use statement::DataStatement;
pub use strategy::{InjectMode, ValueStrategy};
