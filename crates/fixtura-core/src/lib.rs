//! Core model for Fixtura.
//!
//! This crate defines the synthesis target description (`Definition`), the
//! closed constraint-tag set, the dynamic `Value` representation, and a
//! conformance checker shared by the engine and its callers.

pub mod constraints;
pub mod definition;
pub mod error;
pub mod value;
pub mod verify;

pub use constraints::{ConstraintKind, ConstraintTag};
pub use definition::{CompositeType, Definition, FieldDef, TargetType};
pub use error::{Error, Result};
pub use value::Value;
pub use verify::{Violation, check};
