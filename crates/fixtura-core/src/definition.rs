use serde::{Deserialize, Serialize};

use crate::constraints::ConstraintTag;

/// Nominal kind a definition produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    /// Arbitrary-size integer kind, carried as `i128`.
    BigInt,
    F32,
    F64,
    Decimal,
    Char,
    Text,
    Date,
    Time,
    DateTime,
    Timestamp,
    List,
    Array,
    Map,
    Composite(CompositeType),
}

impl TargetType {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TargetType::I8
                | TargetType::I16
                | TargetType::I32
                | TargetType::I64
                | TargetType::BigInt
                | TargetType::F32
                | TargetType::F64
                | TargetType::Decimal
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            TargetType::Date | TargetType::Time | TargetType::DateTime | TargetType::Timestamp
        )
    }

    pub fn is_container(&self) -> bool {
        matches!(self, TargetType::List | TargetType::Array | TargetType::Map)
    }

    /// Kinds whose absence is representable (everything except the
    /// primitive-like bool/integer/float/char kinds).
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            TargetType::BigInt | TargetType::Decimal | TargetType::Text
        ) || self.is_temporal()
            || self.is_container()
            || matches!(self, TargetType::Composite(_))
    }
}

/// A named field of a composite type, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub definition: Definition,
}

/// User-defined composite type with ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeType {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl CompositeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            definition,
        });
        self
    }
}

/// Description of one synthesis target: its nominal kind, the component
/// definitions for container kinds, and the ordered constraint tags.
///
/// Constraint order is declaration order and stable across runs, so two runs
/// under the same mode make identical tightening decisions; only the random
/// draws differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub target: TargetType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_args: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<ConstraintTag>,
}

impl Definition {
    pub fn of(target: TargetType) -> Self {
        Self {
            target,
            generic_args: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn list_of(element: Definition) -> Self {
        Self::of(TargetType::List).with_arg(element)
    }

    pub fn array_of(element: Definition) -> Self {
        Self::of(TargetType::Array).with_arg(element)
    }

    pub fn map_of(key: Definition, value: Definition) -> Self {
        Self::of(TargetType::Map).with_arg(key).with_arg(value)
    }

    pub fn composite(composite: CompositeType) -> Self {
        Self::of(TargetType::Composite(composite))
    }

    pub fn with_arg(mut self, arg: Definition) -> Self {
        self.generic_args.push(arg);
        self
    }

    pub fn with_constraint(mut self, tag: ConstraintTag) -> Self {
        self.constraints.push(tag);
        self
    }

    pub fn with_constraints(mut self, tags: impl IntoIterator<Item = ConstraintTag>) -> Self {
        self.constraints.extend(tags);
        self
    }

    /// Element definition for list/array kinds.
    pub fn element(&self) -> Option<&Definition> {
        self.generic_args.first()
    }

    /// Key definition for map kinds.
    pub fn key_arg(&self) -> Option<&Definition> {
        self.generic_args.first()
    }

    /// Value definition for map kinds.
    pub fn value_arg(&self) -> Option<&Definition> {
        self.generic_args.get(1)
    }
}
