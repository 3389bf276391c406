use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Synthesized value for a definition.
///
/// Each temporal representation is carried independently; they are not
/// numerically interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    BigInt(i128),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Object {
        name: String,
        fields: BTreeMap<String, Value>,
    },
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(value) => Some(i64::from(*value)),
            Value::I16(value) => Some(i64::from(*value)),
            Value::I32(value) => Some(i64::from(*value)),
            Value::I64(value) => Some(*value),
            Value::BigInt(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(value) => Some(f64::from(*value)),
            Value::F64(value) => Some(*value),
            other => other.as_i64().map(|value| value as f64),
        }
    }

    /// Numeric view of integer, float and decimal values.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::I8(value) => Some(Decimal::from(*value)),
            Value::I16(value) => Some(Decimal::from(*value)),
            Value::I32(value) => Some(Decimal::from(*value)),
            Value::I64(value) => Some(Decimal::from(*value)),
            Value::BigInt(value) => i64::try_from(*value).ok().map(Decimal::from),
            Value::F32(value) => Decimal::from_f32(*value),
            Value::F64(value) => Decimal::from_f64(*value),
            Value::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Field lookup on object values.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object { fields, .. } => fields.get(name),
            _ => None,
        }
    }

    /// Element or character count of container and text values.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            Value::Text(value) => Some(value.chars().count()),
            _ => None,
        }
    }
}
