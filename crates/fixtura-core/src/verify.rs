use chrono::Utc;
use regex::Regex;
use rust_decimal::Decimal;

use crate::constraints::{ConstraintKind, ConstraintTag};
use crate::definition::{Definition, TargetType};
use crate::value::Value;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// One constraint breach found while checking a value against a definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Path from the root value (e.g. `$.orders[2].total`).
    pub path: String,
    pub constraint: ConstraintKind,
    pub message: String,
}

/// Check a synthesized value against every constraint in a definition.
///
/// Follows validation semantics: null passes every check except the
/// nullability family, so a null field only ever violates `NotNull`,
/// `NotEmpty` or `NotBlank`. Returns every breach found, depth first.
pub fn check(definition: &Definition, value: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_node(definition, value, "$", &mut violations);
    violations
}

fn check_node(definition: &Definition, value: &Value, path: &str, out: &mut Vec<Violation>) {
    for tag in &definition.constraints {
        if let Some(message) = tag_violation(tag, value) {
            out.push(Violation {
                path: path.to_string(),
                constraint: tag.kind(),
                message,
            });
        }
    }

    match (&definition.target, value) {
        (TargetType::List | TargetType::Array, Value::List(items)) => {
            if let Some(element) = definition.element() {
                for (index, item) in items.iter().enumerate() {
                    check_node(element, item, &format!("{path}[{index}]"), out);
                }
            }
        }
        (TargetType::Map, Value::Map(entries)) => {
            for (index, (key, entry_value)) in entries.iter().enumerate() {
                if let Some(key_def) = definition.key_arg() {
                    check_node(key_def, key, &format!("{path}.keys[{index}]"), out);
                }
                if let Some(value_def) = definition.value_arg() {
                    check_node(value_def, entry_value, &format!("{path}.values[{index}]"), out);
                }
            }
        }
        (TargetType::Composite(composite), Value::Object { fields, .. }) => {
            for field in &composite.fields {
                if let Some(field_value) = fields.get(&field.name) {
                    check_node(
                        &field.definition,
                        field_value,
                        &format!("{path}.{}", field.name),
                        out,
                    );
                }
            }
        }
        _ => {}
    }
}

fn tag_violation(tag: &ConstraintTag, value: &Value) -> Option<String> {
    let is_null = value.is_null();
    match tag {
        ConstraintTag::NotNull => is_null.then(|| "value is null".to_string()),
        ConstraintTag::NotEmpty => (is_null || value.len() == Some(0))
            .then(|| "value is null or empty".to_string()),
        ConstraintTag::NotBlank => match value {
            Value::Null => Some("value is null".to_string()),
            Value::Text(text) if text.trim().is_empty() => Some("value is blank".to_string()),
            _ => None,
        },
        ConstraintTag::Null => (!is_null).then(|| "value is not null".to_string()),
        ConstraintTag::Positive => numeric_violation(value, |d| d > Decimal::ZERO, "<= 0"),
        ConstraintTag::PositiveOrZero => numeric_violation(value, |d| d >= Decimal::ZERO, "< 0"),
        ConstraintTag::Negative => numeric_violation(value, |d| d < Decimal::ZERO, ">= 0"),
        ConstraintTag::NegativeOrZero => numeric_violation(value, |d| d <= Decimal::ZERO, "> 0"),
        ConstraintTag::Min { value: min } => {
            let bound = Decimal::from(*min);
            numeric_violation(value, |d| d >= bound, &format!("< {min}"))
        }
        ConstraintTag::Max { value: max } => {
            let bound = Decimal::from(*max);
            numeric_violation(value, |d| d <= bound, &format!("> {max}"))
        }
        ConstraintTag::DecimalMin { value: min, inclusive } => {
            let min = *min;
            if *inclusive {
                numeric_violation(value, |d| d >= min, &format!("< {min}"))
            } else {
                numeric_violation(value, |d| d > min, &format!("<= {min}"))
            }
        }
        ConstraintTag::DecimalMax { value: max, inclusive } => {
            let max = *max;
            if *inclusive {
                numeric_violation(value, |d| d <= max, &format!("> {max}"))
            } else {
                numeric_violation(value, |d| d < max, &format!(">= {max}"))
            }
        }
        ConstraintTag::Digits { integer, fraction } => {
            let decimal = value.as_decimal()?;
            let integer_part = decimal.trunc().abs().normalize();
            let integer_digits = if integer_part.is_zero() {
                1
            } else {
                integer_part.to_string().len() as u32
            };
            let fraction_digits = decimal.normalize().scale();
            (integer_digits > *integer || fraction_digits > *fraction).then(|| {
                format!(
                    "expected at most {integer} integer and {fraction} fraction digits, \
                     found {integer_digits} and {fraction_digits}"
                )
            })
        }
        ConstraintTag::Size { min, max } => {
            let len = value.len()?;
            (len < *min || len > *max)
                .then(|| format!("length {len} outside [{min}, {max}]"))
        }
        ConstraintTag::Future => temporal_violation(value, true, false),
        ConstraintTag::FutureOrPresent => temporal_violation(value, true, true),
        ConstraintTag::Past => temporal_violation(value, false, false),
        ConstraintTag::PastOrPresent => temporal_violation(value, false, true),
        ConstraintTag::AssertTrue => {
            (value.as_bool() == Some(false)).then(|| "expected true".to_string())
        }
        ConstraintTag::AssertFalse => {
            (value.as_bool() == Some(true)).then(|| "expected false".to_string())
        }
        ConstraintTag::Email => {
            let text = value.as_str()?;
            let regex = Regex::new(EMAIL_PATTERN).ok()?;
            (!regex.is_match(text)).then(|| format!("'{text}' is not an email address"))
        }
        ConstraintTag::Pattern { regex } => {
            let text = value.as_str()?;
            // An unparseable pattern cannot be checked; treat it as passing.
            let regex = Regex::new(regex).ok()?;
            (!regex.is_match(text)).then(|| format!("'{text}' does not match pattern"))
        }
    }
}

fn numeric_violation(
    value: &Value,
    ok: impl Fn(Decimal) -> bool,
    breach: &str,
) -> Option<String> {
    let decimal = value.as_decimal()?;
    (!ok(decimal)).then(|| format!("value {decimal} is {breach}"))
}

fn temporal_violation(value: &Value, future: bool, or_present: bool) -> Option<String> {
    let now = Utc::now();
    // Positive ordering means the value sits on the required side of now.
    let ordering = match value {
        Value::Date(date) => date.cmp(&now.date_naive()),
        Value::Time(time) => time.cmp(&now.time()),
        Value::DateTime(date_time) => date_time.cmp(&now.naive_utc()),
        Value::Timestamp(timestamp) => timestamp.cmp(&now),
        _ => return None,
    };
    let ordering = if future { ordering } else { ordering.reverse() };
    let ok = if or_present {
        ordering != std::cmp::Ordering::Less
    } else {
        ordering == std::cmp::Ordering::Greater
    };
    let side = if future { "future" } else { "past" };
    (!ok).then(|| format!("value is not in the {side}"))
}
