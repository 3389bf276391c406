use std::collections::BTreeMap;

use rust_decimal::Decimal;

use fixtura_core::{
    CompositeType, ConstraintKind, ConstraintTag, Definition, TargetType, Value, check,
};

#[test]
fn min_violation_is_reported() {
    let definition = Definition::of(TargetType::I32).with_constraint(ConstraintTag::Min { value: 10 });
    let violations = check(&definition, &Value::I32(5));

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].constraint, ConstraintKind::Min);
    assert_eq!(violations[0].path, "$");
}

#[test]
fn value_inside_bounds_passes() {
    let definition = Definition::of(TargetType::I32)
        .with_constraint(ConstraintTag::Min { value: 10 })
        .with_constraint(ConstraintTag::Max { value: 20 });
    assert!(check(&definition, &Value::I32(15)).is_empty());
}

#[test]
fn null_passes_everything_except_presence() {
    let definition = Definition::of(TargetType::I32)
        .with_constraint(ConstraintTag::Min { value: 10 })
        .with_constraint(ConstraintTag::Positive)
        .with_constraint(ConstraintTag::NotNull);
    let violations = check(&definition, &Value::Null);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].constraint, ConstraintKind::NotNull);
}

#[test]
fn size_checks_text_length() {
    let definition =
        Definition::of(TargetType::Text).with_constraint(ConstraintTag::Size { min: 3, max: 5 });
    assert!(check(&definition, &Value::Text("abcd".to_string())).is_empty());
    assert_eq!(check(&definition, &Value::Text("ab".to_string())).len(), 1);
}

#[test]
fn digits_caps_are_enforced() {
    let definition = Definition::of(TargetType::Decimal)
        .with_constraint(ConstraintTag::Digits {
            integer: 1,
            fraction: 1,
        });

    let ok = Value::Decimal(Decimal::new(95, 1)); // 9.5
    assert!(check(&definition, &ok).is_empty());

    let too_wide = Value::Decimal(Decimal::from(42));
    let violations = check(&definition, &too_wide);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].constraint, ConstraintKind::Digits);
}

#[test]
fn email_and_pattern_match_text() {
    let email = Definition::of(TargetType::Text).with_constraint(ConstraintTag::Email);
    assert!(check(&email, &Value::Text("user0001@example.com".to_string())).is_empty());
    assert_eq!(check(&email, &Value::Text("not-an-address".to_string())).len(), 1);

    let pattern = Definition::of(TargetType::Text).with_constraint(ConstraintTag::Pattern {
        regex: "^[a-c]{3}$".to_string(),
    });
    assert!(check(&pattern, &Value::Text("abc".to_string())).is_empty());
    assert_eq!(check(&pattern, &Value::Text("xyz".to_string())).len(), 1);
}

#[test]
fn boolean_assertions() {
    let definition = Definition::of(TargetType::Bool).with_constraint(ConstraintTag::AssertTrue);
    assert!(check(&definition, &Value::Bool(true)).is_empty());
    assert_eq!(check(&definition, &Value::Bool(false)).len(), 1);
}

#[test]
fn nested_violations_carry_their_path() {
    let definition = Definition::composite(
        CompositeType::new("Order").with_field(
            "lines",
            Definition::list_of(
                Definition::of(TargetType::I32).with_constraint(ConstraintTag::Min { value: 1 }),
            ),
        ),
    );

    let mut fields = BTreeMap::new();
    fields.insert(
        "lines".to_string(),
        Value::List(vec![Value::I32(3), Value::I32(0)]),
    );
    let value = Value::Object {
        name: "Order".to_string(),
        fields,
    };

    let violations = check(&definition, &value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "$.lines[1]");
}

#[test]
fn decimal_bounds_honor_inclusivity() {
    let definition = Definition::of(TargetType::Decimal).with_constraint(ConstraintTag::DecimalMin {
        value: Decimal::from(10),
        inclusive: false,
    });
    assert_eq!(check(&definition, &Value::Decimal(Decimal::from(10))).len(), 1);
    assert!(check(&definition, &Value::Decimal(Decimal::new(1001, 2))).is_empty());
}
