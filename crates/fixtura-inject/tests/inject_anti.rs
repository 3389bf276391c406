use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fixtura_core::{CompositeType, ConstraintTag, Definition, Error, TargetType, Value, check};
use fixtura_inject::{Config, InjectMode, InjectorFactory};

fn inject_anti(factory: &InjectorFactory, def: &Definition, seed: u64) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    factory
        .inject_with_rng(def, InjectMode::AntiExpected, &Config::default(), &mut rng)
        .expect("inject")
}

#[test]
fn min_bound_is_broken_just_below() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::I32).with_constraint(ConstraintTag::Min { value: 10 });

    for seed in 0..10 {
        let value = inject_anti(&factory, &definition, seed);
        assert_eq!(value, Value::I32(8), "min - 2");
        assert!(!check(&definition, &value).is_empty());
    }
}

#[test]
fn max_bound_is_broken_just_above() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::I64)
        .with_constraint(ConstraintTag::Min { value: 0 })
        .with_constraint(ConstraintTag::Max { value: 20 });

    let value = inject_anti(&factory, &definition, 1);
    assert_eq!(value, Value::I64(22), "max + 2");
}

#[test]
fn not_null_yields_null() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::Text).with_constraint(ConstraintTag::NotNull);
    for seed in 0..10 {
        assert!(inject_anti(&factory, &definition, seed).is_null());
    }
}

#[test]
fn null_tag_yields_a_concrete_value() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::Text).with_constraint(ConstraintTag::Null);
    for seed in 0..10 {
        assert!(!inject_anti(&factory, &definition, seed).is_null());
    }
}

#[test]
fn size_tag_yields_null_placeholder() {
    let factory = InjectorFactory::new();
    let definition = Definition::list_of(Definition::of(TargetType::Text))
        .with_constraint(ConstraintTag::Size { min: 2, max: 2 });
    assert!(inject_anti(&factory, &definition, 1).is_null());
}

#[test]
fn sign_boundaries() {
    let factory = InjectorFactory::new();
    let cases = [
        (ConstraintTag::Positive, 0),
        (ConstraintTag::PositiveOrZero, -1),
        (ConstraintTag::Negative, 0),
        (ConstraintTag::NegativeOrZero, 1),
    ];
    for (tag, expected) in cases {
        let definition = Definition::of(TargetType::I64).with_constraint(tag);
        assert_eq!(inject_anti(&factory, &definition, 2), Value::I64(expected));
    }
}

#[test]
fn digits_integer_cap_is_exceeded() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::I32).with_constraint(ConstraintTag::Digits {
        integer: 1,
        fraction: 0,
    });

    for seed in 0..10 {
        let drawn = inject_anti(&factory, &definition, seed)
            .as_i64()
            .expect("numeric value");
        assert!((10..=99).contains(&drawn), "two digits expected, got {drawn}");
    }
}

#[test]
fn digits_cap_is_exceeded_within_a_narrow_kind() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::I8).with_constraint(ConstraintTag::Digits {
        integer: 2,
        fraction: 0,
    });

    for seed in 0..10 {
        let value = inject_anti(&factory, &definition, seed);
        let drawn = value.as_i64().expect("numeric value");
        assert!(
            (100..=i64::from(i8::MAX)).contains(&drawn),
            "seed {seed} produced {drawn}"
        );
        assert!(!check(&definition, &value).is_empty(), "seed {seed}");
    }
}

#[test]
fn digits_cap_beyond_the_kind_width_is_rejected() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::I8).with_constraint(ConstraintTag::Digits {
        integer: 3,
        fraction: 0,
    });

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = factory.inject_with_rng(
        &definition,
        InjectMode::AntiExpected,
        &Config::default(),
        &mut rng,
    );
    assert!(matches!(result, Err(Error::Unsupported(_))));
}

#[test]
fn boolean_assertions_are_inverted() {
    let factory = InjectorFactory::new();
    let assert_true = Definition::of(TargetType::Bool).with_constraint(ConstraintTag::AssertTrue);
    let assert_false = Definition::of(TargetType::Bool).with_constraint(ConstraintTag::AssertFalse);
    assert_eq!(inject_anti(&factory, &assert_true, 3), Value::Bool(false));
    assert_eq!(inject_anti(&factory, &assert_false, 3), Value::Bool(true));
}

#[test]
fn past_dates_flip_to_the_future() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::Date).with_constraint(ConstraintTag::Past);
    match inject_anti(&factory, &definition, 4) {
        Value::Date(date) => assert!(date > chrono::Utc::now().date_naive()),
        other => panic!("expected a date, got {other:?}"),
    }
}

#[test]
fn email_yields_null() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::Text).with_constraint(ConstraintTag::Email);
    assert!(inject_anti(&factory, &definition, 5).is_null());
}

#[test]
fn pattern_is_a_logged_no_op() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::Text).with_constraint(ConstraintTag::Pattern {
        regex: "^[a-z]+$".to_string(),
    });
    // The processor skips; the strategy still draws a (length-violating,
    // here unconstrained) concrete string.
    let value = inject_anti(&factory, &definition, 6);
    assert!(value.as_str().is_some());
}

#[test]
fn composite_scenario_violates_at_least_one_constraint() {
    let factory = InjectorFactory::new();
    let definition = Definition::composite(
        CompositeType::new("Order")
            .with_field(
                "x",
                Definition::of(TargetType::I32).with_constraint(ConstraintTag::Min { value: 10 }),
            )
            .with_field(
                "y",
                Definition::list_of(Definition::of(TargetType::Text))
                    .with_constraint(ConstraintTag::Size { min: 2, max: 2 }),
            ),
    );

    for seed in 0..20 {
        let value = inject_anti(&factory, &definition, seed);
        assert!(value.field("x").and_then(Value::as_i64).expect("x") < 10);
        assert!(value.field("y").expect("y").is_null());
        assert!(!check(&definition, &value).is_empty(), "seed {seed}");
    }
}
