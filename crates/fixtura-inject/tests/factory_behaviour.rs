use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fixtura_core::{CompositeType, ConstraintTag, Definition, Error, TargetType, Value};
use fixtura_inject::processors::SizeProcessor;
use fixtura_inject::{Config, InjectMode, InjectorFactory, ProcessorRegistry};

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = ProcessorRegistry::standard();
    let result = registry.register(Box::new(SizeProcessor));
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn empty_registry_skips_unknown_tags() {
    let factory = InjectorFactory::builder()
        .registry(ProcessorRegistry::empty())
        .build();
    let definition = Definition::of(TargetType::I32).with_constraint(ConstraintTag::Min { value: 100 });

    // The tag is skipped with a warning; the draw falls back to the default
    // bounds.
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let value = factory
        .inject_with_rng(&definition, InjectMode::Expected, &Config::default(), &mut rng)
        .expect("inject");
    assert!(value.as_i64().is_some());
}

#[test]
fn depth_guard_substitutes_null() {
    let factory = InjectorFactory::builder().max_depth(2).build();
    let definition = Definition::composite(
        CompositeType::new("A").with_field(
            "b",
            Definition::composite(
                CompositeType::new("B").with_field(
                    "c",
                    Definition::composite(
                        CompositeType::new("C").with_field("x", Definition::of(TargetType::I32)),
                    ),
                ),
            ),
        ),
    );

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let value = factory
        .inject_with_rng(&definition, InjectMode::Expected, &Config::default(), &mut rng)
        .expect("inject");
    let inner = value
        .field("b")
        .and_then(|b| b.field("c"))
        .and_then(|c| c.field("x"))
        .expect("x");
    assert!(inner.is_null());
}

#[test]
fn before_hook_pins_the_draw() {
    let factory = InjectorFactory::builder()
        .before_config(|config| {
            config.min_i64 = Some(42);
            config.max_i64 = Some(42);
        })
        .build();
    let definition = Definition::of(TargetType::I64);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let value = factory
        .inject_with_rng(&definition, InjectMode::Expected, &Config::default(), &mut rng)
        .expect("inject");
    assert_eq!(value, Value::I64(42));
}

#[test]
fn inject_required_is_never_null() {
    let factory = InjectorFactory::new();
    let definition = Definition::of(TargetType::Text);
    for _ in 0..10 {
        let value = factory
            .inject_required(&definition, InjectMode::Expected)
            .expect("inject");
        assert!(value.as_str().is_some());
    }
}

#[test]
fn map_keys_are_always_concrete() {
    let factory = InjectorFactory::new();
    let definition = Definition::map_of(
        Definition::of(TargetType::Text),
        Definition::of(TargetType::I32),
    )
    .with_constraint(ConstraintTag::Size { min: 3, max: 3 });

    let mut config = Config::default();
    config.nullable_probability = 100;
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let value = factory
        .inject_with_rng(&definition, InjectMode::Expected, &config, &mut rng)
        .expect("inject");
    match value {
        Value::Map(entries) => {
            assert_eq!(entries.len(), 3);
            for (key, _) in &entries {
                assert!(!key.is_null());
            }
        }
        other => panic!("expected a map, got {other:?}"),
    }
}

#[test]
fn default_config_flows_into_inject() {
    let mut config = Config::default();
    config.min_i32 = Some(500);
    config.max_i32 = Some(600);
    let factory = InjectorFactory::builder().default_config(config).build();
    let definition = Definition::of(TargetType::I32);

    for _ in 0..10 {
        let drawn = factory
            .inject(&definition, InjectMode::Expected)
            .expect("inject")
            .as_i64()
            .expect("numeric value");
        assert!((500..=600).contains(&drawn));
    }
}
