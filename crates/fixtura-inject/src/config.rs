use chrono::{Duration, Utc};
use rust_decimal::Decimal;

/// Per-kind generation bounds for one synthesis subtree.
///
/// `None` on a bound means "no opinion"; the selected strategy decides what
/// absence means for each kind. `Clone` is the copy contract: every
/// recursive descent and every per-field chain invocation operates on a
/// clone, never the parent's instance, so a narrowing applied while
/// synthesizing one field never leaks into a sibling.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub min_i8: Option<i8>,
    pub max_i8: Option<i8>,
    pub min_i16: Option<i16>,
    pub max_i16: Option<i16>,
    pub min_i32: Option<i32>,
    pub max_i32: Option<i32>,
    pub min_i64: Option<i64>,
    pub max_i64: Option<i64>,
    pub min_i128: Option<i128>,
    pub max_i128: Option<i128>,
    pub min_f32: Option<f32>,
    pub max_f32: Option<f32>,
    pub min_f64: Option<f64>,
    pub max_f64: Option<f64>,
    pub min_decimal: Option<Decimal>,
    pub max_decimal: Option<Decimal>,
    /// Rounding scale for decimal draws.
    pub decimal_scale: u32,
    /// Element count bounds for containers.
    pub min_size: Option<usize>,
    pub max_size: Option<usize>,
    /// Character count bounds for text.
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min_date_millis: Option<i64>,
    pub max_date_millis: Option<i64>,
    /// -1 = ignore; 0-100 = percent chance of null for reference kinds.
    pub nullable_probability: i8,
    /// -1 = uniform; 0-100 = percent chance of `true`.
    pub boolean_true_probability: i8,
}

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 10_000;

impl Default for Config {
    fn default() -> Self {
        let now = Utc::now().timestamp_millis();
        let window = Duration::days(365).num_milliseconds();
        Self {
            min_i8: Some(0),
            max_i8: Some(100),
            min_i16: Some(0),
            max_i16: Some(DEFAULT_INT_MAX as i16),
            min_i32: Some(0),
            max_i32: Some(DEFAULT_INT_MAX as i32),
            min_i64: Some(DEFAULT_INT_MIN),
            max_i64: Some(DEFAULT_INT_MAX),
            min_i128: Some(DEFAULT_INT_MIN as i128),
            max_i128: Some(DEFAULT_INT_MAX as i128),
            min_f32: Some(0.0),
            max_f32: Some(DEFAULT_INT_MAX as f32),
            min_f64: Some(0.0),
            max_f64: Some(DEFAULT_INT_MAX as f64),
            min_decimal: Some(Decimal::ZERO),
            max_decimal: Some(Decimal::from(DEFAULT_INT_MAX)),
            decimal_scale: 2,
            min_size: Some(1),
            max_size: Some(10),
            min_len: Some(1),
            max_len: Some(20),
            min_date_millis: Some(now - window),
            max_date_millis: Some(now + window),
            nullable_probability: -1,
            boolean_true_probability: -1,
        }
    }
}

impl Config {
    /// Fan a single lower bound out to every numeric kind at once, clamping
    /// into each kind's representable range.
    pub fn set_all_number_min_value(&mut self, value: i64) {
        self.min_i8 = Some(clamp_i8(value));
        self.min_i16 = Some(clamp_i16(value));
        self.min_i32 = Some(clamp_i32(value));
        self.min_i64 = Some(value);
        self.min_i128 = Some(i128::from(value));
        self.min_f32 = Some(value as f32);
        self.min_f64 = Some(value as f64);
        self.min_decimal = Some(Decimal::from(value));
    }

    /// Fan a single upper bound out to every numeric kind at once.
    pub fn set_all_number_max_value(&mut self, value: i64) {
        self.max_i8 = Some(clamp_i8(value));
        self.max_i16 = Some(clamp_i16(value));
        self.max_i32 = Some(clamp_i32(value));
        self.max_i64 = Some(value);
        self.max_i128 = Some(i128::from(value));
        self.max_f32 = Some(value as f32);
        self.max_f64 = Some(value as f64);
        self.max_decimal = Some(Decimal::from(value));
    }
}

fn clamp_i8(value: i64) -> i8 {
    value.clamp(i64::from(i8::MIN), i64::from(i8::MAX)) as i8
}

fn clamp_i16(value: i64) -> i16 {
    value.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
