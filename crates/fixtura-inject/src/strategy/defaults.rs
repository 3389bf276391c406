use rand::RngCore;
use rust_decimal::Decimal;

use crate::config::Config;
use crate::strategy::{InjectMode, ValueStrategy};

/// Baseline strategy: ignores all bounds and produces the type's zero value
/// for primitive-like kinds and absence for reference kinds. Sizes are
/// always 0.
pub struct DefaultValue;

impl ValueStrategy for DefaultValue {
    fn mode(&self) -> InjectMode {
        InjectMode::DefaultValue
    }

    fn next_size(&self, _config: &Config, _rng: &mut dyn RngCore) -> usize {
        0
    }

    fn roll_null(&self, _config: &Config, _rng: &mut dyn RngCore) -> bool {
        false
    }

    fn next_bool(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<bool> {
        Some(false)
    }

    fn next_i8(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<i8> {
        Some(0)
    }

    fn next_i16(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<i16> {
        Some(0)
    }

    fn next_i32(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<i32> {
        Some(0)
    }

    fn next_i64(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<i64> {
        Some(0)
    }

    fn next_i128(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<i128> {
        // Big integers are a reference kind; their baseline is absence.
        None
    }

    fn next_f32(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<f32> {
        Some(0.0)
    }

    fn next_f64(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<f64> {
        Some(0.0)
    }

    fn next_decimal(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<Decimal> {
        None
    }

    fn next_char(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<char> {
        Some('\u{0}')
    }

    fn next_text(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<String> {
        None
    }

    fn next_date_millis(&self, _config: &Config, _rng: &mut dyn RngCore) -> Option<i64> {
        None
    }
}
