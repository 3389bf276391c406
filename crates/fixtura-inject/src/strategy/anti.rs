use rand::{Rng, RngCore};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::strategy::{InjectMode, ValueStrategy, text_of_len};

/// Constraint-violating strategy: values land just outside the configured
/// bounds — `min - 2` when `min > 2`, else `max + 2` (saturating, so casts
/// never overflow). Lengths come out one below the requested minimum.
pub struct AntiExpected;

/// Two days in milliseconds; the step used to leave a date window.
const DATE_STEP_MILLIS: i64 = 2 * 86_400_000;

macro_rules! outside_int {
    ($min:expr, $max:expr, $two:expr) => {
        match ($min, $max) {
            (None, None) => None,
            (Some(lo), _) if lo > $two => Some(lo - $two),
            (_, Some(hi)) => Some(hi.saturating_add($two)),
            (Some(lo), None) => Some(lo.saturating_sub($two)),
        }
    };
}

fn outside_len(min: Option<usize>, max: Option<usize>) -> Option<usize> {
    match (min, max) {
        (Some(lo), _) if lo >= 1 => Some(lo - 1),
        (_, Some(hi)) => Some(hi + 1),
        _ => None,
    }
}

impl ValueStrategy for AntiExpected {
    fn mode(&self) -> InjectMode {
        InjectMode::AntiExpected
    }

    fn next_size(&self, config: &Config, _rng: &mut dyn RngCore) -> usize {
        outside_len(config.min_size, config.max_size).unwrap_or(0)
    }

    fn roll_null(&self, config: &Config, rng: &mut dyn RngCore) -> bool {
        // Inverted: where the expected case wanted null, produce a concrete
        // value, and vice versa. "Ignore" stays ignore.
        match config.nullable_probability {
            p if p < 0 => false,
            p if p >= 100 => false,
            p => rng.random_range(0..100) < 100 - p,
        }
    }

    fn next_bool(&self, config: &Config, rng: &mut dyn RngCore) -> Option<bool> {
        Some(match config.boolean_true_probability {
            q if q < 0 => rng.random_bool(0.5),
            q if q >= 100 => false,
            q => rng.random_range(0..100) < 100 - q,
        })
    }

    fn next_i8(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<i8> {
        outside_int!(config.min_i8, config.max_i8, 2)
    }

    fn next_i16(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<i16> {
        outside_int!(config.min_i16, config.max_i16, 2)
    }

    fn next_i32(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<i32> {
        outside_int!(config.min_i32, config.max_i32, 2)
    }

    fn next_i64(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<i64> {
        outside_int!(config.min_i64, config.max_i64, 2)
    }

    fn next_i128(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<i128> {
        outside_int!(config.min_i128, config.max_i128, 2)
    }

    fn next_f32(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<f32> {
        match (config.min_f32, config.max_f32) {
            (None, None) => None,
            (Some(lo), _) if lo > 2.0 => Some(lo - 2.0),
            (_, Some(hi)) => Some(hi + 2.0),
            (Some(lo), None) => Some(lo - 2.0),
        }
    }

    fn next_f64(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<f64> {
        match (config.min_f64, config.max_f64) {
            (None, None) => None,
            (Some(lo), _) if lo > 2.0 => Some(lo - 2.0),
            (_, Some(hi)) => Some(hi + 2.0),
            (Some(lo), None) => Some(lo - 2.0),
        }
    }

    fn next_decimal(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<Decimal> {
        let two = Decimal::TWO;
        match (config.min_decimal, config.max_decimal) {
            (None, None) => None,
            (Some(lo), _) if lo > two => Some(lo - two),
            (_, Some(hi)) => Some(hi + two),
            (Some(lo), None) => Some(lo - two),
        }
    }

    fn next_char(&self, _config: &Config, rng: &mut dyn RngCore) -> Option<char> {
        // No character-level bounds to violate.
        Some(super::charset_char(rng))
    }

    fn next_text(&self, config: &Config, rng: &mut dyn RngCore) -> Option<String> {
        let len = outside_len(config.min_len, config.max_len)?;
        Some(text_of_len(len, rng))
    }

    fn next_date_millis(&self, config: &Config, _rng: &mut dyn RngCore) -> Option<i64> {
        outside_int!(
            config.min_date_millis,
            config.max_date_millis,
            DATE_STEP_MILLIS
        )
    }
}
