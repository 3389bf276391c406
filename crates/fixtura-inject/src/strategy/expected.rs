use rand::{Rng, RngCore};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::config::Config;
use crate::strategy::{InjectMode, ValueStrategy, text_of_len, uniform};

/// Constraint-satisfying strategy: uniform draws inside the configured
/// bounds.
pub struct Expected;

impl ValueStrategy for Expected {
    fn mode(&self) -> InjectMode {
        InjectMode::Expected
    }

    fn next_size(&self, config: &Config, rng: &mut dyn RngCore) -> usize {
        uniform(config.min_size, config.max_size, rng).unwrap_or(0)
    }

    fn roll_null(&self, config: &Config, rng: &mut dyn RngCore) -> bool {
        match config.nullable_probability {
            p if p < 0 => false,
            p if p >= 100 => true,
            p => rng.random_range(0..100) < p,
        }
    }

    fn next_bool(&self, config: &Config, rng: &mut dyn RngCore) -> Option<bool> {
        Some(match config.boolean_true_probability {
            q if q < 0 => rng.random_bool(0.5),
            q if q >= 100 => true,
            q => rng.random_range(0..100) < q,
        })
    }

    fn next_i8(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i8> {
        uniform(config.min_i8, config.max_i8, rng)
    }

    fn next_i16(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i16> {
        uniform(config.min_i16, config.max_i16, rng)
    }

    fn next_i32(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i32> {
        uniform(config.min_i32, config.max_i32, rng)
    }

    fn next_i64(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i64> {
        uniform(config.min_i64, config.max_i64, rng)
    }

    fn next_i128(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i128> {
        uniform(config.min_i128, config.max_i128, rng)
    }

    fn next_f32(&self, config: &Config, rng: &mut dyn RngCore) -> Option<f32> {
        uniform(config.min_f32, config.max_f32, rng)
    }

    fn next_f64(&self, config: &Config, rng: &mut dyn RngCore) -> Option<f64> {
        uniform(config.min_f64, config.max_f64, rng)
    }

    fn next_decimal(&self, config: &Config, rng: &mut dyn RngCore) -> Option<Decimal> {
        let (mut lo, mut hi) = (config.min_decimal?, config.max_decimal?);
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        if lo == hi {
            return Some(lo);
        }
        let raw = rng.random_range(lo.to_f64()?..=hi.to_f64()?);
        let rounded = Decimal::from_f64(raw)?.round_dp(config.decimal_scale);
        // Rounding can nudge the draw past a bound; clamp back inside.
        Some(rounded.clamp(lo, hi))
    }

    fn next_char(&self, _config: &Config, rng: &mut dyn RngCore) -> Option<char> {
        Some(super::charset_char(rng))
    }

    fn next_text(&self, config: &Config, rng: &mut dyn RngCore) -> Option<String> {
        let len = uniform(config.min_len, config.max_len, rng)?;
        Some(text_of_len(len, rng))
    }

    fn next_date_millis(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i64> {
        uniform(config.min_date_millis, config.max_date_millis, rng)
    }
}
