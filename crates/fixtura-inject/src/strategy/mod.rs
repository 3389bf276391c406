use rand::distr::uniform::SampleUniform;
use rand::{Rng, RngCore};
use rust_decimal::Decimal;

use crate::config::Config;

mod anti;
mod defaults;
mod expected;

pub use anti::AntiExpected;
pub use defaults::DefaultValue;
pub use expected::Expected;

/// Generation mode for a synthesis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjectMode {
    /// Produced values satisfy every constraint.
    Expected,
    /// Produced values violate at least one constraint ("break next": the
    /// first processor that can force a violation may stop the chain).
    AntiExpected,
    /// Constraints are ignored; the type's zero/empty/null baseline.
    DefaultValue,
}

/// Draws one scalar of each supported kind from a `Config`.
///
/// All methods are total: a `None` result means "absent", never an error.
pub trait ValueStrategy: Send + Sync {
    fn mode(&self) -> InjectMode;

    /// Element count for the next container draw.
    fn next_size(&self, config: &Config, rng: &mut dyn RngCore) -> usize;

    /// Whether the next reference-kind field should be absent.
    fn roll_null(&self, config: &Config, rng: &mut dyn RngCore) -> bool;

    fn next_bool(&self, config: &Config, rng: &mut dyn RngCore) -> Option<bool>;
    fn next_i8(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i8>;
    fn next_i16(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i16>;
    fn next_i32(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i32>;
    fn next_i64(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i64>;
    fn next_i128(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i128>;
    fn next_f32(&self, config: &Config, rng: &mut dyn RngCore) -> Option<f32>;
    fn next_f64(&self, config: &Config, rng: &mut dyn RngCore) -> Option<f64>;
    fn next_decimal(&self, config: &Config, rng: &mut dyn RngCore) -> Option<Decimal>;
    fn next_char(&self, config: &Config, rng: &mut dyn RngCore) -> Option<char>;
    fn next_text(&self, config: &Config, rng: &mut dyn RngCore) -> Option<String>;

    /// Epoch milliseconds; the factory assembles the concrete temporal kind.
    fn next_date_millis(&self, config: &Config, rng: &mut dyn RngCore) -> Option<i64>;
}

pub(crate) const CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Uniform draw over `[min, max]`, normalizing bound order. Either bound
/// absent yields `None`; equal bounds return that bound without consulting
/// the RNG.
pub(crate) fn uniform<T>(min: Option<T>, max: Option<T>, rng: &mut dyn RngCore) -> Option<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    let (mut lo, mut hi) = (min?, max?);
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    if !(lo < hi) {
        return Some(lo);
    }
    Some(rng.random_range(lo..=hi))
}

pub(crate) fn charset_char(rng: &mut dyn RngCore) -> char {
    let bytes = CHARSET.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

pub(crate) fn text_of_len(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len).map(|_| charset_char(rng)).collect()
}
