use thiserror::Error;

/// Core error type shared across Fixtura crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The definition violates internal invariants (missing generic
    /// arguments, invalid pattern, and so on).
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),
    /// A constraint was applied to a target kind that cannot carry it.
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// Engine configuration error (registries, strategies).
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias for results returned by Fixtura crates.
pub type Result<T> = std::result::Result<T, Error>;
