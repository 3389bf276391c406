use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declarative validation constraint attached to a synthesis target.
///
/// Tags mirror the field-level validation markers found on the types the
/// engine synthesizes; the engine consumes them as synthesis directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum ConstraintTag {
    NotNull,
    NotEmpty,
    NotBlank,
    Null,
    Positive,
    PositiveOrZero,
    Negative,
    NegativeOrZero,
    Min { value: i64 },
    Max { value: i64 },
    DecimalMin { value: Decimal, inclusive: bool },
    DecimalMax { value: Decimal, inclusive: bool },
    Digits { integer: u32, fraction: u32 },
    Size { min: usize, max: usize },
    Future,
    FutureOrPresent,
    Past,
    PastOrPresent,
    AssertTrue,
    AssertFalse,
    Email,
    Pattern { regex: String },
}

impl ConstraintTag {
    /// Fieldless kind of this tag, used for processor matching.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            ConstraintTag::NotNull => ConstraintKind::NotNull,
            ConstraintTag::NotEmpty => ConstraintKind::NotEmpty,
            ConstraintTag::NotBlank => ConstraintKind::NotBlank,
            ConstraintTag::Null => ConstraintKind::Null,
            ConstraintTag::Positive => ConstraintKind::Positive,
            ConstraintTag::PositiveOrZero => ConstraintKind::PositiveOrZero,
            ConstraintTag::Negative => ConstraintKind::Negative,
            ConstraintTag::NegativeOrZero => ConstraintKind::NegativeOrZero,
            ConstraintTag::Min { .. } => ConstraintKind::Min,
            ConstraintTag::Max { .. } => ConstraintKind::Max,
            ConstraintTag::DecimalMin { .. } => ConstraintKind::DecimalMin,
            ConstraintTag::DecimalMax { .. } => ConstraintKind::DecimalMax,
            ConstraintTag::Digits { .. } => ConstraintKind::Digits,
            ConstraintTag::Size { .. } => ConstraintKind::Size,
            ConstraintTag::Future => ConstraintKind::Future,
            ConstraintTag::FutureOrPresent => ConstraintKind::FutureOrPresent,
            ConstraintTag::Past => ConstraintKind::Past,
            ConstraintTag::PastOrPresent => ConstraintKind::PastOrPresent,
            ConstraintTag::AssertTrue => ConstraintKind::AssertTrue,
            ConstraintTag::AssertFalse => ConstraintKind::AssertFalse,
            ConstraintTag::Email => ConstraintKind::Email,
            ConstraintTag::Pattern { .. } => ConstraintKind::Pattern,
        }
    }
}

/// Closed set of constraint tag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    NotNull,
    NotEmpty,
    NotBlank,
    Null,
    Positive,
    PositiveOrZero,
    Negative,
    NegativeOrZero,
    Min,
    Max,
    DecimalMin,
    DecimalMax,
    Digits,
    Size,
    Future,
    FutureOrPresent,
    Past,
    PastOrPresent,
    AssertTrue,
    AssertFalse,
    Email,
    Pattern,
}

impl ConstraintKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [ConstraintKind; 22] = [
        ConstraintKind::NotNull,
        ConstraintKind::NotEmpty,
        ConstraintKind::NotBlank,
        ConstraintKind::Null,
        ConstraintKind::Positive,
        ConstraintKind::PositiveOrZero,
        ConstraintKind::Negative,
        ConstraintKind::NegativeOrZero,
        ConstraintKind::Min,
        ConstraintKind::Max,
        ConstraintKind::DecimalMin,
        ConstraintKind::DecimalMax,
        ConstraintKind::Digits,
        ConstraintKind::Size,
        ConstraintKind::Future,
        ConstraintKind::FutureOrPresent,
        ConstraintKind::Past,
        ConstraintKind::PastOrPresent,
        ConstraintKind::AssertTrue,
        ConstraintKind::AssertFalse,
        ConstraintKind::Email,
        ConstraintKind::Pattern,
    ];
}
