//! Construction-time errors.
//!
//! Gameplay itself never fails: bad commands are absorbed as
//! [`Rejection`](crate::play::Rejection)s. These errors only come from
//! building cards and validating configuration.

use super::card::Origin;

/// A card value outside its origin's valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("{origin:?} card value {value} outside {min}..={max}")]
    ValueOutOfRange {
        origin: Origin,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Invalid `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one level is required")]
    NoLevels,
    #[error("level {0:?} deals zero cards into play")]
    ZeroInPlayCount(String),
    #[error("level {0:?} has an empty table deck")]
    ZeroDeckSize(String),
    #[error("level {0:?} table deck is not a whole number of hands")]
    UnevenTableDeck(String),
    #[error("table value set is empty")]
    NoTableValues,
    #[error(transparent)]
    TableValue(#[from] CardError),
}
