//! Cards and their value table.
//!
//! A card's printed `face` never changes. Its `value` is what is left to pay
//! off (table cards) or to spend (player cards), and only table cards ever
//! see it drop below the face.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::CardError;

/// Which side of the game a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Cards the player must reduce to zero.
    Table,
    /// Cards the player spends against table cards.
    Player,
}

impl Origin {
    /// Printed values a card of this origin may carry.
    #[must_use]
    pub const fn valid_range(self) -> RangeInclusive<i32> {
        match self {
            Origin::Table => 12..=14,
            Origin::Player => 1..=14,
        }
    }

    /// Suit used by the presentation layer's asset names.
    #[must_use]
    pub const fn suit(self) -> &'static str {
        match self {
            Origin::Table => "Hearts",
            Origin::Player => "Spades",
        }
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Table or player side.
    pub origin: Origin,

    /// Printed value, fixed at creation.
    pub face: i32,

    /// Remaining value.
    pub value: i32,
}

impl Card {
    /// Create a card, checking the value against its origin's range.
    pub fn new(origin: Origin, value: i32) -> Result<Self, CardError> {
        let range = origin.valid_range();
        if !range.contains(&value) {
            return Err(CardError::ValueOutOfRange {
                origin,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(Self {
            origin,
            face: value,
            value,
        })
    }

    /// Create a table card.
    pub fn table(value: i32) -> Result<Self, CardError> {
        Self::new(Origin::Table, value)
    }

    /// Create a player card.
    pub fn player(value: i32) -> Result<Self, CardError> {
        Self::new(Origin::Player, value)
    }

    /// Asset name for the card face, e.g. `cardSpades7` or `cardHearts13`.
    #[must_use]
    pub fn asset_key(&self) -> String {
        format!("card{}{}", self.origin.suit(), self.face)
    }

    /// Has this card been paid off?
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.value <= 0
    }
}
