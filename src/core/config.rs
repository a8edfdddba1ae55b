//! Game configuration types.
//!
//! - `Level`: deck size and how many cards are in play at once
//! - `GameConfig`: the selectable levels plus generation rules
//!
//! The defaults reproduce the three classic presets (Easy, Medium, Hard)
//! and the {12, 13, 14} table value set.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::card::{Card, Origin};
use super::error::ConfigError;

/// A difficulty preset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Human-readable name (for display).
    pub name: String,

    /// Number of table cards generated.
    pub table_deck_size: usize,

    /// Cards dealt into play per side. The player deck is regrouped in
    /// blocks of twice this size.
    pub in_play_count: usize,
}

impl Level {
    /// Create a new level.
    pub fn new(name: impl Into<String>, table_deck_size: usize, in_play_count: usize) -> Self {
        Self {
            name: name.into(),
            table_deck_size,
            in_play_count,
        }
    }

    /// 12 table cards, 3 in play.
    pub fn easy() -> Self {
        Self::new("Easy", 12, 3)
    }

    /// 16 table cards, 4 in play.
    pub fn medium() -> Self {
        Self::new("Medium", 16, 4)
    }

    /// 20 table cards, 5 in play.
    pub fn hard() -> Self {
        Self::new("Hard", 20, 5)
    }

    /// Block size used when regrouping the player deck.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.in_play_count * 2
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Selectable levels, addressed by index.
    pub levels: Vec<Level>,

    /// Values a table card is drawn from, uniformly.
    pub table_values: SmallVec<[i32; 3]>,

    /// Deal a short final hand when a deck can no longer fill one.
    pub partial_draws: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: vec![Level::easy(), Level::medium(), Level::hard()],
            table_values: smallvec![12, 13, 14],
            partial_draws: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration with no levels.
    pub fn empty() -> Self {
        Self {
            levels: Vec::new(),
            ..Self::default()
        }
    }

    /// Add a level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.levels.push(level);
        self
    }

    /// Replace the table value set.
    #[must_use]
    pub fn with_table_values(mut self, values: &[i32]) -> Self {
        self.table_values = SmallVec::from_slice(values);
        self
    }

    /// Toggle dealing of short final hands.
    #[must_use]
    pub fn with_partial_draws(mut self, partial: bool) -> Self {
        self.partial_draws = partial;
        self
    }

    /// Get a level by index.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for level in &self.levels {
            if level.in_play_count == 0 {
                return Err(ConfigError::ZeroInPlayCount(level.name.clone()));
            }
            if level.table_deck_size == 0 {
                return Err(ConfigError::ZeroDeckSize(level.name.clone()));
            }
            if !self.partial_draws && level.table_deck_size % level.in_play_count != 0 {
                return Err(ConfigError::UnevenTableDeck(level.name.clone()));
            }
        }
        if self.table_values.is_empty() {
            return Err(ConfigError::NoTableValues);
        }
        for &value in &self.table_values {
            Card::new(Origin::Table, value)?;
        }
        Ok(())
    }
}
