//! Read-only view of a game for the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Level};

use super::transition::{Armed, Phase};

/// Everything a host needs to draw one frame.
///
/// Cloning is O(1): the collections share structure with the live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub level: Option<Level>,
    pub table_deck: Vector<Card>,
    pub table_cards: Vector<Card>,
    pub player_deck: Vector<Card>,
    pub player_cards: Vector<Card>,
    pub armed: Option<Armed>,
}

impl Snapshot {
    /// Is the in-play player card at `index` armed?
    #[must_use]
    pub fn is_armed(&self, index: usize) -> bool {
        self.armed.is_some_and(|a| a.index == index)
    }

    /// Footer line: difficulty and deck sizes.
    #[must_use]
    pub fn status_line(&self) -> String {
        let name = self.level.as_ref().map_or("-", |l| l.name.as_str());
        format!(
            "Difficulty: {}, Table Deck: {}, Player Deck: {}",
            name,
            self.table_deck.len(),
            self.player_deck.len()
        )
    }

    /// Banner for a finished game.
    #[must_use]
    pub fn result_text(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Won => Some("You won!"),
            Phase::Lost => Some("You lost!"),
            Phase::NotStarted | Phase::Playing => None,
        }
    }
}
