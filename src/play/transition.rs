//! Results of applying a command.

use serde::{Deserialize, Serialize};

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a level to be picked.
    #[default]
    NotStarted,
    /// Cards are being dealt and matched.
    Playing,
    /// Every table card was paid off.
    Won,
    /// The player ran out of cards with table cards left.
    Lost,
}

impl Phase {
    /// Won or Lost. Sticky until reset.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// The player card waiting for a table target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Armed {
    /// Index into the in-play player cards.
    pub index: usize,
    /// Value of the card when it was armed.
    pub value: i32,
}

/// What a successful match did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Index of the table card that was hit.
    pub table_index: usize,
    /// Value spent from the player card.
    pub spent: i32,
    /// Value left on the table card (zero or below when cleared).
    pub remaining: i32,
    /// The table card reached zero and left play.
    pub cleared: bool,
}

/// Why a command changed nothing.
///
/// These are absorbed, never surfaced as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// Card commands outside the `Playing` phase.
    NotPlaying,
    /// Start commands while a game is running or finished.
    AlreadyStarted,
    /// No level at the requested index.
    UnknownLevel,
    /// A match was attempted with nothing armed.
    NoSelection,
    /// No in-play player card at the requested index.
    PlayerIndexOutOfRange,
    /// No in-play table card at the requested index.
    TableIndexOutOfRange,
    /// The armed index no longer points at the armed card.
    StaleSelection,
}

/// Result of [`MatchGame::apply`](super::MatchGame::apply).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A new game began on the level at this index.
    Started { level: usize },
    /// A player card is now armed.
    Armed(Armed),
    /// The armed card was spent on a table card.
    Matched(MatchOutcome),
    /// Everything was cleared.
    Reset,
    /// Nothing changed.
    Ignored(Rejection),
}

impl Transition {
    /// Did the command change state?
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}
