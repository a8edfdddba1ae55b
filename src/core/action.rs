//! Commands the host feeds into the match state machine.
//!
//! Raw pointer input is turned into a `Command` by [`crate::input`], or a
//! host may build commands directly (menus, keyboard, replays, bots).

use serde::{Deserialize, Serialize};

/// Handcrafted starting positions for checking the terminal rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Everything empty: evaluates to a win on the first tick.
    WinTest,
    /// No player cards, one table card left: evaluates to a loss.
    LostTest,
}

/// A single player intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Start a game on the level at this index.
    StartLevel(usize),
    /// Start a scripted scenario.
    StartScenario(Scenario),
    /// Arm the in-play player card at this index.
    SelectPlayerCard(usize),
    /// Spend the armed player card on the in-play table card at this index.
    AttemptMatch(usize),
    /// Abandon the current game and return to level selection.
    Reset,
}
