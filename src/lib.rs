//! # deck-match
//!
//! Core logic for a single-player sum-matching card game.
//!
//! A *table* deck of high cards (12, 13, 14) confronts a *player* deck that is
//! generated so every table card can be paid off exactly by one or two player
//! cards. The player arms a player card, then spends it against a table card.
//! Table cards that reach zero leave the game. Clearing the table wins;
//! running out of player cards with table cards left loses.
//!
//! ## Design Principles
//!
//! 1. **No rendering**: Windowing, textures and layout live in the host.
//!    The host feeds `Command`s in and reads `Snapshot`s out.
//!
//! 2. **Owned state**: All game state sits in one `MatchGame` value passed
//!    by reference. There are no globals.
//!
//! 3. **Deterministic**: One seeded `GameRng` drives every random choice, so
//!    a seed reproduces a deal exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, cards, levels and configuration, commands, errors
//! - `deck`: Table and player deck generation
//! - `play`: Match state machine, snapshots, scenarios, policies
//! - `input`: Pointer hit-testing that turns a frame of input into a command

pub mod core;
pub mod deck;
pub mod input;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Card, CardError, Command, ConfigError, GameConfig, GameRng, GameRngState, Level, Origin,
    Scenario,
};

pub use crate::deck::{
    generate_matching_values, generate_player_deck, generate_table_deck, regroup_and_shuffle,
    Decomposition,
};

pub use crate::play::{
    play_out, Armed, GreedyPolicy, MatchGame, MatchOutcome, Phase, Policy, RandomPolicy,
    Rejection, Snapshot, StepReport, Transition,
};

pub use crate::input::{FrameInput, HitTarget, Hitbox, Point, Rect};
