//! Match state machine.
//!
//! - `machine`: `MatchGame`, the owned game state and its transitions
//! - `transition`: phases, armed selection, transition and rejection types
//! - `snapshot`: read-only view for the host
//! - `policy`: automated players

pub mod machine;
pub mod policy;
pub mod snapshot;
pub mod transition;

pub use machine::{MatchGame, StepReport};
pub use policy::{play_out, GreedyPolicy, Policy, RandomPolicy};
pub use snapshot::Snapshot;
pub use transition::{Armed, MatchOutcome, Phase, Rejection, Transition};
