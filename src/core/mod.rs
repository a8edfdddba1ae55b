//! Core types: RNG, cards, levels and configuration, commands, errors.
//!
//! Everything here is independent of deck generation and of the match
//! state machine, which both build on it.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{Command, Scenario};
pub use card::{Card, Origin};
pub use config::{GameConfig, Level};
pub use error::{CardError, ConfigError};
pub use rng::{GameRng, GameRngState};
