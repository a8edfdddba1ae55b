//! Deck generation.
//!
//! Runs once per game start and produces the table deck and a player deck
//! that can pay off every table card exactly.

pub mod generator;

pub use generator::{
    generate_deal, generate_matching_values, generate_player_blocks, generate_player_deck,
    generate_table_deck, regroup_and_shuffle, Deal, Decomposition,
};
