//! Table and player deck generation.
//!
//! The player deck is built from the table deck: every table value is split
//! into one or two player values that sum to it exactly. The player deck is
//! then shuffled in blocks, so the cards that pay off a table card stay
//! close to each other in draw order.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Card, GameRng, Level, Origin};

const LOG_TARGET: &str = "deck_match::deck";

/// Player values produced for one table value. Never more than two.
pub type Decomposition = SmallVec<[i32; 2]>;

/// Freshly generated decks for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// Table cards, last element drawn first.
    pub table_deck: Vec<Card>,
    /// Player cards, last element drawn first.
    pub player_deck: Vec<Card>,
}

/// Generate `level.table_deck_size` table cards with values drawn uniformly
/// from `table_values`.
///
/// `table_values` is expected to come from a validated
/// [`GameConfig`](crate::core::GameConfig). An empty set yields an empty deck.
pub fn generate_table_deck(level: &Level, table_values: &[i32], rng: &mut GameRng) -> Vec<Card> {
    (0..level.table_deck_size)
        .filter_map(|_| rng.choose(table_values).copied())
        .map(|value| Card {
            origin: Origin::Table,
            face: value,
            value,
        })
        .collect()
}

/// Split `target` into one or two positive values summing to it exactly.
///
/// The first value is drawn uniformly from `1..=target`. If it falls short,
/// a second is drawn from `1..=target - first`, and any remaining gap is
/// added to the last value. A target below 1 has no decomposition.
pub fn generate_matching_values(target: i32, rng: &mut GameRng) -> Decomposition {
    let mut values = Decomposition::new();
    if target < 1 {
        return values;
    }

    let first = rng.gen_range_inclusive(1..=target);
    values.push(first);
    if first < target {
        values.push(rng.gen_range_inclusive(1..=target - first));
    }

    let sum: i32 = values.iter().sum();
    if let Some(last) = values.last_mut() {
        *last += target - sum;
    }

    settle(&mut values, target);
    trace!(target: LOG_TARGET, table_value = target, ?values, "decomposed table value");
    values
}

/// Clamp every summand to at least 1 and push the difference onto the
/// largest one. Falls back to a single card when that cannot work.
fn settle(values: &mut Decomposition, target: i32) {
    for value in values.iter_mut() {
        *value = (*value).max(1);
    }

    let diff = target - values.iter().sum::<i32>();
    if diff != 0 {
        if let Some(largest) = values.iter_mut().max() {
            *largest += diff;
        }
    }

    if values.iter().any(|&v| v < 1) {
        values.clear();
        values.push(target);
    }
}

/// Decompose every table card, keeping table order.
pub fn generate_player_blocks(table_deck: &[Card], rng: &mut GameRng) -> Vec<Decomposition> {
    table_deck
        .iter()
        .map(|card| generate_matching_values(card.value, rng))
        .collect()
}

/// Build the player deck: the decompositions of every table card, one block
/// after another in table order.
pub fn generate_player_deck(table_deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    generate_player_blocks(table_deck, rng)
        .into_iter()
        .flatten()
        .map(|value| Card {
            origin: Origin::Player,
            face: value,
            value,
        })
        .collect()
}

/// Shuffle each contiguous block of `group_size` cards independently.
///
/// The last block may be shorter. A deck smaller than one block, or a zero
/// block size, is left untouched.
pub fn regroup_and_shuffle<T>(deck: &mut [T], group_size: usize, rng: &mut GameRng) {
    if group_size == 0 || deck.len() < group_size {
        return;
    }

    for block in deck.chunks_mut(group_size) {
        rng.shuffle(block);
    }
}

/// Run the full generation pipeline for a level.
pub fn generate_deal(level: &Level, table_values: &[i32], rng: &mut GameRng) -> Deal {
    let table_deck = generate_table_deck(level, table_values, rng);
    let mut player_deck = generate_player_deck(&table_deck, rng);
    regroup_and_shuffle(&mut player_deck, level.group_size(), rng);

    debug!(
        target: LOG_TARGET,
        level = %level.name,
        table_cards = table_deck.len(),
        player_cards = player_deck.len(),
        "generated decks"
    );

    Deal {
        table_deck,
        player_deck,
    }
}
