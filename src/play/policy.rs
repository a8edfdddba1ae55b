//! Automated players.
//!
//! Policies pick the next command for a running game:
//! - `RandomPolicy`: uniform over the legal commands
//! - `GreedyPolicy`: pays table cards off as tightly as it can
//!
//! Used by the `autoplay` driver and by tests that play whole games.

use std::cmp::Reverse;

use im::Vector;
use tracing::debug;

use crate::core::{Card, Command, GameRng};

use super::machine::MatchGame;
use super::transition::Phase;

const LOG_TARGET: &str = "deck_match::policy";

/// Picks the next command for a game in progress.
pub trait Policy {
    /// Choose a command, or `None` if the policy has nothing to do.
    fn choose(&mut self, game: &MatchGame, rng: &mut GameRng) -> Option<Command>;
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn choose(&mut self, game: &MatchGame, rng: &mut GameRng) -> Option<Command> {
        let commands = game.legal_commands();
        rng.choose(&commands).copied()
    }
}

/// Greedy policy.
///
/// Prefers exact payoffs, then the largest card that does not overshoot,
/// then the smallest overshoot.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

/// Lower is better: exact, then under by a large card, then least waste.
fn fit(spend: i32, owed: i32) -> (u8, i32) {
    use std::cmp::Ordering;
    match spend.cmp(&owed) {
        Ordering::Equal => (0, 0),
        Ordering::Less => (1, -spend),
        Ordering::Greater => (2, spend - owed),
    }
}

fn best_target(spend: i32, table: &Vector<Card>) -> Option<usize> {
    table
        .iter()
        .enumerate()
        .min_by_key(|(i, card)| (fit(spend, card.value), Reverse(card.value), *i))
        .map(|(i, _)| i)
}

fn best_pair(player: &Vector<Card>, table: &Vector<Card>) -> Option<(usize, usize)> {
    player
        .iter()
        .enumerate()
        .filter_map(|(p, card)| {
            best_target(card.value, table).map(|t| (fit(card.value, table[t].value), p, t))
        })
        .min()
        .map(|(_, p, t)| (p, t))
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, game: &MatchGame, _rng: &mut GameRng) -> Option<Command> {
        if game.phase() != Phase::Playing {
            return None;
        }

        match game.armed() {
            Some(armed) => best_target(armed.value, game.table_cards()).map(Command::AttemptMatch),
            None => best_pair(game.player_cards(), game.table_cards())
                .map(|(p, _)| Command::SelectPlayerCard(p)),
        }
    }
}

/// Drive a started game until it ends, the policy gives up, or
/// `max_steps` commands have been applied.
pub fn play_out<P: Policy + ?Sized>(
    game: &mut MatchGame,
    policy: &mut P,
    rng: &mut GameRng,
    max_steps: usize,
) -> Phase {
    for _ in 0..max_steps {
        let phase = game.tick();
        if phase != Phase::Playing {
            return phase;
        }
        let Some(command) = policy.choose(game, rng) else {
            debug!(target: LOG_TARGET, "policy has no move");
            return phase;
        };
        game.apply(command);
    }
    game.tick()
}
