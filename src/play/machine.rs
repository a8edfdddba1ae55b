//! The match state machine.
//!
//! `NotStarted -> Playing -> {Won, Lost}`, with `Reset` returning to
//! `NotStarted` from anywhere.
//!
//! The host drives it once per frame: optionally [`MatchGame::apply`] a
//! command, then [`MatchGame::tick`] to deal empty hands and evaluate the
//! terminal rules. [`MatchGame::step`] does both.
//!
//! Decks and in-play sets are `im::Vector`s, so [`MatchGame::snapshot`] is
//! O(1) and the host can keep old snapshots around for rendering.

use im::Vector;
use tracing::{debug, info};

use crate::core::{Card, Command, ConfigError, GameConfig, GameRng, GameRngState, Level, Origin, Scenario};
use crate::deck::generate_deal;

use super::snapshot::Snapshot;
use super::transition::{Armed, MatchOutcome, Phase, Rejection, Transition};

const LOG_TARGET: &str = "deck_match::play";

/// Outcome of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// What the frame's command did, if there was one.
    pub transition: Option<Transition>,
    /// Phase after dealing and evaluation.
    pub phase: Phase,
}

/// All game state, owned in one place.
#[derive(Clone, Debug)]
pub struct MatchGame {
    config: GameConfig,
    rng: GameRng,
    phase: Phase,
    level: Option<usize>,
    table_deck: Vector<Card>,
    table_cards: Vector<Card>,
    player_deck: Vector<Card>,
    player_cards: Vector<Card>,
    armed: Option<Armed>,
}

impl MatchGame {
    /// Create a game waiting for level selection.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: GameRng::new(seed),
            phase: Phase::NotStarted,
            level: None,
            table_deck: Vector::new(),
            table_cards: Vector::new(),
            player_deck: Vector::new(),
            player_cards: Vector::new(),
            armed: None,
        })
    }

    /// Create a game with the three standard levels.
    #[must_use]
    pub fn with_defaults(seed: u64) -> Self {
        Self {
            config: GameConfig::default(),
            rng: GameRng::new(seed),
            phase: Phase::NotStarted,
            level: None,
            table_deck: Vector::new(),
            table_cards: Vector::new(),
            player_deck: Vector::new(),
            player_cards: Vector::new(),
            armed: None,
        }
    }

    // === Accessors ===

    /// The configuration this game was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the level being played.
    pub fn level_index(&self) -> Option<usize> {
        self.level
    }

    /// The level being played.
    pub fn level(&self) -> Option<&Level> {
        self.level.and_then(|i| self.config.level(i))
    }

    /// Undealt table cards; the last one is dealt first.
    pub fn table_deck(&self) -> &Vector<Card> {
        &self.table_deck
    }

    /// Table cards in play.
    pub fn table_cards(&self) -> &Vector<Card> {
        &self.table_cards
    }

    /// Undealt player cards; the last one is dealt first.
    pub fn player_deck(&self) -> &Vector<Card> {
        &self.player_deck
    }

    /// Player cards in play.
    pub fn player_cards(&self) -> &Vector<Card> {
        &self.player_cards
    }

    /// The armed player card, if any.
    pub fn armed(&self) -> Option<Armed> {
        self.armed
    }

    /// RNG position, for reproducing the next deal.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Value still owed across the table deck and table cards.
    pub fn table_value_remaining(&self) -> i32 {
        self.table_deck.iter().chain(self.table_cards.iter()).map(|c| c.value).sum()
    }

    /// Value still held across the player deck and player cards.
    pub fn player_value_remaining(&self) -> i32 {
        self.player_deck.iter().chain(self.player_cards.iter()).map(|c| c.value).sum()
    }

    /// Read-only copy of everything the host draws.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            level: self.level().cloned(),
            table_deck: self.table_deck.clone(),
            table_cards: self.table_cards.clone(),
            player_deck: self.player_deck.clone(),
            player_cards: self.player_cards.clone(),
            armed: self.armed,
        }
    }

    // === Commands ===

    /// Apply one command. Invalid commands change nothing and come back as
    /// [`Transition::Ignored`].
    pub fn apply(&mut self, command: Command) -> Transition {
        let transition = match command {
            Command::StartLevel(index) => self.start_level(index),
            Command::StartScenario(scenario) => self.start_scenario(scenario),
            Command::SelectPlayerCard(index) => self.select_player_card(index),
            Command::AttemptMatch(index) => self.attempt_match(index),
            Command::Reset => self.reset(),
        };

        if let Transition::Ignored(reason) = transition {
            debug!(target: LOG_TARGET, ?command, ?reason, "command ignored");
        }
        transition
    }

    /// One frame: apply the command if any, then [`tick`](Self::tick).
    pub fn step(&mut self, command: Option<Command>) -> StepReport {
        let transition = command.map(|c| self.apply(c));
        StepReport {
            transition,
            phase: self.tick(),
        }
    }

    /// Deal into empty in-play sets, then evaluate win and loss.
    ///
    /// Does nothing outside `Playing`.
    pub fn tick(&mut self) -> Phase {
        if self.phase != Phase::Playing {
            return self.phase;
        }

        let Some(hand) = self.level().map(|l| l.in_play_count) else {
            return self.phase;
        };
        let partial = self.config.partial_draws;

        if self.table_cards.is_empty() {
            if let Some(dealt) = deal(&mut self.table_deck, hand, partial) {
                debug!(target: LOG_TARGET, cards = dealt.len(), left = self.table_deck.len(), "dealt table cards");
                self.table_cards = dealt;
            }
        }
        if self.player_cards.is_empty() {
            if let Some(dealt) = deal(&mut self.player_deck, hand, partial) {
                debug!(target: LOG_TARGET, cards = dealt.len(), left = self.player_deck.len(), "dealt player cards");
                self.player_cards = dealt;
            }
        }

        if self.is_won() {
            self.finish(Phase::Won);
        } else if self.is_lost(hand, partial) {
            self.finish(Phase::Lost);
        }
        self.phase
    }

    /// Commands that advance play from the current state.
    ///
    /// `Reset` is always accepted and is not listed. Scenarios are not
    /// listed either.
    pub fn legal_commands(&self) -> Vec<Command> {
        match self.phase {
            Phase::NotStarted => (0..self.config.levels.len()).map(Command::StartLevel).collect(),
            Phase::Playing => {
                let armed_index = self.armed.map(|a| a.index);
                let mut commands: Vec<Command> = (0..self.player_cards.len())
                    .filter(|&i| Some(i) != armed_index)
                    .map(Command::SelectPlayerCard)
                    .collect();
                if self.armed.is_some() {
                    commands.extend((0..self.table_cards.len()).map(Command::AttemptMatch));
                }
                commands
            }
            Phase::Won | Phase::Lost => Vec::new(),
        }
    }

    fn start_level(&mut self, index: usize) -> Transition {
        if self.phase != Phase::NotStarted {
            return Transition::Ignored(Rejection::AlreadyStarted);
        }
        let Some(level) = self.config.level(index) else {
            return Transition::Ignored(Rejection::UnknownLevel);
        };

        let deal = generate_deal(level, &self.config.table_values, &mut self.rng);
        info!(
            target: LOG_TARGET,
            level = %level.name,
            table_cards = deal.table_deck.len(),
            player_cards = deal.player_deck.len(),
            "game started"
        );

        self.clear();
        self.table_deck = deal.table_deck.into_iter().collect();
        self.player_deck = deal.player_deck.into_iter().collect();
        self.level = Some(index);
        self.phase = Phase::Playing;
        Transition::Started { level: index }
    }

    fn start_scenario(&mut self, scenario: Scenario) -> Transition {
        if self.phase != Phase::NotStarted {
            return Transition::Ignored(Rejection::AlreadyStarted);
        }

        self.clear();
        if scenario == Scenario::LostTest {
            let value = self.config.table_values.first().copied().unwrap_or(12);
            self.table_cards.push_back(Card {
                origin: Origin::Table,
                face: value,
                value,
            });
        }
        info!(target: LOG_TARGET, ?scenario, "scenario started");

        self.level = Some(0);
        self.phase = Phase::Playing;
        Transition::Started { level: 0 }
    }

    fn select_player_card(&mut self, index: usize) -> Transition {
        if self.phase != Phase::Playing {
            return Transition::Ignored(Rejection::NotPlaying);
        }
        let Some(card) = self.player_cards.get(index) else {
            return Transition::Ignored(Rejection::PlayerIndexOutOfRange);
        };

        let armed = Armed {
            index,
            value: card.value,
        };
        debug!(target: LOG_TARGET, index, value = card.value, "player card armed");
        self.armed = Some(armed);
        Transition::Armed(armed)
    }

    fn attempt_match(&mut self, table_index: usize) -> Transition {
        if self.phase != Phase::Playing {
            return Transition::Ignored(Rejection::NotPlaying);
        }
        let Some(armed) = self.armed else {
            return Transition::Ignored(Rejection::NoSelection);
        };
        if table_index >= self.table_cards.len() {
            return Transition::Ignored(Rejection::TableIndexOutOfRange);
        }
        if self.player_cards.get(armed.index).map(|c| c.value) != Some(armed.value) {
            self.armed = None;
            return Transition::Ignored(Rejection::StaleSelection);
        }

        let remaining = match self.table_cards.get_mut(table_index) {
            Some(card) => {
                card.value -= armed.value;
                card.value
            }
            None => return Transition::Ignored(Rejection::TableIndexOutOfRange),
        };
        self.player_cards.remove(armed.index);
        let cleared = remaining <= 0;
        if cleared {
            self.table_cards.remove(table_index);
        }
        self.armed = None;

        debug!(
            target: LOG_TARGET,
            table_index,
            spent = armed.value,
            remaining,
            cleared,
            "match resolved"
        );
        Transition::Matched(MatchOutcome {
            table_index,
            spent: armed.value,
            remaining,
            cleared,
        })
    }

    fn reset(&mut self) -> Transition {
        self.clear();
        self.level = None;
        self.phase = Phase::NotStarted;
        info!(target: LOG_TARGET, "game reset");
        Transition::Reset
    }

    fn clear(&mut self) {
        self.table_deck.clear();
        self.table_cards.clear();
        self.player_deck.clear();
        self.player_cards.clear();
        self.armed = None;
    }

    fn is_won(&self) -> bool {
        self.table_cards.is_empty()
            && self.table_deck.is_empty()
            && self.player_cards.is_empty()
            && self.player_deck.is_empty()
    }

    fn is_lost(&self, hand: usize, partial: bool) -> bool {
        let player_exhausted =
            self.player_cards.is_empty() && !can_deal(&self.player_deck, hand, partial);
        let table_left = !self.table_cards.is_empty() || !self.table_deck.is_empty();
        player_exhausted && table_left
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.armed = None;
        info!(
            target: LOG_TARGET,
            ?phase,
            table_value_left = self.table_value_remaining(),
            player_cards_left = self.player_deck.len() + self.player_cards.len(),
            "game over"
        );
    }
}

fn can_deal(deck: &Vector<Card>, hand: usize, partial: bool) -> bool {
    if partial {
        !deck.is_empty()
    } else {
        deck.len() >= hand
    }
}

/// Take a hand off the tail of `deck`, keeping deck order.
fn deal(deck: &mut Vector<Card>, hand: usize, partial: bool) -> Option<Vector<Card>> {
    if hand == 0 || !can_deal(deck, hand, partial) {
        return None;
    }
    let at = deck.len().saturating_sub(hand);
    Some(deck.split_off(at))
}
