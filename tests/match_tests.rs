//! Match state machine tests driven through the public API.

use deck_match::input::resolve;
use deck_match::{
    play_out, Card, Command, FrameInput, GameConfig, GameRng, GreedyPolicy, HitTarget, Hitbox,
    Level, MatchGame, Phase, Point, RandomPolicy, Rect, Rejection, Scenario, Transition,
};

fn card_count(game: &MatchGame) -> (usize, usize) {
    (
        game.table_deck().len() + game.table_cards().len(),
        game.player_deck().len() + game.player_cards().len(),
    )
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_lost_scenario_evaluates_immediately() {
    let mut game = MatchGame::with_defaults(42);
    let report = game.step(Some(Command::StartScenario(Scenario::LostTest)));

    assert_eq!(report.phase, Phase::Lost);
    assert!(game.player_deck().is_empty());
    assert!(game.player_cards().is_empty());
    assert_eq!(game.table_cards().len(), 1);
}

#[test]
fn test_win_scenario_evaluates_immediately() {
    let mut game = MatchGame::with_defaults(42);
    let report = game.step(Some(Command::StartScenario(Scenario::WinTest)));

    assert_eq!(report.phase, Phase::Won);
    assert_eq!(card_count(&game), (0, 0));
}

#[test]
fn test_reset_after_scenario_allows_new_level() {
    let mut game = MatchGame::with_defaults(42);
    game.step(Some(Command::StartScenario(Scenario::WinTest)));
    game.step(Some(Command::Reset));

    let report = game.step(Some(Command::StartLevel(1)));
    assert_eq!(report.transition, Some(Transition::Started { level: 1 }));
    assert_eq!(report.phase, Phase::Playing);
    assert_eq!(game.table_cards().len(), 4);
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_match_consumes_one_card_and_armed_value() {
    let mut game = MatchGame::with_defaults(17);
    game.step(Some(Command::StartLevel(0)));

    let (table_before, player_before) = card_count(&game);
    let owed_before = game.table_cards()[0].value;
    let spend = game.player_cards()[0].value;

    game.apply(Command::SelectPlayerCard(0));
    let transition = game.apply(Command::AttemptMatch(0));
    let Transition::Matched(outcome) = transition else {
        panic!("expected a match, got {transition:?}");
    };

    let (table_after, player_after) = card_count(&game);
    assert_eq!(player_after, player_before - 1);
    assert_eq!(outcome.spent, spend);
    assert_eq!(outcome.remaining, owed_before - spend);
    if outcome.cleared {
        assert_eq!(table_after, table_before - 1);
    } else {
        assert_eq!(table_after, table_before);
        assert_eq!(game.table_cards()[0].value, owed_before - spend);
    }
}

#[test]
fn test_cards_never_duplicate_or_vanish() {
    for seed in 0..10 {
        let mut game = MatchGame::with_defaults(seed);
        let mut rng = GameRng::new(seed);
        game.step(Some(Command::StartLevel(2)));
        let (mut table_total, mut player_total) = card_count(&game);

        for _ in 0..500 {
            if game.phase() != Phase::Playing {
                break;
            }
            let commands = game.legal_commands();
            let Some(&command) = rng.choose(&commands) else {
                break;
            };

            let report = game.step(Some(command));
            if let Some(Transition::Matched(outcome)) = report.transition {
                player_total -= 1;
                if outcome.cleared {
                    table_total -= 1;
                }
            }

            assert_eq!(card_count(&game), (table_total, player_total));
            assert!(game.table_cards().iter().all(|c| c.value > 0));
            assert!(game.armed().map_or(true, |a| a.index < game.player_cards().len()));
        }
    }
}

#[test]
fn test_game_value_is_balanced_at_start() {
    for level in 0..3 {
        let mut game = MatchGame::with_defaults(1234);
        game.apply(Command::StartLevel(level));
        assert_eq!(game.table_value_remaining(), game.player_value_remaining());
    }
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_greedy_play_reaches_terminal_on_every_level() {
    for level in 0..3 {
        for seed in 0..10 {
            let mut game = MatchGame::with_defaults(seed);
            game.apply(Command::StartLevel(level));
            let phase = play_out(&mut game, &mut GreedyPolicy, &mut GameRng::new(seed), 1_000);

            assert!(phase.is_terminal(), "level {level} seed {seed} stuck");
            if phase == Phase::Won {
                assert_eq!(card_count(&game), (0, 0));
            } else {
                assert!(game.player_cards().is_empty());
                assert!(game.player_deck().is_empty());
            }
        }
    }
}

#[test]
fn test_perfect_play_always_wins() {
    // One table card is paid off exactly by its own block, in any order.
    let config = GameConfig::empty().with_level(Level::new("One", 1, 1));
    for seed in 0..20 {
        let mut game = MatchGame::new(config.clone(), seed).unwrap();
        game.step(Some(Command::StartLevel(0)));

        while game.phase() == Phase::Playing {
            game.apply(Command::SelectPlayerCard(0));
            game.step(Some(Command::AttemptMatch(0)));
        }
        assert_eq!(game.phase(), Phase::Won, "seed {seed}");
    }
}

#[test]
fn test_strict_draws_can_strand_player_cards() {
    let config = GameConfig::default().with_partial_draws(false);
    let mut stranded = false;

    for seed in 0..20 {
        let mut game = MatchGame::new(config.clone(), seed).unwrap();
        game.apply(Command::StartLevel(0));
        let phase = play_out(&mut game, &mut RandomPolicy, &mut GameRng::new(seed), 10_000);

        assert!(phase.is_terminal());
        if phase == Phase::Lost && !game.player_deck().is_empty() {
            assert!(game.player_deck().len() < 3);
            stranded = true;
        }
    }
    assert!(stranded);
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut game = MatchGame::with_defaults(seed);
        game.apply(Command::StartLevel(1));
        play_out(&mut game, &mut RandomPolicy, &mut GameRng::new(seed), 10_000);
        game.snapshot()
    };

    assert_eq!(run(2024), run(2024));
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn test_click_flow_through_hitboxes() {
    let mut game = MatchGame::with_defaults(9);
    let menu = [
        Hitbox::new(Rect::new(860.0, 300.0, 200.0, 60.0), HitTarget::LevelButton(0)),
        Hitbox::new(Rect::new(860.0, 380.0, 200.0, 60.0), HitTarget::LevelButton(1)),
    ];
    let click = |x, y| FrameInput {
        pointer: Point::new(x, y),
        primary_pressed: true,
    };

    game.step(resolve(&click(900.0, 320.0), &menu));
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.level().unwrap().name, "Easy");

    let board: Vec<Hitbox> = (0..3)
        .map(|i| {
            let x = 160.0 + i as f32 * 230.0;
            Hitbox::new(Rect::new(x, 100.0, 210.0, 300.0), HitTarget::TableCard(i))
        })
        .chain((0..3).map(|i| {
            let x = 160.0 + i as f32 * 230.0;
            Hitbox::new(Rect::new(x, 600.0, 210.0, 300.0), HitTarget::PlayerCard(i))
        }))
        .collect();

    let report = game.step(resolve(&click(170.0, 610.0), &board));
    assert!(matches!(report.transition, Some(Transition::Armed(a)) if a.index == 0));

    let report = game.step(resolve(&click(400.0, 200.0), &board));
    assert!(matches!(report.transition, Some(Transition::Matched(m)) if m.table_index == 1));
    assert_eq!(game.armed(), None);
}

#[test]
fn test_click_on_table_without_selection_is_ignored() {
    let mut game = MatchGame::with_defaults(9);
    game.step(Some(Command::StartLevel(0)));
    let before = game.snapshot();

    let report = game.step(Some(Command::AttemptMatch(0)));
    assert_eq!(report.transition, Some(Transition::Ignored(Rejection::NoSelection)));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_asset_keys_cover_dealt_cards() {
    let mut game = MatchGame::with_defaults(3);
    game.step(Some(Command::StartLevel(2)));

    for card in game.table_cards().iter().chain(game.table_deck().iter()) {
        assert!(["cardHearts12", "cardHearts13", "cardHearts14"].contains(&card.asset_key().as_str()));
    }
    for card in game.player_cards().iter() {
        assert_eq!(card.asset_key(), Card::player(card.face).unwrap().asset_key());
    }
}
