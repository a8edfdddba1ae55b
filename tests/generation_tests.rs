//! Deck generation properties.
//!
//! Every table card must be payable by its own block of player cards, and
//! block shuffling must never move a card across a block boundary.

use proptest::prelude::*;

use deck_match::deck::{generate_deal, generate_player_blocks};
use deck_match::{
    generate_matching_values, generate_player_deck, generate_table_deck, regroup_and_shuffle, Card,
    GameRng, Level, Origin,
};

// =============================================================================
// Decomposition
// =============================================================================

proptest! {
    #[test]
    fn prop_decomposition_sums_exactly(target in 1i32..=200, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let parts = generate_matching_values(target, &mut rng);

        prop_assert!(!parts.is_empty() && parts.len() <= 2);
        prop_assert!(parts.iter().all(|&v| v >= 1));
        prop_assert_eq!(parts.iter().sum::<i32>(), target);
    }

    #[test]
    fn prop_table_values_map_to_player_cards(target in 12i32..=14, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        for value in generate_matching_values(target, &mut rng) {
            prop_assert!(Card::player(value).is_ok());
        }
    }

    #[test]
    fn prop_every_table_card_has_a_block(seed in any::<u64>(), level in 0usize..3) {
        let level = [Level::easy(), Level::medium(), Level::hard()][level].clone();
        let mut rng = GameRng::new(seed);
        let table = generate_table_deck(&level, &[12, 13, 14], &mut rng);
        let blocks = generate_player_blocks(&table, &mut rng);

        prop_assert_eq!(blocks.len(), table.len());
        for (card, block) in table.iter().zip(&blocks) {
            prop_assert_eq!(block.iter().sum::<i32>(), card.value);
        }
    }

    #[test]
    fn prop_regroup_preserves_blocks(
        values in prop::collection::vec(1i32..=14, 0..60),
        group in 1usize..12,
        seed in any::<u64>(),
    ) {
        let mut shuffled = values.clone();
        regroup_and_shuffle(&mut shuffled, group, &mut GameRng::new(seed));

        prop_assert_eq!(shuffled.len(), values.len());
        for (after, before) in shuffled.chunks(group).zip(values.chunks(group)) {
            let mut after = after.to_vec();
            let mut before = before.to_vec();
            after.sort_unstable();
            before.sort_unstable();
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn prop_deal_balances_value(seed in any::<u64>()) {
        let deal = generate_deal(&Level::hard(), &[12, 13, 14], &mut GameRng::new(seed));

        let table: i32 = deal.table_deck.iter().map(|c| c.value).sum();
        let player: i32 = deal.player_deck.iter().map(|c| c.value).sum();
        prop_assert_eq!(table, player);
        prop_assert!(deal.player_deck.len() >= 20 && deal.player_deck.len() <= 40);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_single_table_card_of_twelve() {
    let table = vec![Card::table(12).unwrap()];
    let level = Level::new("Test", 1, 3);

    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let mut player = generate_player_deck(&table, &mut rng);
        regroup_and_shuffle(&mut player, level.group_size(), &mut rng);

        assert!((1..=2).contains(&player.len()));
        assert_eq!(player.iter().map(|c| c.value).sum::<i32>(), 12);
    }
}

#[test]
fn test_twelve_and_fourteen_sum_to_twenty_six() {
    let table = vec![Card::table(12).unwrap(), Card::table(14).unwrap()];

    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let player = generate_player_deck(&table, &mut rng);

        assert_eq!(player.iter().map(|c| c.value).sum::<i32>(), 26);
        assert!(player.iter().all(|c| c.origin == Origin::Player));
    }
}

#[test]
fn test_short_deck_is_not_shuffled() {
    let mut rng = GameRng::new(42);
    let table = vec![Card::table(13).unwrap(), Card::table(14).unwrap()];
    let player = generate_player_deck(&table, &mut rng);
    let mut regrouped = player.clone();

    // Easy regroups in blocks of 6; two table cards give at most 4 player cards
    regroup_and_shuffle(&mut regrouped, Level::easy().group_size(), &mut rng);
    assert_eq!(regrouped, player);
}

#[test]
fn test_both_sides_vary_by_seed() {
    let a = generate_deal(&Level::easy(), &[12, 13, 14], &mut GameRng::new(1));
    let b = generate_deal(&Level::easy(), &[12, 13, 14], &mut GameRng::new(2));

    assert_ne!(a, b);
}
