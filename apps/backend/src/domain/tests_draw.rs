use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::deck::DeckEntry;
use crate::domain::draw::{draw_card, DrawOutcome};

fn entry(card_id: i64, category_id: i64) -> DeckEntry {
    DeckEntry::new(card_id, category_id)
}

fn count_category(deck: &[DeckEntry], category_id: i64) -> usize {
    deck.iter().filter(|e| e.category_id == category_id).count()
}

#[test]
fn draw_removes_exactly_one_entry_of_the_requested_category() {
    let deck = vec![entry(1, 1), entry(2, 1), entry(3, 2)];
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    match draw_card(&deck, &deck, 1, &mut rng) {
        DrawOutcome::Drawn { card_id, remaining } => {
            assert!(card_id == 1 || card_id == 2);
            assert_eq!(remaining.len(), deck.len() - 1);
            assert_eq!(count_category(&remaining, 1), 1);
            // The other category is untouched
            assert_eq!(count_category(&remaining, 2), 1);
        }
        DrawOutcome::Unavailable => panic!("expected a drawn card"),
    }
}

#[test]
fn draw_replenishes_an_exhausted_category_from_the_initial_deck() {
    let initial = vec![entry(1, 1), entry(2, 1), entry(3, 2)];
    // Category 1 has been drawn dry; only category 2 remains.
    let deck = vec![entry(3, 2)];
    let mut rng = ChaCha8Rng::seed_from_u64(23);

    match draw_card(&deck, &initial, 1, &mut rng) {
        DrawOutcome::Drawn { card_id, remaining } => {
            assert!(card_id == 1 || card_id == 2);
            // Replenished count (2) minus the drawn one
            assert_eq!(count_category(&remaining, 1), 1);
            assert_eq!(count_category(&remaining, 2), 1);
        }
        DrawOutcome::Unavailable => panic!("expected replenishment to supply a card"),
    }
}

#[test]
fn draw_from_a_category_absent_everywhere_is_unavailable() {
    let initial = vec![entry(1, 1)];
    let deck = vec![entry(1, 1)];
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert_eq!(draw_card(&deck, &initial, 9, &mut rng), DrawOutcome::Unavailable);
}

#[test]
fn draw_from_an_empty_session_is_unavailable() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    assert_eq!(draw_card(&[], &[], 1, &mut rng), DrawOutcome::Unavailable);
}

#[test]
fn two_card_pool_survives_repeated_draws() {
    // Session contract: a two-card pool yields both cards, then replenishes
    // and keeps yielding.
    let initial = vec![entry(1, 1), entry(3, 1)];
    let mut deck = initial.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let mut first_pass = HashSet::new();
    for _ in 0..2 {
        match draw_card(&deck, &initial, 1, &mut rng) {
            DrawOutcome::Drawn { card_id, remaining } => {
                first_pass.insert(card_id);
                deck = remaining;
            }
            DrawOutcome::Unavailable => panic!("pool exhausted too early"),
        }
    }
    // Both cards came out, in some order
    assert_eq!(first_pass, HashSet::from([1, 3]));
    assert_eq!(count_category(&deck, 1), 0);

    // Third draw replenishes from the initial snapshot and succeeds
    match draw_card(&deck, &initial, 1, &mut rng) {
        DrawOutcome::Drawn { card_id, remaining } => {
            assert!(card_id == 1 || card_id == 3);
            assert_eq!(count_category(&remaining, 1), 1);
        }
        DrawOutcome::Unavailable => panic!("replenishment failed"),
    }
}

#[test]
fn replenishment_copies_the_full_original_pool() {
    // Cards of the requested category already drawn elsewhere do not shrink
    // the refill: it always copies the initial snapshot.
    let initial = vec![entry(1, 4), entry(2, 4), entry(3, 4)];
    let deck: Vec<DeckEntry> = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    match draw_card(&deck, &initial, 4, &mut rng) {
        DrawOutcome::Drawn { remaining, .. } => {
            assert_eq!(count_category(&remaining, 4), initial.len() - 1);
        }
        DrawOutcome::Unavailable => panic!("expected replenishment"),
    }
}
