use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::deck::{build_deck, decode_deck, encode_deck, DeckEntry, EligibleCard};
use crate::domain::draw::{draw_card, DrawOutcome};

fn arb_tags() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{1}", 0..3)
}

fn arb_cards() -> impl Strategy<Value = Vec<EligibleCard>> {
    proptest::collection::vec(
        (1i64..50, 1i64..5, arb_tags()).prop_map(|(id, category_id, tags)| EligibleCard {
            id,
            category_id,
            tags,
        }),
        0..30,
    )
}

fn arb_deck() -> impl Strategy<Value = Vec<DeckEntry>> {
    proptest::collection::vec(
        (1i64..100, 1i64..5).prop_map(|(card_id, category_id)| DeckEntry {
            card_id,
            category_id,
        }),
        0..30,
    )
}

proptest! {
    /// Any deck round-trips losslessly through the persisted representation.
    #[test]
    fn deck_codec_round_trips(deck in arb_deck()) {
        let encoded = encode_deck(&deck);
        let decoded = decode_deck(&encoded).unwrap();
        prop_assert_eq!(decoded, deck);
    }

    /// The built deck contains exactly the eligible card ids, regardless of
    /// shuffle order: no card whose tags miss the filter, no eligible card
    /// missing, no duplicates.
    #[test]
    fn built_deck_is_the_eligible_set(
        cards in arb_cards(),
        filter in proptest::collection::vec("[a-d]{1}", 0..3),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = build_deck(&cards, &filter, &mut rng);

        // Mirror the builder's dedup rule: only a card's first occurrence counts.
        let filter_set: HashSet<&str> = filter.iter().map(String::as_str).collect();
        let mut considered: HashSet<i64> = HashSet::new();
        let mut expected: HashSet<i64> = HashSet::new();
        for card in &cards {
            if !considered.insert(card.id) {
                continue;
            }
            if card.tags.iter().any(|t| filter_set.contains(t.as_str())) {
                expected.insert(card.id);
            }
        }

        let got: HashSet<i64> = deck.iter().map(|e| e.card_id).collect();
        prop_assert_eq!(&got, &expected);
        // Dedup: one entry per card id
        prop_assert_eq!(deck.len(), expected.len());
    }

    /// A successful draw shrinks the requested category by exactly one and
    /// never grows any other category beyond its pre-draw count.
    #[test]
    fn draw_cardinality(
        deck in arb_deck(),
        initial in arb_deck(),
        category_id in 1i64..5,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let pre_deck = deck.iter().filter(|e| e.category_id == category_id).count();
        let pre_initial = initial.iter().filter(|e| e.category_id == category_id).count();

        match draw_card(&deck, &initial, category_id, &mut rng) {
            DrawOutcome::Drawn { card_id: _, remaining } => {
                let post = remaining.iter().filter(|e| e.category_id == category_id).count();
                if pre_deck > 0 {
                    prop_assert_eq!(post, pre_deck - 1);
                } else {
                    // Replenishment path: the full original pool minus the draw
                    prop_assert_eq!(post, pre_initial - 1);
                }
                // Other categories are untouched (as multisets)
                for cat in 1i64..5 {
                    if cat == category_id { continue; }
                    let before = deck.iter().filter(|e| e.category_id == cat).count();
                    let after = remaining.iter().filter(|e| e.category_id == cat).count();
                    prop_assert_eq!(before, after);
                }
            }
            DrawOutcome::Unavailable => {
                prop_assert_eq!(pre_deck, 0);
                prop_assert_eq!(pre_initial, 0);
            }
        }
    }
}
