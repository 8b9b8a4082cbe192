use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::deck::{
    build_deck, decode_deck, decode_tags, encode_deck, encode_tags, DeckEntry, EligibleCard,
};
use crate::errors::domain::{DomainError, InfraErrorKind};

fn card(id: i64, category_id: i64, tags: &[&str]) -> EligibleCard {
    EligibleCard {
        id,
        category_id,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

#[test]
fn empty_string_decodes_to_empty_deck() {
    // Guard against the split pitfall: "" must not become [""]
    assert_eq!(decode_deck("").unwrap(), Vec::new());
}

#[test]
fn deck_round_trips_through_encoding() {
    let deck = vec![
        DeckEntry::new(10, 1),
        DeckEntry::new(11, 1),
        DeckEntry::new(42, 3),
    ];
    let encoded = encode_deck(&deck);
    assert_eq!(encoded, "10.1,11.1,42.3");
    assert_eq!(decode_deck(&encoded).unwrap(), deck);

    // Empty deck encodes to the empty string and back
    assert_eq!(encode_deck(&[]), "");
    assert_eq!(decode_deck(&encode_deck(&[])).unwrap(), Vec::new());
}

#[test]
fn malformed_token_is_data_corruption() {
    for raw in ["10", "10.x", "x.1", "10.1,banana", "10.1,,3.2"] {
        match decode_deck(raw) {
            Err(DomainError::Infra(InfraErrorKind::DataCorruption, _)) => {}
            other => panic!("expected DataCorruption for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn tag_codec_normalizes_blanks() {
    assert_eq!(decode_tags(""), Vec::<String>::new());
    assert_eq!(decode_tags("a,b"), tags(&["a", "b"]));
    assert_eq!(decode_tags("a, b ,"), tags(&["a", "b"]));
    assert_eq!(encode_tags(&tags(&["a", "b"])), "a,b");
}

#[test]
fn build_deck_filters_by_tag_intersection() {
    // Scenario from the session contract: cards tagged {a}, {b}, {a,b}
    // with filter {a} yield exactly cards 1 and 3.
    let cards = vec![
        card(1, 1, &["a"]),
        card(2, 1, &["b"]),
        card(3, 1, &["a", "b"]),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let deck = build_deck(&cards, &tags(&["a"]), &mut rng);

    let ids: HashSet<i64> = deck.iter().map(|e| e.card_id).collect();
    assert_eq!(deck.len(), 2);
    assert_eq!(ids, HashSet::from([1, 3]));
    assert!(deck.iter().all(|e| e.category_id == 1));
}

#[test]
fn build_deck_deduplicates_cards_reachable_from_multiple_sets() {
    // The same card listed twice (member of two selected sets) appears once.
    let cards = vec![
        card(5, 2, &["fun"]),
        card(5, 2, &["fun"]),
        card(6, 2, &["fun"]),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let deck = build_deck(&cards, &tags(&["fun"]), &mut rng);

    assert_eq!(deck.len(), 2);
    let ids: HashSet<i64> = deck.iter().map(|e| e.card_id).collect();
    assert_eq!(ids, HashSet::from([5, 6]));
}

#[test]
fn build_deck_with_no_eligible_cards_is_empty() {
    let cards = vec![card(1, 1, &["x"]), card(2, 1, &["y"])];
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert!(build_deck(&cards, &tags(&["z"]), &mut rng).is_empty());
    assert!(build_deck(&[], &tags(&["z"]), &mut rng).is_empty());
}

#[test]
fn build_deck_untagged_card_never_matches() {
    let cards = vec![card(1, 1, &[]), card(2, 1, &["a"])];
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let deck = build_deck(&cards, &tags(&["a"]), &mut rng);
    assert_eq!(deck.len(), 1);
    assert_eq!(deck[0].card_id, 2);
}
