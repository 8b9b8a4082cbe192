//! Deck construction and the persisted deck/tag codecs.
//!
//! A deck is an ordered list of `(card_id, category_id)` references. It is
//! persisted as comma-joined `"card_id.category_id"` tokens; the codec owns
//! the empty-string sentinel (empty string ⇔ empty deck, never a one-element
//! list holding an empty token) so the split pitfall can't reach the engine.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// One entry of a session deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckEntry {
    pub card_id: i64,
    pub category_id: i64,
}

impl DeckEntry {
    pub fn new(card_id: i64, category_id: i64) -> Self {
        Self {
            card_id,
            category_id,
        }
    }
}

/// A card eligible for deck construction: identity plus its decoded tags.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleCard {
    pub id: i64,
    pub category_id: i64,
    pub tags: Vec<String>,
}

/// Encode a deck for persistence.
pub fn encode_deck(entries: &[DeckEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}.{}", e.card_id, e.category_id))
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode a persisted deck.
///
/// An empty string is an empty deck. A token that is not
/// `"{card_id}.{category_id}"` with two integer halves means the stored row
/// is corrupt; that is an infra failure, not business input.
pub fn decode_deck(raw: &str) -> Result<Vec<DeckEntry>, DomainError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|token| {
            let (card, category) = token.split_once('.').ok_or_else(|| bad_token(token))?;
            let card_id = card.parse::<i64>().map_err(|_| bad_token(token))?;
            let category_id = category.parse::<i64>().map_err(|_| bad_token(token))?;
            Ok(DeckEntry {
                card_id,
                category_id,
            })
        })
        .collect()
}

fn bad_token(token: &str) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("malformed deck token {token:?}"),
    )
}

/// Encode a tag list for persistence.
pub fn encode_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Decode a persisted tag list. Empty string ⇔ no tags; blank segments are
/// dropped rather than becoming empty tags.
pub fn decode_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the initial deck for a session.
///
/// Every card reachable from the session's selected sets is included at most
/// once (deduplicated by card id) if any of its tags is in the session's tag
/// filter, then the result is uniformly permuted. An empty result is legal:
/// the session still starts, and draws fail until finished.
pub fn build_deck<R: Rng + ?Sized>(
    cards: &[EligibleCard],
    filter_tags: &[String],
    rng: &mut R,
) -> Vec<DeckEntry> {
    let filter: HashSet<&str> = filter_tags.iter().map(String::as_str).collect();

    let mut seen: HashSet<i64> = HashSet::new();
    let mut deck: Vec<DeckEntry> = Vec::new();

    for card in cards {
        if !seen.insert(card.id) {
            continue;
        }
        if card.tags.iter().any(|t| filter.contains(t.as_str())) {
            deck.push(DeckEntry::new(card.id, card.category_id));
        }
    }

    deck.shuffle(rng);
    deck
}
