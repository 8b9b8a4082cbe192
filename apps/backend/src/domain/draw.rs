//! Draw-with-replenishment over a session deck.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::deck::DeckEntry;

/// Result of drawing from a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn; `remaining` is the new deck to persist.
    Drawn {
        card_id: i64,
        remaining: Vec<DeckEntry>,
    },
    /// The category has no card even after replenishment. The caller must
    /// leave the persisted deck untouched.
    Unavailable,
}

/// Draw one card of `category_id` from `deck`.
///
/// If the remaining deck holds no entry for the category, the category's
/// entries are replenished from `initial_deck` (the deck's only growth
/// path); the refill copies the original full pool regardless of what has
/// been drawn elsewhere. The working deck is then shuffled and the first
/// matching entry removed by position.
pub fn draw_card<R: Rng + ?Sized>(
    deck: &[DeckEntry],
    initial_deck: &[DeckEntry],
    category_id: i64,
    rng: &mut R,
) -> DrawOutcome {
    let mut working: Vec<DeckEntry> = deck.to_vec();

    if !working.iter().any(|e| e.category_id == category_id) {
        working.extend(
            initial_deck
                .iter()
                .filter(|e| e.category_id == category_id)
                .copied(),
        );
    }

    working.shuffle(rng);

    match working.iter().position(|e| e.category_id == category_id) {
        Some(pos) => {
            let drawn = working.remove(pos);
            DrawOutcome::Drawn {
                card_id: drawn.card_id,
                remaining: working,
            }
        }
        None => DrawOutcome::Unavailable,
    }
}
