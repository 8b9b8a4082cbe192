//! Game session services: lifecycle, deck construction and draws.
//!
//! Catalog validation and the waiting/started transitions run inside the
//! caller's transaction. The draw and status-sweep paths instead own their
//! transactions: both are read-modify-write cycles on the game row guarded
//! by `lock_version`, and an optimistic conflict retries the whole attempt
//! in a fresh transaction, bounded by [`MAX_OPTIMISTIC_RETRIES`].

use actix_web::HttpRequest;
use sea_orm::DatabaseTransaction;
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::deck::EligibleCard;
use crate::domain::{build_deck, draw_card as draw_from_deck, is_expired, DrawOutcome};
use crate::domain::{ensure_can_start, ensure_started};
use crate::entities::games::GameStatus;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::repos::cards;
use crate::repos::categories::{self, Category};
use crate::repos::games::{self, Game};
use crate::repos::sets;
use crate::state::app_state::AppState;
use crate::AppError;

/// Bound on internal retries of optimistic-lock conflicts.
pub const MAX_OPTIMISTIC_RETRIES: u32 = 3;

/// Payload returned for a drawn card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDrawn {
    /// Formatted as "{category_id}.{card_number}"
    pub number: String,
    pub description: String,
    pub color: String,
    pub name: String,
}

/// Per-category and per-set selection flags for the game edit view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetFlag {
    pub id: i64,
    pub name: String,
    pub in_game: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFlag {
    pub id: i64,
    pub name: String,
    pub in_game: bool,
    pub sets: Vec<SetFlag>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagFlag {
    pub name: String,
    pub in_game: bool,
}

/// Everything the game edit view needs: every category and set in the
/// catalog plus every tag in use, each flagged with its selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameInfo {
    pub name: String,
    pub categories: Vec<CategoryFlag>,
    pub hashtags: Vec<TagFlag>,
}

/// Create a game in `waiting` with its selections.
pub async fn create_game(
    txn: &DatabaseTransaction,
    name: String,
    set_ids: &[i64],
    category_ids: &[i64],
    tags: &[String],
) -> Result<Game, DomainError> {
    if games::find_by_name(txn, &name).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateName,
            "Game name must be unique",
        ));
    }

    for set_id in set_ids {
        sets::require_set(txn, *set_id).await?;
    }
    for category_id in category_ids {
        categories::require_category(txn, *category_id).await?;
    }

    let game = games::create_game(txn, name, tags).await?;
    games::replace_game_sets(txn, game.id, set_ids).await?;
    games::replace_game_categories(txn, game.id, category_ids).await?;

    Ok(game)
}

/// Start a waiting game: build the deck from the selected sets filtered by
/// the game's tags, snapshot it, stamp the start time.
pub async fn start_game(txn: &DatabaseTransaction, game_id: i64) -> Result<Game, DomainError> {
    let game = games::require_game(txn, game_id).await?;
    ensure_can_start(game.status)?;

    let set_ids = games::set_ids_for_game(txn, game_id).await?;
    let card_ids = sets::card_ids_for_sets(txn, &set_ids).await?;
    let eligible: Vec<EligibleCard> = cards::find_by_ids(txn, &card_ids)
        .await?
        .into_iter()
        .map(|card| EligibleCard {
            id: card.id,
            category_id: card.category_id,
            tags: card.tags,
        })
        .collect();

    // An empty deck is legal; the game still starts
    let deck = build_deck(&eligible, &game.tags, &mut rand::rng());
    tracing::info!(game_id, deck_size = deck.len(), "game started");

    games::start_game(
        txn,
        game_id,
        game.lock_version,
        OffsetDateTime::now_utc(),
        &deck,
    )
    .await
}

/// Finish a started game: drop all deck state and return to waiting.
pub async fn finish_game(txn: &DatabaseTransaction, game_id: i64) -> Result<Game, DomainError> {
    let game = games::require_game(txn, game_id).await?;
    ensure_started(game.status)?;
    games::reset_game(txn, game_id, game.lock_version).await
}

/// Delete a game in any state.
pub async fn delete_game(txn: &DatabaseTransaction, game_id: i64) -> Result<(), DomainError> {
    if !games::delete_game(txn, game_id).await? {
        return Err(DomainError::not_found(
            NotFoundKind::Game,
            format!("Game with id {game_id} not found"),
        ));
    }
    Ok(())
}

pub async fn list_games(txn: &DatabaseTransaction) -> Result<Vec<Game>, DomainError> {
    games::list_all(txn).await
}

/// The categories selected for a game (tag discovery / UI, not draw
/// filtering).
pub async fn game_categories(
    txn: &DatabaseTransaction,
    game_id: i64,
) -> Result<Vec<Category>, DomainError> {
    games::require_game(txn, game_id).await?;

    let mut result = Vec::new();
    for category_id in games::category_ids_for_game(txn, game_id).await? {
        result.push(categories::require_category(txn, category_id).await?);
    }
    Ok(result)
}

/// Build the edit view: the whole catalog flagged with this game's
/// selections, plus every tag in use across carded sets.
pub async fn game_info(txn: &DatabaseTransaction, game_id: i64) -> Result<GameInfo, DomainError> {
    use std::collections::BTreeSet;

    let game = games::require_game(txn, game_id).await?;
    let selected_sets: Vec<i64> = games::set_ids_for_game(txn, game_id).await?;
    let selected_categories: Vec<i64> = games::category_ids_for_game(txn, game_id).await?;

    let mut category_flags = Vec::new();
    for category in categories::list_all(txn).await? {
        let set_flags = sets::sets_in_category(txn, category.id)
            .await?
            .into_iter()
            .map(|s| SetFlag {
                id: s.id,
                name: s.name,
                in_game: selected_sets.contains(&s.id),
            })
            .collect();
        category_flags.push(CategoryFlag {
            id: category.id,
            name: category.name,
            in_game: selected_categories.contains(&category.id),
            sets: set_flags,
        });
    }

    // Union of tags over every card reachable from any set. Every card sits
    // in its category's main set, so this covers the whole catalog.
    let all_set_ids: Vec<i64> = sets::list_all(txn).await?.into_iter().map(|s| s.id).collect();
    let card_ids = sets::card_ids_for_sets(txn, &all_set_ids).await?;
    let mut all_tags: BTreeSet<String> = BTreeSet::new();
    for card in cards::find_by_ids(txn, &card_ids).await? {
        all_tags.extend(card.tags);
    }

    let hashtags = all_tags
        .into_iter()
        .map(|name| TagFlag {
            in_game: game.tags.contains(&name),
            name,
        })
        .collect();

    Ok(GameInfo {
        name: game.name,
        categories: category_flags,
        hashtags,
    })
}

/// Edit a waiting-or-started game's selections and name.
pub async fn edit_game(
    txn: &DatabaseTransaction,
    game_id: i64,
    name: String,
    set_ids: &[i64],
    category_ids: &[i64],
    tags: &[String],
) -> Result<Game, DomainError> {
    let game = games::require_game(txn, game_id).await?;

    if let Some(existing) = games::find_by_name(txn, &name).await? {
        if existing.id != game_id {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateName,
                "Game name must be unique",
            ));
        }
    }

    for set_id in set_ids {
        sets::require_set(txn, *set_id).await?;
    }
    for category_id in category_ids {
        categories::require_category(txn, *category_id).await?;
    }

    let updated = games::update_metadata(txn, game_id, game.lock_version, name, tags).await?;
    games::replace_game_sets(txn, game_id, set_ids).await?;
    games::replace_game_categories(txn, game_id, category_ids).await?;

    Ok(updated)
}

fn is_optimistic_conflict(err: &AppError) -> bool {
    matches!(
        err,
        AppError::Conflict {
            code: ErrorCode::OptimisticLock,
            ..
        }
    )
}

/// Draw a card of the given category from a started game.
///
/// Owns its transactions: each attempt re-reads the game, computes the new
/// deck and writes it conditionally on the lock version. A lost race retries
/// with fresh state; any other failure leaves the deck untouched.
pub async fn draw_card(
    req: Option<&HttpRequest>,
    state: &AppState,
    game_id: i64,
    category_id: i64,
) -> Result<CardDrawn, AppError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let outcome = with_txn(req, state, |txn| {
            Box::pin(async move { draw_card_attempt(txn, game_id, category_id).await })
        })
        .await;

        match outcome {
            Err(err) if is_optimistic_conflict(&err) && attempt < MAX_OPTIMISTIC_RETRIES => {
                tracing::warn!(game_id, category_id, attempt, "draw lost optimistic race, retrying");
                continue;
            }
            other => return other,
        }
    }
}

async fn draw_card_attempt(
    txn: &DatabaseTransaction,
    game_id: i64,
    category_id: i64,
) -> Result<CardDrawn, AppError> {
    let game = games::require_game(txn, game_id).await?;
    let category = categories::require_category(txn, category_id).await?;
    ensure_started(game.status)?;

    let deck = started_deck(&game, game.deck.as_deref())?;
    let initial_deck = started_deck(&game, game.initial_deck.as_deref())?;

    let outcome = draw_from_deck(deck, initial_deck, category_id, &mut rand::rng());
    let (card_id, remaining) = match outcome {
        DrawOutcome::Drawn { card_id, remaining } => (card_id, remaining),
        DrawOutcome::Unavailable => {
            return Err(DomainError::unavailable(format!(
                "no card available for category {category_id}"
            ))
            .into());
        }
    };

    games::update_deck(txn, game_id, game.lock_version, &remaining).await?;

    let card = cards::require_card(txn, card_id).await?;

    Ok(CardDrawn {
        number: card.formatted_number(),
        description: card.description,
        color: category.color,
        name: category.name,
    })
}

/// A started game must carry both deck columns; a row that says otherwise is
/// corrupt, not empty.
fn started_deck<'a>(
    game: &Game,
    deck: Option<&'a [crate::domain::DeckEntry]>,
) -> Result<&'a [crate::domain::DeckEntry], AppError> {
    deck.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("started game {} has no deck state", game.id),
        )
        .into()
    })
}

/// Inspect a game's status, sweeping a stale started game back to waiting.
///
/// The sweep is a full reset (status, start time and both decks) so the
/// status/deck invariant survives expiry. Like draws, it contends on the
/// game row and retries optimistic conflicts.
pub async fn game_status(
    req: Option<&HttpRequest>,
    state: &AppState,
    game_id: i64,
) -> Result<GameStatus, AppError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let outcome = with_txn(req, state, |txn| {
            Box::pin(async move { game_status_attempt(txn, game_id).await })
        })
        .await;

        match outcome {
            Err(err) if is_optimistic_conflict(&err) && attempt < MAX_OPTIMISTIC_RETRIES => {
                tracing::warn!(game_id, attempt, "status sweep lost optimistic race, retrying");
                continue;
            }
            other => return other,
        }
    }
}

async fn game_status_attempt(
    txn: &DatabaseTransaction,
    game_id: i64,
) -> Result<GameStatus, AppError> {
    let game = games::require_game(txn, game_id).await?;

    if is_expired(game.status, game.started_at, OffsetDateTime::now_utc()) {
        tracing::info!(game_id, "started game expired, sweeping back to waiting");
        let swept = games::reset_game(txn, game_id, game.lock_version).await?;
        return Ok(swept.status);
    }

    Ok(game.status)
}
