//! Session lifecycle rules: legal transitions and lazy expiry.

use time::{Duration, OffsetDateTime};

use crate::entities::games::GameStatus;
use crate::errors::domain::{ConflictKind, DomainError};

/// A started session is swept back to waiting once this much time has
/// elapsed since `started_at`.
pub const SESSION_TTL: Duration = Duration::hours(12);

/// `start` is legal only from `waiting`.
pub fn ensure_can_start(status: GameStatus) -> Result<(), DomainError> {
    match status {
        GameStatus::Waiting => Ok(()),
        GameStatus::Started => Err(DomainError::conflict(
            ConflictKind::AlreadyStarted,
            "Game is already started",
        )),
    }
}

/// `draw` and `finish` are legal only from `started`.
pub fn ensure_started(status: GameStatus) -> Result<(), DomainError> {
    match status {
        GameStatus::Started => Ok(()),
        GameStatus::Waiting => Err(DomainError::conflict(
            ConflictKind::NotStarted,
            "Game is not started",
        )),
    }
}

/// Expiry predicate, evaluated lazily on status inspection.
///
/// True only for a started session whose `started_at` lies more than
/// [`SESSION_TTL`] in the past. The sweep that acts on this must clear
/// started_at, deck and initial_deck along with the status so the
/// status/deck invariant holds.
pub fn is_expired(
    status: GameStatus,
    started_at: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> bool {
    match (status, started_at) {
        (GameStatus::Started, Some(t)) => now - t > SESSION_TTL,
        _ => false,
    }
}
