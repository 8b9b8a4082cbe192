use time::{Duration, OffsetDateTime};

use crate::domain::lifecycle::{ensure_can_start, ensure_started, is_expired, SESSION_TTL};
use crate::entities::games::GameStatus;
use crate::errors::domain::{ConflictKind, DomainError};

#[test]
fn start_is_legal_only_from_waiting() {
    assert!(ensure_can_start(GameStatus::Waiting).is_ok());

    match ensure_can_start(GameStatus::Started) {
        Err(DomainError::Conflict(ConflictKind::AlreadyStarted, _)) => {}
        other => panic!("expected AlreadyStarted conflict, got {other:?}"),
    }
}

#[test]
fn draw_and_finish_are_legal_only_from_started() {
    assert!(ensure_started(GameStatus::Started).is_ok());

    match ensure_started(GameStatus::Waiting) {
        Err(DomainError::Conflict(ConflictKind::NotStarted, _)) => {}
        other => panic!("expected NotStarted conflict, got {other:?}"),
    }
}

#[test]
fn session_expires_strictly_after_twelve_hours() {
    let started = OffsetDateTime::now_utc();

    let just_before = started + SESSION_TTL - Duration::minutes(1);
    assert!(!is_expired(GameStatus::Started, Some(started), just_before));

    // The boundary itself has not yet elapsed
    let exactly = started + SESSION_TTL;
    assert!(!is_expired(GameStatus::Started, Some(started), exactly));

    let just_after = started + SESSION_TTL + Duration::minutes(1);
    assert!(is_expired(GameStatus::Started, Some(started), just_after));
}

#[test]
fn waiting_sessions_never_expire() {
    let now = OffsetDateTime::now_utc();
    let long_ago = now - Duration::hours(48);

    assert!(!is_expired(GameStatus::Waiting, Some(long_ago), now));
    assert!(!is_expired(GameStatus::Waiting, None, now));
    // Started without a timestamp cannot be judged stale
    assert!(!is_expired(GameStatus::Started, None, now));
}
