//! DTOs for the games adapter.

/// Data for creating a new game (always created waiting, with no deck).
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub name: String,
    /// Comma-joined tag filter
    pub hashtags: String,
}

/// Data for the waiting → started transition.
#[derive(Debug, Clone)]
pub struct GameStart {
    pub id: i64,
    pub current_lock_version: i32,
    pub started_at: time::OffsetDateTime,
    /// Encoded deck, stored as both the immutable snapshot and the
    /// remaining deck
    pub deck: String,
}

/// Data for updating a game's editable metadata.
#[derive(Debug, Clone)]
pub struct GameUpdateMetadata {
    pub id: i64,
    pub current_lock_version: i32,
    pub name: String,
    pub hashtags: String,
}
