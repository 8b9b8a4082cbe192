//! Error codes for the Partydeck backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses. Add new codes here; never pass ad-hoc strings
//! as error codes.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Token has been revoked via logout
    UnauthorizedRevokedToken,
    /// Wrong login or password
    IncorrectCredentials,
    /// Access denied
    Forbidden,

    // Request Validation
    /// General validation error
    ValidationError,
    /// The main set of a category cannot be deleted
    MainSetProtected,

    // Resource Not Found
    /// Category not found
    CategoryNotFound,
    /// Set not found
    SetNotFound,
    /// Card not found
    CardNotFound,
    /// Game not found
    GameNotFound,
    /// Host not found
    HostNotFound,
    /// General not found error
    NotFound,
    /// No eligible card exists for the category, even after replenishment
    CardUnavailable,

    // Business Logic Conflicts
    /// Name already taken (category, set, or game)
    DuplicateName,
    /// Game has already been started
    GameAlreadyStarted,
    /// Game is not started
    GameNotStarted,
    /// Optimistic lock version mismatch
    OptimisticLock,

    // Infrastructure
    /// Database error
    DbError,
    /// Persisted state failed to decode
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// The canonical SCREAMING_SNAKE_CASE string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            ErrorCode::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            ErrorCode::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            ErrorCode::UnauthorizedRevokedToken => "UNAUTHORIZED_REVOKED_TOKEN",
            ErrorCode::IncorrectCredentials => "INCORRECT_CREDENTIALS",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::MainSetProtected => "MAIN_SET_PROTECTED",
            ErrorCode::CategoryNotFound => "CATEGORY_NOT_FOUND",
            ErrorCode::SetNotFound => "SET_NOT_FOUND",
            ErrorCode::CardNotFound => "CARD_NOT_FOUND",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::HostNotFound => "HOST_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::CardUnavailable => "CARD_UNAVAILABLE",
            ErrorCode::DuplicateName => "DUPLICATE_NAME",
            ErrorCode::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            ErrorCode::GameNotStarted => "GAME_NOT_STARTED",
            ErrorCode::OptimisticLock => "OPTIMISTIC_LOCK",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn codes_are_screaming_snake_case() {
        let codes = [
            ErrorCode::Unauthorized,
            ErrorCode::IncorrectCredentials,
            ErrorCode::MainSetProtected,
            ErrorCode::CardUnavailable,
            ErrorCode::DuplicateName,
            ErrorCode::GameAlreadyStarted,
            ErrorCode::OptimisticLock,
            ErrorCode::DataCorruption,
        ];
        for code in codes {
            let s = code.as_str();
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }
}
