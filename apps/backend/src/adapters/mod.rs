//! SeaORM adapters - generic over ConnectionTrait.
//!
//! Adapter functions return `DbErr`; the repos layer maps to `DomainError`
//! via `From<DbErr>`.

pub mod cards_sea;
pub mod categories_sea;
pub mod games_sea;
pub mod sets_sea;
pub mod users_sea;
