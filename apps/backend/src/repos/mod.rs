//! Repository functions for the domain layer.
//!
//! Repos wrap the SeaORM adapters, convert rows into domain models and map
//! `DbErr` into `DomainError`. String-encoded columns (deck tokens, tag
//! lists) are decoded here; engine code only ever sees structured values.

pub mod cards;
pub mod categories;
pub mod games;
pub mod sets;
pub mod users;
