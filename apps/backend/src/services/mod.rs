//! Service layer: business rules over the repos.
//!
//! Services take a transaction handle and return domain results; the routes
//! own transaction scope and HTTP shaping. The one exception is the game
//! engine's draw/status paths, which own their transactions to retry
//! optimistic-lock conflicts.

pub mod auth;
pub mod cards;
pub mod categories;
pub mod games;
pub mod hosts;
pub mod sets;
