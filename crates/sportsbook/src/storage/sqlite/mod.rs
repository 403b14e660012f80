//! SQLite storage backend implementation.
//!
//! This module provides SQLite-based implementations of the repository traits
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::{SqliteEventRepository, SqliteRaceRepository};
