//! In-memory storage backend.
//!
//! Provides in-memory implementations of the repository traits that keep
//! events and races in HashMaps wrapped in `Arc<RwLock<_>>`. Used by the
//! `inmemory` feature and by handler tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use sportsbook::storage::inmemory::InMemoryRaceRepository;
//!
//! let repo = InMemoryRaceRepository::new(100);
//! repo.init().await?;
//! ```

mod repository;

pub use repository::{InMemoryEventRepository, InMemoryRaceRepository};
