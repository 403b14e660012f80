//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and picks the backend via feature flags.

use std::{sync::Arc, time::Duration};

use sportsbook_core::storage::{EventRepository, RaceRepository, Result};

#[cfg(any(feature = "sqlite", feature = "inmemory"))]
use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    pub event_repo: Arc<dyn EventRepository>,
    pub race_repo: Arc<dyn RaceRepository>,
    /// Applied to every request by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState with the given repositories.
    pub fn build(
        event_repo: Arc<dyn EventRepository>,
        race_repo: Arc<dyn RaceRepository>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            event_repo,
            race_repo,
            request_timeout,
        }
    }

    /// Seeds both repositories. Must complete before serving requests.
    pub async fn init(&self) -> Result<()> {
        tokio::try_join!(self.event_repo.init(), self.race_repo.init())?;
        Ok(())
    }
}

// ============================================================================
// Feature-specific AppState constructors
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::sqlite::{SqliteEventRepository, SqliteRaceRepository};

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let event_repo = Arc::new(
                SqliteEventRepository::new(&config.events_sqlite_path, config.seed_event_count)
                    .await?,
            );
            let race_repo = Arc::new(
                SqliteRaceRepository::new(&config.races_sqlite_path, config.seed_race_count)
                    .await?,
            );

            tracing::info!(
                events = %config.events_sqlite_path.display(),
                races = %config.races_sqlite_path.display(),
                "Opened SQLite databases"
            );

            Ok(Self::build(event_repo, race_repo, config.request_timeout()))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::inmemory::{InMemoryEventRepository, InMemoryRaceRepository};

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development without any database files.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let event_repo = Arc::new(InMemoryEventRepository::new(config.seed_event_count));
            let race_repo = Arc::new(InMemoryRaceRepository::new(config.seed_race_count));

            Ok(Self::build(event_repo, race_repo, config.request_timeout()))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::inmemory::{InMemoryEventRepository, InMemoryRaceRepository};

    impl Default for AppState {
        /// Creates an AppState with empty in-memory repositories for testing.
        fn default() -> Self {
            Self::build(
                Arc::new(InMemoryEventRepository::new(0)),
                Arc::new(InMemoryRaceRepository::new(0)),
                Duration::from_secs(10),
            )
        }
    }
}
