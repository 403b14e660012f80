use async_trait::async_trait;

use crate::event::{Event, ListEventsFilter};
use crate::race::{ListRacesFilter, Race};

use super::Result;

/// Repository for sports event reads.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Seeds the store with fixture events. Runs at most once per instance;
    /// later calls return the outcome of the first run.
    async fn init(&self) -> Result<()>;

    /// Lists events matching the filter. `None` lists every event ordered by
    /// advertised start time.
    async fn list_events(&self, filter: Option<&ListEventsFilter>) -> Result<Vec<Event>>;
}

/// Repository for race reads.
#[async_trait]
pub trait RaceRepository: Send + Sync {
    /// Seeds the store with fixture races. Runs at most once per instance;
    /// later calls return the outcome of the first run.
    async fn init(&self) -> Result<()>;

    /// Lists races matching the filter, with status derived at call time.
    async fn list_races(&self, filter: Option<&ListRacesFilter>) -> Result<Vec<Race>>;

    /// Gets a race by its ID. Returns `Ok(None)` when no race matches.
    async fn get_race_by_id(&self, id: &str) -> Result<Option<Race>>;
}
