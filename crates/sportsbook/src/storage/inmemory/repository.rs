//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use sportsbook_core::event::{filter_events, Event, ListEventsFilter};
use sportsbook_core::race::{filter_races, ListRacesFilter, Race};
use sportsbook_core::seed::{generate_seed_events, generate_seed_races};
use sportsbook_core::storage::{
    to_protocol_timestamp, EventRepository, InitGate, RaceRepository, Result,
};

/// In-memory event store.
///
/// Events are keyed by id in a `HashMap` wrapped in `Arc<RwLock<_>>`.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<String, Event>>>,
    seeded: Arc<InitGate>,
    seed_count: u32,
}

impl InMemoryEventRepository {
    /// Creates an empty repository that seeds `seed_count` events on `init`.
    pub fn new(seed_count: u32) -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
            seeded: Arc::new(InitGate::new()),
            seed_count,
        }
    }

    /// Creates a repository pre-loaded with `events` and nothing to seed.
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let events = events
            .into_iter()
            .map(|event| (event.id.clone(), event))
            .collect();

        Self {
            events: Arc::new(RwLock::new(events)),
            seeded: Arc::new(InitGate::new()),
            seed_count: 0,
        }
    }

    async fn seed(&self) -> Result<()> {
        let fixtures = generate_seed_events(self.seed_count, Utc::now(), rand::random());
        let mut events = self.events.write().await;

        let before = events.len();
        for event in fixtures {
            events.entry(event.id.clone()).or_insert(event);
        }

        tracing::info!(inserted = events.len() - before, "Seeded events");
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn init(&self) -> Result<()> {
        let repo = self.clone();
        self.seeded.run(move || async move { repo.seed().await }).await
    }

    async fn list_events(&self, filter: Option<&ListEventsFilter>) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.events.read().await.values().cloned().collect();

        filter_events(&events, filter)
            .into_iter()
            .map(|event| {
                to_protocol_timestamp(event.advertised_start_time)?;
                Ok(event)
            })
            .collect()
    }
}

/// In-memory race store.
///
/// Status is never stored; it is derived on every read like the SQLite backend.
#[derive(Debug, Clone)]
pub struct InMemoryRaceRepository {
    races: Arc<RwLock<HashMap<String, Race>>>,
    seeded: Arc<InitGate>,
    seed_count: u32,
}

impl InMemoryRaceRepository {
    /// Creates an empty repository that seeds `seed_count` races on `init`.
    pub fn new(seed_count: u32) -> Self {
        Self {
            races: Arc::new(RwLock::new(HashMap::new())),
            seeded: Arc::new(InitGate::new()),
            seed_count,
        }
    }

    /// Creates a repository pre-loaded with `races` and nothing to seed.
    pub fn with_races(races: impl IntoIterator<Item = Race>) -> Self {
        let races = races
            .into_iter()
            .map(|race| (race.id.clone(), race))
            .collect();

        Self {
            races: Arc::new(RwLock::new(races)),
            seeded: Arc::new(InitGate::new()),
            seed_count: 0,
        }
    }

    async fn seed(&self) -> Result<()> {
        let fixtures = generate_seed_races(self.seed_count, Utc::now(), rand::random());
        let mut races = self.races.write().await;

        let before = races.len();
        for race in fixtures {
            races.entry(race.id.clone()).or_insert(race);
        }

        tracing::info!(inserted = races.len() - before, "Seeded races");
        Ok(())
    }
}

#[async_trait]
impl RaceRepository for InMemoryRaceRepository {
    async fn init(&self) -> Result<()> {
        let repo = self.clone();
        self.seeded.run(move || async move { repo.seed().await }).await
    }

    async fn list_races(&self, filter: Option<&ListRacesFilter>) -> Result<Vec<Race>> {
        let now = Utc::now();
        let races: Vec<Race> = self.races.read().await.values().cloned().collect();

        filter_races(&races, filter, now)
            .into_iter()
            .map(|race| {
                to_protocol_timestamp(race.advertised_start_time)?;
                Ok(race)
            })
            .collect()
    }

    async fn get_race_by_id(&self, id: &str) -> Result<Option<Race>> {
        let now = Utc::now();

        match self.races.read().await.get(id) {
            Some(race) => {
                to_protocol_timestamp(race.advertised_start_time)?;
                Ok(Some(race.clone().with_status_at(now)))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use sportsbook_core::race::RaceStatus;
    use sportsbook_core::storage::{RepositoryError, VisibleStatus};

    fn event_ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|event| event.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_events_orders_by_start_time() {
        let now = Utc::now();
        let repo = InMemoryEventRepository::with_events([
            Event::new("3", "Storm vs Titans", now + Duration::hours(3)),
            Event::new("1", "Lions vs Hawks", now + Duration::hours(1)),
            Event::new("2", "Sharks vs Eagles", now + Duration::hours(2)),
        ]);

        let events = repo.list_events(None).await.unwrap();

        assert_eq!(event_ids(&events), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_list_events_filter_by_ids_and_visibility() {
        let now = Utc::now();
        let repo = InMemoryEventRepository::with_events([
            Event::new("1", "Lions vs Hawks", now),
            Event::new("2", "Sharks vs Eagles", now).with_visible(false),
            Event::new("3", "Storm vs Titans", now),
        ]);
        let filter = ListEventsFilter::new()
            .with_event_ids(["1", "2"])
            .with_visible_status(VisibleStatus::Invisible);

        let events = repo.list_events(Some(&filter)).await.unwrap();

        assert_eq!(event_ids(&events), vec!["2"]);
    }

    #[tokio::test]
    async fn test_event_init_seeds_once() {
        let repo = InMemoryEventRepository::new(15);

        repo.init().await.unwrap();
        repo.init().await.unwrap();

        assert_eq!(repo.list_events(None).await.unwrap().len(), 15);
    }

    #[tokio::test]
    async fn test_cloned_repository_shares_init_outcome() {
        let repo = InMemoryEventRepository::new(4);
        let clone = repo.clone();

        repo.init().await.unwrap();
        clone.init().await.unwrap();

        assert_eq!(clone.list_events(None).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_list_races_derives_status() {
        let now = Utc::now();
        let repo = InMemoryRaceRepository::with_races([
            Race::new("A", "1", "Ascot Plate", 1, now - Duration::hours(1)),
            Race::new("B", "1", "Ascot Cup", 2, now + Duration::hours(1)),
        ]);

        let races = repo.list_races(None).await.unwrap();

        assert_eq!(races[0].status, RaceStatus::Closed);
        assert_eq!(races[1].status, RaceStatus::Open);
    }

    #[tokio::test]
    async fn test_get_race_by_id() {
        let now = Utc::now();
        let repo = InMemoryRaceRepository::with_races([Race::new(
            "A",
            "1",
            "Ascot Plate",
            1,
            now - Duration::minutes(5),
        )]);

        let race = repo.get_race_by_id("A").await.unwrap().unwrap();
        assert_eq!(race.status, RaceStatus::Closed);
        assert_eq!(repo.get_race_by_id("Z").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_out_of_range_start_time_is_conversion_error() {
        let ancient = NaiveDate::from_ymd_opt(0, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let repo = InMemoryRaceRepository::with_races([Race::new("A", "1", "Old", 1, ancient)]);

        assert!(matches!(
            repo.list_races(None).await,
            Err(RepositoryError::Conversion(_))
        ));
        assert!(matches!(
            repo.get_race_by_id("A").await,
            Err(RepositoryError::Conversion(_))
        ));
    }

    #[tokio::test]
    async fn test_race_init_seeds_once() {
        let repo = InMemoryRaceRepository::new(30);

        repo.init().await.unwrap();
        repo.init().await.unwrap();

        assert_eq!(repo.list_races(None).await.unwrap().len(), 30);
    }
}
