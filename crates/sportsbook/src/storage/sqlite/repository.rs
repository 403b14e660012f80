//! SQLite repository implementation.
//!
//! Implements the repository traits from `sportsbook_core::storage` using SQLite.
//! Events and races live in separate database files, so each gets its own
//! repository and connection.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, params_from_iter, Row};
use tokio_rusqlite::Connection;

use sportsbook_core::event::{Event, ListEventsFilter};
use sportsbook_core::race::{ListRacesFilter, Race};
use sportsbook_core::seed::{generate_seed_events, generate_seed_races};
use sportsbook_core::storage::{
    build_by_id_query, build_list_query, EventRepository, InitGate, ListQuery, RaceRepository,
    RepositoryError, Result,
};

use super::conversions::{event_from_row, format_datetime, race_from_row, row_to_event, row_to_race};
use super::error::{map_seed_error, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Opens (creating if needed) a database file and applies `schema`.
async fn open(path: &Path, schema: &'static str) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            RepositoryError::ConnectionFailed(format!("{}: {e}", parent.display()))
        })?;
    }

    let conn = Connection::open(path)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    init_schema(&conn, schema).await?;

    Ok(conn)
}

#[cfg(test)]
async fn open_in_memory(schema: &'static str) -> Result<Connection> {
    let conn = Connection::open_in_memory()
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    init_schema(&conn, schema).await?;

    Ok(conn)
}

async fn init_schema(conn: &Connection, schema: &'static str) -> Result<()> {
    conn.call(move |conn| {
        conn.execute_batch(schema).map_err(wrap_err)?;
        Ok(())
    })
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
}

/// Runs a built query and scans every row.
///
/// The whole result set is scanned before returning; any scan failure fails
/// the call and no partial list is produced.
async fn query_rows<T, F>(
    conn: &Connection,
    query: ListQuery,
    row_mapper: F,
    entity_type: &'static str,
) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: Fn(&Row) -> rusqlite::Result<T> + Send + 'static,
{
    tracing::debug!(sql = %query.sql, args = ?query.args, "Running {entity_type} query");

    conn.call(move |conn| {
        let mut stmt = conn.prepare(&query.sql).map_err(wrap_err)?;
        let rows = stmt
            .query_map(params_from_iter(query.args.iter()), row_mapper)
            .map_err(wrap_err)?;

        let mut scanned = Vec::new();
        for row_result in rows {
            scanned.push(row_result.map_err(wrap_err)?);
        }
        Ok(scanned)
    })
    .await
    .map_err(|e| map_tokio_rusqlite_error(e, entity_type))
}

// ============================================================================
// Events
// ============================================================================

/// SQLite-backed event repository.
pub struct SqliteEventRepository {
    conn: Connection,
    seeded: InitGate,
    seed_count: u32,
}

impl SqliteEventRepository {
    /// Creates a repository over a file-based database.
    ///
    /// The file and its parent directory are created if missing.
    pub async fn new(path: impl AsRef<Path>, seed_count: u32) -> Result<Self> {
        let conn = open(path.as_ref(), schema::CREATE_EVENTS_TABLE).await?;

        Ok(Self {
            conn,
            seeded: InitGate::new(),
            seed_count,
        })
    }

    /// Creates a repository over an in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory(seed_count: u32) -> Result<Self> {
        let conn = open_in_memory(schema::CREATE_EVENTS_TABLE).await?;

        Ok(Self {
            conn,
            seeded: InitGate::new(),
            seed_count,
        })
    }
}

/// Inserts `count` fixture events in one transaction. Existing ids are kept.
async fn seed_events(conn: Connection, count: u32) -> Result<()> {
    let events = generate_seed_events(count, Utc::now(), rand::random());

    let inserted = conn
        .call(move |conn| {
            let tx = conn.transaction().map_err(wrap_err)?;
            let mut inserted = 0;
            {
                let mut stmt = tx.prepare(schema::INSERT_EVENT).map_err(wrap_err)?;
                for event in &events {
                    inserted += stmt
                        .execute(params![
                            event.id,
                            event.name,
                            event.visible,
                            format_datetime(&event.advertised_start_time),
                        ])
                        .map_err(wrap_err)?;
                }
            }
            tx.commit().map_err(wrap_err)?;
            Ok(inserted)
        })
        .await
        .map_err(|e| map_seed_error(e, "Event"))?;

    tracing::info!(inserted, requested = count, "Seeded events");
    Ok(())
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn init(&self) -> Result<()> {
        let conn = self.conn.clone();
        let count = self.seed_count;
        self.seeded.run(move || seed_events(conn, count)).await
    }

    async fn list_events(&self, filter: Option<&ListEventsFilter>) -> Result<Vec<Event>> {
        let query = build_list_query(schema::SELECT_EVENTS, filter);

        query_rows(&self.conn, query, row_to_event, "Event")
            .await?
            .into_iter()
            .map(event_from_row)
            .collect()
    }
}

// ============================================================================
// Races
// ============================================================================

/// SQLite-backed race repository.
pub struct SqliteRaceRepository {
    conn: Connection,
    seeded: InitGate,
    seed_count: u32,
}

impl SqliteRaceRepository {
    /// Creates a repository over a file-based database.
    ///
    /// The file and its parent directory are created if missing.
    pub async fn new(path: impl AsRef<Path>, seed_count: u32) -> Result<Self> {
        let conn = open(path.as_ref(), schema::CREATE_RACES_TABLE).await?;

        Ok(Self {
            conn,
            seeded: InitGate::new(),
            seed_count,
        })
    }

    /// Creates a repository over an in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory(seed_count: u32) -> Result<Self> {
        let conn = open_in_memory(schema::CREATE_RACES_TABLE).await?;

        Ok(Self {
            conn,
            seeded: InitGate::new(),
            seed_count,
        })
    }
}

/// Inserts `count` fixture races in one transaction. Existing ids are kept.
async fn seed_races(conn: Connection, count: u32) -> Result<()> {
    let races = generate_seed_races(count, Utc::now(), rand::random());

    let inserted = conn
        .call(move |conn| {
            let tx = conn.transaction().map_err(wrap_err)?;
            let mut inserted = 0;
            {
                let mut stmt = tx.prepare(schema::INSERT_RACE).map_err(wrap_err)?;
                for race in &races {
                    inserted += stmt
                        .execute(params![
                            race.id,
                            race.meeting_id,
                            race.name,
                            race.number,
                            race.visible,
                            format_datetime(&race.advertised_start_time),
                        ])
                        .map_err(wrap_err)?;
                }
            }
            tx.commit().map_err(wrap_err)?;
            Ok(inserted)
        })
        .await
        .map_err(|e| map_seed_error(e, "Race"))?;

    tracing::info!(inserted, requested = count, "Seeded races");
    Ok(())
}

#[async_trait]
impl RaceRepository for SqliteRaceRepository {
    async fn init(&self) -> Result<()> {
        let conn = self.conn.clone();
        let count = self.seed_count;
        self.seeded.run(move || seed_races(conn, count)).await
    }

    async fn list_races(&self, filter: Option<&ListRacesFilter>) -> Result<Vec<Race>> {
        // One snapshot per call so every race in the response agrees on "now".
        let now = Utc::now();
        let query = build_list_query(schema::SELECT_RACES, filter);

        query_rows(&self.conn, query, row_to_race, "Race")
            .await?
            .into_iter()
            .map(|row| race_from_row(row, now))
            .collect()
    }

    async fn get_race_by_id(&self, id: &str) -> Result<Option<Race>> {
        let now = Utc::now();
        let query = build_by_id_query(schema::SELECT_RACES, id);

        query_rows(&self.conn, query, row_to_race, "Race")
            .await?
            .into_iter()
            .next()
            .map(|row| race_from_row(row, now))
            .transpose()
    }
}
