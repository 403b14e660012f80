//! SQLite row conversion functions.
//!
//! Row mapping happens in two steps. Scanning (`row_to_*`) reads columns
//! positionally inside the SQLite call and parses the stored start time;
//! a failure there is a scan error. Conversion (`*_from_row`) then checks the
//! start time against the wire timestamp range and builds the domain type.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rusqlite::Row;

use sportsbook_core::event::Event;
use sportsbook_core::race::Race;
use sportsbook_core::storage::{to_protocol_timestamp, Result};

/// Scanned `events` row.
///
/// Expected columns: id, name, visible, advertised_start_time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

/// Scanned `races` row.
///
/// Expected columns: id, meeting_id, name, number, visible, advertised_start_time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceRow {
    pub id: String,
    pub meeting_id: String,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

// ============================================================================
// Scanning
// ============================================================================

pub fn row_to_event(row: &Row) -> rusqlite::Result<EventRow> {
    let advertised_start_time: String = row.get(3)?;

    Ok(EventRow {
        id: row.get(0)?,
        name: row.get(1)?,
        visible: row.get(2)?,
        advertised_start_time: parse_datetime(3, &advertised_start_time)?,
    })
}

pub fn row_to_race(row: &Row) -> rusqlite::Result<RaceRow> {
    let advertised_start_time: String = row.get(5)?;

    Ok(RaceRow {
        id: row.get(0)?,
        meeting_id: row.get(1)?,
        name: row.get(2)?,
        number: row.get(3)?,
        visible: row.get(4)?,
        advertised_start_time: parse_datetime(5, &advertised_start_time)?,
    })
}

// ============================================================================
// Conversion
// ============================================================================

pub fn event_from_row(row: EventRow) -> Result<Event> {
    let advertised_start_time = to_protocol_timestamp(row.advertised_start_time)?;

    Ok(Event::new(row.id, row.name, advertised_start_time).with_visible(row.visible))
}

/// Builds a race and derives its status against the caller's `now` snapshot.
pub fn race_from_row(row: RaceRow, now: DateTime<Utc>) -> Result<Race> {
    let advertised_start_time = to_protocol_timestamp(row.advertised_start_time)?;

    Ok(Race::new(
        row.id,
        row.meeting_id,
        row.name,
        row.number,
        advertised_start_time,
    )
    .with_visible(row.visible)
    .with_status_at(now))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse a stored start time.
///
/// Accepts RFC 3339 (what the seeder writes) as well as the
/// `YYYY-MM-DD HH:MM:SS[.fff][±hh:mm]` layout other SQLite writers use.
/// Values without an offset are taken as UTC.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// RFC 3339 in UTC with whole seconds, e.g. `2024-06-15T10:30:00Z`.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
