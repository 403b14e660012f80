//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repositories,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the events table.
pub const CREATE_EVENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    visible INTEGER NOT NULL,
    advertised_start_time TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_events_advertised_start_time ON events(advertised_start_time);
"#;

/// SQL statement to create the races table.
pub const CREATE_RACES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS races (
    id TEXT PRIMARY KEY,
    meeting_id TEXT NOT NULL,
    name TEXT NOT NULL,
    number INTEGER NOT NULL,
    visible INTEGER NOT NULL,
    advertised_start_time TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_races_meeting_id ON races(meeting_id);
CREATE INDEX IF NOT EXISTS idx_races_advertised_start_time ON races(advertised_start_time);
"#;

// Event queries

/// Base listing query. Filters append `WHERE`/`ORDER BY` to this.
pub const SELECT_EVENTS: &str = r#"
SELECT id, name, visible, advertised_start_time
FROM events
"#;

pub const INSERT_EVENT: &str = r#"
INSERT OR IGNORE INTO events (id, name, visible, advertised_start_time)
VALUES (?1, ?2, ?3, ?4)
"#;

// Race queries

/// Base listing query. Filters append `WHERE`/`ORDER BY` to this.
pub const SELECT_RACES: &str = r#"
SELECT id, meeting_id, name, number, visible, advertised_start_time
FROM races
"#;

pub const INSERT_RACE: &str = r#"
INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;
