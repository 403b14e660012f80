use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::derive_status;

/// Whether a race is still accepting bets.
///
/// Derived from the advertised start time on every read and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaceStatus {
    #[default]
    Open,
    Closed,
}

/// A race within a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: String,
    pub meeting_id: String,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: RaceStatus,
}

impl Race {
    /// Creates a visible race. Status starts as `Open` until derived.
    pub fn new(
        id: impl Into<String>,
        meeting_id: impl Into<String>,
        name: impl Into<String>,
        number: i64,
        advertised_start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            meeting_id: meeting_id.into(),
            name: name.into(),
            number,
            visible: true,
            advertised_start_time,
            status: RaceStatus::Open,
        }
    }

    /// Sets the visibility flag.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Derives the status relative to `now`.
    pub fn with_status_at(mut self, now: DateTime<Utc>) -> Self {
        self.status = derive_status(self.advertised_start_time, now);
        self
    }
}
