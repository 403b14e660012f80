use chrono::{DateTime, Utc};

use super::types::{Race, RaceStatus};

/// A race is closed once its advertised start time is at or before `now`.
pub fn derive_status(advertised_start_time: DateTime<Utc>, now: DateTime<Utc>) -> RaceStatus {
    if advertised_start_time <= now {
        RaceStatus::Closed
    } else {
        RaceStatus::Open
    }
}

/// Derives the status of every race against the same `now` snapshot.
pub fn apply_status(races: &mut [Race], now: DateTime<Utc>) {
    for race in races.iter_mut() {
        race.status = derive_status(race.advertised_start_time, now);
    }
}
