use chrono::{DateTime, Utc};

use super::filter::{ListRacesFilter, RaceSortBy};
use super::status::apply_status;
use super::types::Race;

/// Applies a listing filter to races held in memory and derives their status
/// against `now`.
pub fn filter_races(
    races: &[Race],
    filter: Option<&ListRacesFilter>,
    now: DateTime<Utc>,
) -> Vec<Race> {
    let default_filter = ListRacesFilter::default();
    let filter = filter.unwrap_or(&default_filter);

    let mut matching: Vec<Race> = races
        .iter()
        .filter(|race| {
            filter.meeting_ids.is_empty() || filter.meeting_ids.contains(&race.meeting_id)
        })
        .filter(|race| filter.visible_status.matches(race.visible))
        .cloned()
        .collect();

    sort_races(&mut matching, filter.sort_by);
    apply_status(&mut matching, now);
    matching
}

/// Sorts races ascending by the selected column.
pub fn sort_races(races: &mut [Race], sort_by: RaceSortBy) {
    match sort_by {
        RaceSortBy::Id => races.sort_by(|a, b| a.id.cmp(&b.id)),
        RaceSortBy::MeetingId => races.sort_by(|a, b| a.meeting_id.cmp(&b.meeting_id)),
        RaceSortBy::Name => races.sort_by(|a, b| a.name.cmp(&b.name)),
        RaceSortBy::Number => races.sort_by_key(|race| race.number),
        RaceSortBy::Visible => races.sort_by_key(|race| race.visible),
        RaceSortBy::Unspecified | RaceSortBy::AdvertisedStartTime => {
            races.sort_by_key(|race| race.advertised_start_time)
        }
    }
}
