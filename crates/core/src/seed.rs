//! Fixture generation for seeding the event and race stores.
//!
//! Pure functions: the same `seed` always yields the same fixtures relative
//! to `now`, so storage backends and tests can share them.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::event::Event;
use crate::race::Race;

/// Start times are spread this far either side of `now`.
const START_TIME_SPREAD_SECONDS: i64 = 2 * 24 * 60 * 60;

/// Number of distinct meetings races are spread across.
const MEETING_COUNT: u32 = 10;

const TEAMS: [&str; 12] = [
    "Lions", "Hawks", "Sharks", "Tigers", "Eagles", "Bulldogs", "Panthers", "Storm", "Raiders",
    "Titans", "Dragons", "Cowboys",
];

const VENUES: [&str; 8] = [
    "Flemington",
    "Randwick",
    "Ascot",
    "Caulfield",
    "Eagle Farm",
    "Morphettville",
    "Doomben",
    "Rosehill",
];

const RACE_KINDS: [&str; 5] = ["Sprint", "Plate", "Handicap", "Stakes", "Cup"];

/// Generates `count` events with ids `"1"..="count"`.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use sportsbook_core::seed::generate_seed_events;
///
/// let events = generate_seed_events(20, Utc::now(), 7);
/// assert_eq!(events.len(), 20);
/// assert_eq!(events[0].id, "1");
/// ```
pub fn generate_seed_events(count: u32, now: DateTime<Utc>, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);

    (1..=count)
        .map(|id| {
            let home = TEAMS[rng.random_range(0..TEAMS.len())];
            let away = TEAMS[rng.random_range(0..TEAMS.len())];
            let name = format!("{home} vs {away}");

            Event::new(id.to_string(), name, random_start(&mut rng, now))
                .with_visible(rng.random_bool(0.5))
        })
        .collect()
}

/// Generates `count` races with ids `"1"..="count"`, spread across
/// meetings `"1"..="10"`.
pub fn generate_seed_races(count: u32, now: DateTime<Utc>, seed: u64) -> Vec<Race> {
    let mut rng = StdRng::seed_from_u64(seed);

    (1..=count)
        .map(|id| {
            let meeting_id = rng.random_range(1..=MEETING_COUNT);
            let venue = VENUES[rng.random_range(0..VENUES.len())];
            let kind = RACE_KINDS[rng.random_range(0..RACE_KINDS.len())];
            let number = rng.random_range(1..=12);

            Race::new(
                id.to_string(),
                meeting_id.to_string(),
                format!("{venue} {kind}"),
                number,
                random_start(&mut rng, now),
            )
            .with_visible(rng.random_bool(0.5))
            .with_status_at(now)
        })
        .collect()
}

fn random_start(rng: &mut StdRng, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = rng.random_range(-START_TIME_SPREAD_SECONDS..=START_TIME_SPREAD_SECONDS);
    now + Duration::seconds(offset)
}
