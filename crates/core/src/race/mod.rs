mod filter;
mod operations;
mod status;
mod types;

pub use filter::{ListRacesFilter, RaceSortBy};
pub use operations::{filter_races, sort_races};
pub use status::{apply_status, derive_status};
pub use types::{Race, RaceStatus};
