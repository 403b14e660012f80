mod filter;
mod operations;
mod types;

pub use filter::{EventSortBy, ListEventsFilter};
pub use operations::{filter_events, sort_events};
pub use types::Event;
