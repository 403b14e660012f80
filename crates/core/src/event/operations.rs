use super::filter::{EventSortBy, ListEventsFilter};
use super::types::Event;

/// Applies a listing filter to events held in memory.
///
/// Mirrors the SQL built by `build_list_query`: identifier membership (when
/// non-empty), the visibility selector, then a stable ascending sort on the
/// selected column.
pub fn filter_events(events: &[Event], filter: Option<&ListEventsFilter>) -> Vec<Event> {
    let default_filter = ListEventsFilter::default();
    let filter = filter.unwrap_or(&default_filter);

    let mut matching: Vec<Event> = events
        .iter()
        .filter(|event| filter.event_ids.is_empty() || filter.event_ids.contains(&event.id))
        .filter(|event| filter.visible_status.matches(event.visible))
        .cloned()
        .collect();

    sort_events(&mut matching, filter.sort_by);
    matching
}

/// Sorts events ascending by the selected column.
pub fn sort_events(events: &mut [Event], sort_by: EventSortBy) {
    match sort_by {
        EventSortBy::Id => events.sort_by(|a, b| a.id.cmp(&b.id)),
        EventSortBy::Name => events.sort_by(|a, b| a.name.cmp(&b.name)),
        EventSortBy::Visible => events.sort_by_key(|event| event.visible),
        EventSortBy::Unspecified | EventSortBy::AdvertisedStartTime => {
            events.sort_by_key(|event| event.advertised_start_time)
        }
    }
}
