use serde::{Deserialize, Serialize};

use crate::storage::{ListFilter, VisibleStatus};

/// Sortable event columns. Always ascending.
///
/// Unknown wire values deserialize to `Unspecified`, which sorts by
/// advertised start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum EventSortBy {
    #[default]
    Unspecified,
    Id,
    Name,
    Visible,
    AdvertisedStartTime,
}

impl EventSortBy {
    /// Column used in the `ORDER BY` clause.
    pub fn column(self) -> &'static str {
        match self {
            EventSortBy::Id => "id",
            EventSortBy::Name => "name",
            EventSortBy::Visible => "visible",
            EventSortBy::Unspecified | EventSortBy::AdvertisedStartTime => {
                "advertised_start_time"
            }
        }
    }
}

impl From<String> for EventSortBy {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ID" => EventSortBy::Id,
            "NAME" => EventSortBy::Name,
            "VISIBLE" => EventSortBy::Visible,
            "ADVERTISED_START_TIME" => EventSortBy::AdvertisedStartTime,
            _ => EventSortBy::Unspecified,
        }
    }
}

/// Filter for listing events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListEventsFilter {
    pub event_ids: Vec<String>,
    pub visible_status: VisibleStatus,
    pub sort_by: EventSortBy,
}

impl ListEventsFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given event IDs.
    pub fn with_event_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_visible_status(mut self, visible_status: VisibleStatus) -> Self {
        self.visible_status = visible_status;
        self
    }

    pub fn with_sort_by(mut self, sort_by: EventSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

impl ListFilter for ListEventsFilter {
    const ID_COLUMN: &'static str = "id";

    fn ids(&self) -> &[String] {
        &self.event_ids
    }

    fn visible_status(&self) -> VisibleStatus {
        self.visible_status
    }

    fn order_by_column(&self) -> &'static str {
        self.sort_by.column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_builder() {
        let filter = ListEventsFilter::new()
            .with_event_ids(["1", "2"])
            .with_visible_status(VisibleStatus::Visible)
            .with_sort_by(EventSortBy::Name);

        assert_eq!(filter.event_ids, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(filter.visible_status, VisibleStatus::Visible);
        assert_eq!(filter.sort_by, EventSortBy::Name);
    }

    #[test]
    fn test_filter_deserializes_with_missing_fields() {
        let filter: ListEventsFilter = serde_json::from_str(r#"{"event_ids":["7"]}"#).unwrap();

        assert_eq!(filter.event_ids, vec!["7".to_string()]);
        assert_eq!(filter.visible_status, VisibleStatus::Unspecified);
        assert_eq!(filter.sort_by, EventSortBy::Unspecified);
    }

    #[test]
    fn test_unknown_sort_by_falls_back_to_start_time() {
        let filter: ListEventsFilter =
            serde_json::from_str(r#"{"sort_by":"POPULARITY"}"#).unwrap();

        assert_eq!(filter.sort_by, EventSortBy::Unspecified);
        assert_eq!(filter.order_by_column(), "advertised_start_time");
    }
}
