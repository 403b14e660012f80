use serde::{Deserialize, Serialize};

use crate::storage::{ListFilter, VisibleStatus};

/// Sortable race columns. Always ascending.
///
/// Unknown wire values deserialize to `Unspecified`, which sorts by
/// advertised start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum RaceSortBy {
    #[default]
    Unspecified,
    Id,
    MeetingId,
    Name,
    Number,
    Visible,
    AdvertisedStartTime,
}

impl RaceSortBy {
    /// Column used in the `ORDER BY` clause.
    pub fn column(self) -> &'static str {
        match self {
            RaceSortBy::Id => "id",
            RaceSortBy::MeetingId => "meeting_id",
            RaceSortBy::Name => "name",
            RaceSortBy::Number => "number",
            RaceSortBy::Visible => "visible",
            RaceSortBy::Unspecified | RaceSortBy::AdvertisedStartTime => "advertised_start_time",
        }
    }
}

impl From<String> for RaceSortBy {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ID" => RaceSortBy::Id,
            "MEETING_ID" => RaceSortBy::MeetingId,
            "NAME" => RaceSortBy::Name,
            "NUMBER" => RaceSortBy::Number,
            "VISIBLE" => RaceSortBy::Visible,
            "ADVERTISED_START_TIME" => RaceSortBy::AdvertisedStartTime,
            _ => RaceSortBy::Unspecified,
        }
    }
}

/// Filter for listing races.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRacesFilter {
    pub meeting_ids: Vec<String>,
    pub visible_status: VisibleStatus,
    pub sort_by: RaceSortBy,
}

impl ListRacesFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to races belonging to the given meetings.
    pub fn with_meeting_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meeting_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_visible_status(mut self, visible_status: VisibleStatus) -> Self {
        self.visible_status = visible_status;
        self
    }

    pub fn with_sort_by(mut self, sort_by: RaceSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

impl ListFilter for ListRacesFilter {
    const ID_COLUMN: &'static str = "meeting_id";

    fn ids(&self) -> &[String] {
        &self.meeting_ids
    }

    fn visible_status(&self) -> VisibleStatus {
        self.visible_status
    }

    fn order_by_column(&self) -> &'static str {
        self.sort_by.column()
    }
}
