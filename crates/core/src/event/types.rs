use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled sports event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

impl Event {
    /// Creates a visible event.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        advertised_start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            advertised_start_time,
        }
    }

    /// Sets the visibility flag.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
