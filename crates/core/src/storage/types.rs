use serde::{Deserialize, Serialize};

/// Tri-state visibility selector shared by event and race filters.
///
/// Deserialization is lenient: any value other than `VISIBLE` or `INVISIBLE`
/// falls back to `UNSPECIFIED`, which applies no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum VisibleStatus {
    #[default]
    Unspecified,
    Visible,
    Invisible,
}

impl VisibleStatus {
    /// Returns true if a row with the given `visible` flag passes this selector.
    pub fn matches(self, visible: bool) -> bool {
        match self {
            VisibleStatus::Unspecified => true,
            VisibleStatus::Visible => visible,
            VisibleStatus::Invisible => !visible,
        }
    }

    /// SQL predicate restricting the `visible` column, if any.
    pub fn clause(self) -> Option<&'static str> {
        match self {
            VisibleStatus::Unspecified => None,
            VisibleStatus::Visible => Some("visible = 1"),
            VisibleStatus::Invisible => Some("visible = 0"),
        }
    }
}

impl From<String> for VisibleStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "VISIBLE" => VisibleStatus::Visible,
            "INVISIBLE" => VisibleStatus::Invisible,
            _ => VisibleStatus::Unspecified,
        }
    }
}

/// A caller-supplied description of which rows to list and how to order them.
///
/// Implemented by the per-domain filters so a single query builder can serve
/// both events and races.
pub trait ListFilter: Default {
    /// Column the identifier restriction applies to.
    const ID_COLUMN: &'static str;

    /// Identifiers to restrict to. Empty means no restriction.
    fn ids(&self) -> &[String];

    fn visible_status(&self) -> VisibleStatus;

    /// Column for the `ORDER BY` clause. Always sorted ascending.
    fn order_by_column(&self) -> &'static str;
}
