//! Pure SQL construction for list and lookup queries.
//!
//! Every value that comes from a caller is emitted as a `?` placeholder and
//! returned in [`ListQuery::args`]; only fixed column names and constant
//! predicates are written into the query text.

use super::types::ListFilter;

/// A query string and the positional arguments bound to its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sql: String,
    pub args: Vec<String>,
}

/// Builds the final listing query from a base `SELECT` and an optional filter.
///
/// An absent filter behaves like the default filter: no `WHERE`, no
/// arguments, ordered by advertised start time.
///
/// # Examples
///
/// ```
/// use sportsbook_core::race::ListRacesFilter;
/// use sportsbook_core::storage::{build_list_query, VisibleStatus};
///
/// let filter = ListRacesFilter::new()
///     .with_meeting_ids(["5", "8"])
///     .with_visible_status(VisibleStatus::Visible);
/// let query = build_list_query("SELECT id FROM races", Some(&filter));
///
/// assert_eq!(
///     query.sql,
///     "SELECT id FROM races WHERE meeting_id IN (?, ?) AND visible = 1 ORDER BY julianday(advertised_start_time)"
/// );
/// assert_eq!(query.args, vec!["5".to_string(), "8".to_string()]);
/// ```
pub fn build_list_query<F: ListFilter>(base: &str, filter: Option<&F>) -> ListQuery {
    let default_filter;
    let filter = match filter {
        Some(filter) => filter,
        None => {
            default_filter = F::default();
            &default_filter
        }
    };

    let mut clauses: Vec<String> = Vec::new();
    let mut args: Vec<String> = Vec::new();

    let ids = filter.ids();
    if !ids.is_empty() {
        clauses.push(format!("{} IN ({})", F::ID_COLUMN, placeholders(ids.len())));
        args.extend(ids.iter().cloned());
    }

    if let Some(clause) = filter.visible_status().clause() {
        clauses.push(clause.to_string());
    }

    let mut sql = base.trim().to_string();

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    sql.push_str(" ORDER BY ");
    sql.push_str(&order_by_expression(filter.order_by_column()));

    ListQuery { sql, args }
}

/// Builds a single-row lookup restricted to `id = ?`, binding `id`.
pub fn build_by_id_query(base: &str, id: &str) -> ListQuery {
    ListQuery {
        sql: format!("{} WHERE id = ?", base.trim()),
        args: vec![id.to_string()],
    }
}

/// Sort expression for a column.
///
/// Start times may be stored in more than one text layout (`T` or space
/// separator, `Z` or a numeric offset), so they are ordered by the instant
/// SQLite parses out of them rather than by their text.
fn order_by_expression(column: &str) -> String {
    match column {
        "advertised_start_time" => format!("julianday({column})"),
        _ => column.to_string(),
    }
}

/// Comma-separated `?` placeholders, e.g. `?, ?, ?` for `count = 3`.
fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
