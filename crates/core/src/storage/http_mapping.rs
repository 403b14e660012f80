//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Conversion` -> 500 (Internal Server Error)
/// - `SeedFailed` -> 503 (Service Unavailable)
///
/// # Examples
///
/// ```
/// use sportsbook_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::SeedFailed("database is locked".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Conversion(_) => 500,
        RepositoryError::SeedFailed(_) => 503,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("database connection timeout".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("invalid query syntax".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_conversion_maps_to_500() {
        let error = RepositoryError::Conversion("timestamp before year 1".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_seed_failed_maps_to_503() {
        let error = RepositoryError::SeedFailed("table races already locked".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }
}
