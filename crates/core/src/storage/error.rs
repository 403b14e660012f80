use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Not-found is never an error: lookups return `Ok(None)` and listings return
/// an empty `Vec`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Timestamp conversion failed: {0}")]
    Conversion(String),
    #[error("Seeding failed: {0}")]
    SeedFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open db/racing.db".to_string());
        assert_eq!(
            error.to_string(),
            "Connection failed: unable to open db/racing.db"
        );
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such column: meeting".to_string());
        assert_eq!(error.to_string(), "Query failed: no such column: meeting");
    }

    #[test]
    fn test_repository_error_conversion_display() {
        let error = RepositoryError::Conversion("year 0 is out of range".to_string());
        assert_eq!(
            error.to_string(),
            "Timestamp conversion failed: year 0 is out of range"
        );
    }

    #[test]
    fn test_repository_error_seed_failed_display() {
        let error = RepositoryError::SeedFailed("disk I/O error".to_string());
        assert_eq!(error.to_string(), "Seeding failed: disk I/O error");
    }
}
