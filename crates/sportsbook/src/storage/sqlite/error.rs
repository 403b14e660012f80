//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `sportsbook_core::storage`.
//! Row conversion runs after the SQLite call returns, so its errors are
//! already `RepositoryError`s and never pass through here.

use sportsbook_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `CannotOpen` → `RepositoryError::ConnectionFailed`
/// - All other errors (prepare, bind, step, scan) → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => RepositoryError::QueryFailed(format!("{entity_type}: {err}")),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    match err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(&rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::Close(_) | tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        other => RepositoryError::QueryFailed(other.to_string()),
    }
}

/// Maps a failure while seeding to `SeedFailed`, keeping connection loss distinct.
pub fn map_seed_error(err: tokio_rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match map_tokio_rusqlite_error(err, entity_type) {
        RepositoryError::ConnectionFailed(msg) => RepositoryError::ConnectionFailed(msg),
        RepositoryError::QueryFailed(msg)
        | RepositoryError::Conversion(msg)
        | RepositoryError::SeedFailed(msg) => RepositoryError::SeedFailed(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "Race");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Event");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_scan_error_maps_to_query_failed() {
        let rusqlite_err = rusqlite::Error::InvalidColumnType(
            3,
            "advertised_start_time".to_string(),
            rusqlite::types::Type::Integer,
        );
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite_err);

        let result = map_tokio_rusqlite_error(err, "Event");

        match result {
            RepositoryError::QueryFailed(msg) => assert!(msg.starts_with("Event")),
            other => panic!("Expected QueryFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_other_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "Race");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn test_seed_error_maps_to_seed_failed() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::InvalidQuery);

        let result = map_seed_error(err, "Race");

        assert!(matches!(result, RepositoryError::SeedFailed(_)));
    }

    #[test]
    fn test_seed_error_keeps_connection_failed() {
        let result = map_seed_error(tokio_rusqlite::Error::ConnectionClosed, "Event");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }
}
