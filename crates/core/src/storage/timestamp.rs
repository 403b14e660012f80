use chrono::{DateTime, Utc};

use super::{RepositoryError, Result};

/// Seconds of 0001-01-01T00:00:00Z since the Unix epoch.
const MIN_TIMESTAMP_SECONDS: i64 = -62_135_596_800;

/// Seconds of 9999-12-31T23:59:59Z since the Unix epoch.
const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

/// Converts a stored start time into the wire timestamp representation.
///
/// The wire format only covers years 1 through 9999 (UTC). Anything outside
/// that range is a conversion failure rather than a silently clamped value.
pub fn to_protocol_timestamp(value: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let seconds = value.timestamp();

    if seconds < MIN_TIMESTAMP_SECONDS {
        return Err(RepositoryError::Conversion(format!(
            "{value} is before 0001-01-01T00:00:00Z"
        )));
    }
    if seconds > MAX_TIMESTAMP_SECONDS {
        return Err(RepositoryError::Conversion(format!(
            "{value} is after 9999-12-31T23:59:59Z"
        )));
    }

    Ok(value)
}
