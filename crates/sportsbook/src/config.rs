use std::{env, path::PathBuf, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the events SQLite database (default: "db/events.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub events_sqlite_path: PathBuf,
    /// Path to the races SQLite database (default: "db/racing.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub races_sqlite_path: PathBuf,
    /// Number of fixture events seeded on init (default: 100)
    pub seed_event_count: u32,
    /// Number of fixture races seeded on init (default: 100)
    pub seed_race_count: u32,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTS_SQLITE_PATH` - Events database path (default: "db/events.db")
    /// - `RACES_SQLITE_PATH` - Races database path (default: "db/racing.db")
    /// - `SEED_EVENT_COUNT` - Events seeded on init (default: 100)
    /// - `SEED_RACE_COUNT` - Races seeded on init (default: 100)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            events_sqlite_path: lookup("EVENTS_SQLITE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("db/events.db")),
            races_sqlite_path: lookup("RACES_SQLITE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("db/racing.db")),
            seed_event_count: parse_var(&lookup, "SEED_EVENT_COUNT").unwrap_or(100),
            seed_race_count: parse_var(&lookup, "SEED_RACE_COUNT").unwrap_or(100),
            request_timeout_seconds: parse_var(&lookup, "REQUEST_TIMEOUT_SECONDS")
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.events_sqlite_path, PathBuf::from("db/events.db"));
        assert_eq!(config.races_sqlite_path, PathBuf::from("db/racing.db"));
        assert_eq!(config.seed_event_count, 100);
        assert_eq!(config.seed_race_count, 100);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_values_from_lookup() {
        let vars = HashMap::from([
            ("RACES_SQLITE_PATH", "/var/lib/racing.db"),
            ("SEED_RACE_COUNT", "5"),
            ("REQUEST_TIMEOUT_SECONDS", "30"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.races_sqlite_path, PathBuf::from("/var/lib/racing.db"));
        assert_eq!(config.seed_race_count, 5);
        assert_eq!(config.seed_event_count, 100);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = Config::from_lookup(|key| match key {
            "SEED_EVENT_COUNT" => Some("lots".to_string()),
            "REQUEST_TIMEOUT_SECONDS" => Some("-1".to_string()),
            _ => None,
        });

        assert_eq!(config.seed_event_count, 100);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_counts_and_timeout_parse_to_their_own_widths() {
        let vars = HashMap::from([
            ("SEED_EVENT_COUNT", "4294967295"),
            ("SEED_RACE_COUNT", "4294967296"),
            ("REQUEST_TIMEOUT_SECONDS", "4294967296"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.seed_event_count, u32::MAX);
        // Too wide for a count, falls back.
        assert_eq!(config.seed_race_count, 100);
        assert_eq!(config.request_timeout_seconds, u64::from(u32::MAX) + 1);
    }
}
