//! Environment-driven core configuration.
//!
//! # Invariants
//! - Blank environment values behave exactly like unset ones.
//! - Resolution never fails; every field has a default.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "TASKLIST_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";
const DEFAULT_DB_FILE_NAME: &str = "tasklist.sqlite3";

/// Storage and logging settings shared by the FFI and CLI front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
}

impl CoreConfig {
    /// Resolves settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = non_blank(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level =
            non_blank(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());

        Self { db_path, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DB_PATH_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = CoreConfig::from_lookup(|name| match name {
            DB_PATH_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(
            config.db_path,
            std::env::temp_dir().join("tasklist.sqlite3")
        );
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = CoreConfig::from_lookup(|name| match name {
            DB_PATH_ENV => Some(" /data/todo.db ".to_string()),
            LOG_LEVEL_ENV => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, PathBuf::from("/data/todo.db"));
        assert_eq!(config.log_level, "warn");
    }
}
