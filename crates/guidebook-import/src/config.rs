//! Importer configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Legacy JSON endpoint.
    /// Env: `LEGACY_SOURCE_URL`
    /// Default: `http://localhost/json.php`
    pub legacy_source_url: String,

    /// Local export to read instead of the endpoint.
    /// Env: `LEGACY_SOURCE_FILE`
    pub legacy_source_file: Option<PathBuf>,

    /// SQLite document database.
    /// Env: `DATABASE_PATH`
    /// Default: platform data directory (`guidebook.db`).
    pub database_path: Option<PathBuf>,

    /// Env: `FETCH_TIMEOUT_SECS`
    /// Default: 30
    pub fetch_timeout: Duration,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            legacy_source_url: "http://localhost/json.php".to_string(),
            legacy_source_file: None,
            database_path: None,
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl ImportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = get("LEGACY_SOURCE_URL").filter(|u| !u.is_empty()) {
            config.legacy_source_url = url;
        }

        if let Some(path) = get("LEGACY_SOURCE_FILE").filter(|p| !p.is_empty()) {
            config.legacy_source_file = Some(PathBuf::from(path));
        }

        if let Some(path) = get("DATABASE_PATH").filter(|p| !p.is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(val) = get("FETCH_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.fetch_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %val, "Invalid FETCH_TIMEOUT_SECS, using default"),
            }
        }

        config
    }
}
