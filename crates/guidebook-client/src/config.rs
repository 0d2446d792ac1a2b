//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client can start with zero
//! configuration for local development.

use std::path::PathBuf;

use guidebook_store::constants::DEFAULT_MAX_BLOB_SIZE;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// SQLite document database.
    /// Env: `DATABASE_PATH`
    /// Default: platform data directory (`guidebook.db`).
    pub database_path: Option<PathBuf>,

    /// Directory where uploaded files are written.
    /// Env: `BLOB_STORAGE_PATH`
    /// Default: `./blobs`
    pub blob_storage_path: PathBuf,

    /// Public URL prefix under which `blob_storage_path` is served.
    /// Env: `BLOB_BASE_URL`
    /// Default: `http://localhost:8080/blobs`
    pub blob_base_url: String,

    /// Maximum upload size in bytes.
    /// Env: `MAX_BLOB_SIZE`
    /// Default: 50 MiB
    pub max_blob_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            blob_storage_path: PathBuf::from("./blobs"),
            blob_base_url: "http://localhost:8080/blobs".to_string(),
            max_blob_size: DEFAULT_MAX_BLOB_SIZE,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = get("DATABASE_PATH").filter(|p| !p.is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(path) = get("BLOB_STORAGE_PATH").filter(|p| !p.is_empty()) {
            config.blob_storage_path = PathBuf::from(path);
        }

        if let Some(url) = get("BLOB_BASE_URL").filter(|u| !u.is_empty()) {
            config.blob_base_url = url;
        }

        if let Some(val) = get("MAX_BLOB_SIZE") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.max_blob_size = n,
                _ => tracing::warn!(value = %val, "Invalid MAX_BLOB_SIZE, using default"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.database_path.is_none());
        assert_eq!(config.blob_storage_path, PathBuf::from("./blobs"));
        assert_eq!(config.max_blob_size, 50 * 1024 * 1024);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DATABASE_PATH", "/tmp/g.db"),
            ("BLOB_BASE_URL", "https://cdn.example.com"),
            ("MAX_BLOB_SIZE", "1024"),
        ]));
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/g.db")));
        assert_eq!(config.blob_base_url, "https://cdn.example.com");
        assert_eq!(config.max_blob_size, 1024);
    }

    #[test]
    fn test_invalid_size_keeps_default() {
        let config = ClientConfig::from_lookup(lookup(&[("MAX_BLOB_SIZE", "lots")]));
        assert_eq!(config.max_blob_size, DEFAULT_MAX_BLOB_SIZE);
    }
}
