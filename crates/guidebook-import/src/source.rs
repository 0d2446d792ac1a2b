//! Where the legacy record array comes from.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::legacy::LegacyRecord;

#[async_trait]
pub trait LegacySource: Send + Sync {
    /// Fetch and parse the whole record array.
    async fn fetch(&self) -> Result<Vec<LegacyRecord>>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Legacy endpoint serving a JSON array over HTTP.
pub struct HttpLegacySource {
    client: reqwest::Client,
    url: String,
}

impl HttpLegacySource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl LegacySource for HttpLegacySource {
    async fn fetch(&self) -> Result<Vec<LegacyRecord>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        let records: Vec<LegacyRecord> = serde_json::from_slice(&body)?;

        info!(url = %self.url, records = records.len(), "Loaded legacy JSON");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Legacy export saved to a local JSON file.
pub struct FileLegacySource {
    path: PathBuf,
}

impl FileLegacySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl LegacySource for FileLegacySource {
    async fn fetch(&self) -> Result<Vec<LegacyRecord>> {
        let body = tokio::fs::read(&self.path).await?;
        let records: Vec<LegacyRecord> = serde_json::from_slice(&body)?;

        info!(path = %self.path.display(), records = records.len(), "Loaded legacy JSON");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
