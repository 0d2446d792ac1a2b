//! The blob-store collaborator.
//!
//! A blob store accepts a byte payload under a relative path and returns a
//! URL from which the payload can be retrieved once the upload completed.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::error::{Result, StoreError};

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` at `path` and return its retrieval URL.
    async fn upload(&self, path: &str, data: &[u8]) -> Result<String>;

    /// Read back the payload stored at `path`.
    async fn download(&self, path: &str) -> Result<Vec<u8>>;
}

pub type SharedBlobStore = Arc<dyn BlobStore>;

/// Resolve `relative` under `base`, rejecting anything that would escape it.
fn ensure_within(base: &Path, relative: &str) -> Result<PathBuf> {
    let mut resolved = base.to_path_buf();
    let mut pushed = false;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(c) => {
                resolved.push(c);
                pushed = true;
            }
            Component::CurDir => {}
            // RootDir, Prefix and ParentDir would all leave the base.
            _ => return Err(StoreError::PathTraversal(relative.to_string())),
        }
    }
    if !pushed {
        return Err(StoreError::InvalidInput("empty blob path".to_string()));
    }
    Ok(resolved)
}

/// Blob store writing payloads below a local directory, served elsewhere
/// under `base_url`.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    base_path: PathBuf,
    base_url: String,
    max_size: usize,
}

impl FsBlobStore {
    pub async fn new(base_path: PathBuf, base_url: &str, max_size: usize) -> Result<Self> {
        fs::create_dir_all(&base_path).await?;

        info!(path = %base_path.display(), "Blob store initialized");

        Ok(Self {
            base_path,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_size,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Public URL of `path`, each segment percent-encoded.
    fn url_for(&self, path: &str) -> String {
        let encoded: Vec<_> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(urlencoding::encode)
            .collect();
        format!("{}/{}", self.base_url, encoded.join("/"))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn upload(&self, path: &str, data: &[u8]) -> Result<String> {
        if data.is_empty() {
            return Err(StoreError::InvalidInput("empty blob".to_string()));
        }
        if data.len() > self.max_size {
            return Err(StoreError::BlobTooLarge {
                size: data.len(),
                max: self.max_size,
            });
        }

        let target = ensure_within(&self.base_path, path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&target, data).await?;

        debug!(path, size = data.len(), "Stored blob");
        Ok(self.url_for(path))
    }

    async fn download(&self, path: &str) -> Result<Vec<u8>> {
        let target = ensure_within(&self.base_path, path)?;
        match fs::read(&target).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::not_found("blobs", path))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn test_store() -> (FsBlobStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(
            dir.path().to_path_buf(),
            "https://cdn.example.com/blobs/",
            1024,
        )
        .await
        .unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_upload_returns_url_and_persists() {
        let (store, _dir) = test_store().await;

        let url = store
            .upload("uploads/1700000000000_manual.pdf", b"%PDF-1.4")
            .await
            .unwrap();
        assert_eq!(
            url,
            "https://cdn.example.com/blobs/uploads/1700000000000_manual.pdf"
        );

        let data = store
            .download("uploads/1700000000000_manual.pdf")
            .await
            .unwrap();
        assert_eq!(data, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_url_segments_are_percent_encoded() {
        let (store, dir) = test_store().await;

        let url = store
            .upload("uploads/1700000000000_pump manual#2.pdf", b"%PDF-1.4")
            .await
            .unwrap();
        assert_eq!(
            url,
            "https://cdn.example.com/blobs/uploads/1700000000000_pump%20manual%232.pdf"
        );
        assert!(dir
            .path()
            .join("uploads/1700000000000_pump manual#2.pdf")
            .exists());
    }

    #[tokio::test]
    async fn test_empty_blob_rejected() {
        let (store, _dir) = test_store().await;
        assert!(store.upload("uploads/a", b"").await.is_err());
    }

    #[tokio::test]
    async fn test_oversized_blob_rejected() {
        let (store, _dir) = test_store().await;
        let big = vec![0u8; 2048];
        assert!(matches!(
            store.upload("uploads/big", &big).await,
            Err(StoreError::BlobTooLarge { size: 2048, max: 1024 })
        ));
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let (store, _dir) = test_store().await;
        assert!(matches!(
            store.upload("../escape", b"x").await,
            Err(StoreError::PathTraversal(_))
        ));
        assert!(matches!(
            store.upload("/etc/passwd", b"x").await,
            Err(StoreError::PathTraversal(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_blob_not_found() {
        let (store, _dir) = test_store().await;
        assert!(matches!(
            store.download("uploads/missing").await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
