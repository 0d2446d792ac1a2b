//! The client facade.
//!
//! [`Client`] owns the catalog handle, the blob store and the search cache.
//! It is the single writer of the cache: every call that changes the
//! category tree reloads it and swaps in a freshly built index.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, info};

use guidebook_store::constants::UPLOADS_PREFIX;
use guidebook_store::{
    Catalog, FileRef, FsBlobStore, MenuCategory, Notification, SharedBlobStore,
    SharedDocumentStore, SqliteDocumentStore, SubItem, VideoRef,
};

use crate::config::ClientConfig;
use crate::dispatch::{self, ClickAction};
use crate::error::{ClientError, Result};
use crate::search::{SearchCache, SearchRecord, SearchResults};

pub struct Client {
    catalog: Catalog,
    blobs: SharedBlobStore,
    cache: SearchCache,
    /// Serializes reloads so two rebuilds never race on the swap.
    reload_lock: Mutex<()>,
}

impl Client {
    pub fn new(docs: SharedDocumentStore, blobs: SharedBlobStore) -> Self {
        Self {
            catalog: Catalog::new(docs),
            blobs,
            cache: SearchCache::new(),
            reload_lock: Mutex::new(()),
        }
    }

    /// Open the SQLite document store and the filesystem blob store named by
    /// `config`, then load the tree.
    pub async fn open(config: &ClientConfig) -> Result<Self> {
        let docs = match &config.database_path {
            Some(path) => SqliteDocumentStore::open_at(path)?,
            None => SqliteDocumentStore::new()?,
        };
        let blobs = FsBlobStore::new(
            config.blob_storage_path.clone(),
            &config.blob_base_url,
            config.max_blob_size,
        )
        .await?;

        let client = Self::new(Arc::new(docs), Arc::new(blobs));
        client.reload().await?;
        Ok(client)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reload the category tree and rebuild the search index.  Returns the
    /// number of indexed records.  On failure the previous index stays in
    /// place.
    pub async fn reload(&self) -> Result<usize> {
        let _guard = self.reload_lock.lock().await;

        let tree = self.catalog.list_categories().await?;
        let records = self.cache.rebuild(&tree);

        info!(categories = tree.len(), records, "search index rebuilt");
        Ok(records)
    }

    pub fn search(&self, text: &str) -> SearchResults {
        self.cache.query(text)
    }

    /// Resolve a clicked result.  Records missing their target are logged
    /// and returned as errors.
    pub fn resolve(&self, record: &SearchRecord) -> Result<ClickAction> {
        dispatch::resolve(record).map_err(|e| {
            error!(kind = %record.kind(), error = %e, "cannot open search result");
            e
        })
    }

    /// Fetch a category for the detail view.
    pub async fn open_category(&self, id: &str) -> Result<MenuCategory> {
        Ok(self.catalog.get_category(id).await?)
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.catalog.list_notifications().await?)
    }

    // ------------------------------------------------------------------
    // Catalog management
    // ------------------------------------------------------------------

    pub async fn create_category(&self, title: &str) -> Result<String> {
        let id = self.catalog.create_category(title).await?;
        self.reload().await?;
        Ok(id)
    }

    pub async fn rename_category(&self, id: &str, title: &str) -> Result<()> {
        self.catalog.rename_category(id, title).await?;
        self.reload().await?;
        Ok(())
    }

    pub async fn delete_category(&self, id: &str) -> Result<bool> {
        let deleted = self.catalog.delete_category(id).await?;
        self.reload().await?;
        Ok(deleted)
    }

    pub async fn add_sub_item(&self, category_id: &str, item: SubItem) -> Result<()> {
        self.catalog.add_sub_item(category_id, item).await?;
        self.reload().await?;
        Ok(())
    }

    pub async fn add_video(&self, category_id: &str, video: VideoRef) -> Result<()> {
        self.catalog.add_video(category_id, video).await?;
        self.reload().await?;
        Ok(())
    }

    pub async fn remove_video(&self, category_id: &str, video_id: &str) -> Result<bool> {
        let removed = self.catalog.remove_video(category_id, video_id).await?;
        self.reload().await?;
        Ok(removed)
    }

    /// Upload a file to the blob store and attach it to a category.
    ///
    /// The blob lands at `uploads/<millis>_<file_name>`; the returned
    /// [`FileRef`] carries the URL the blob store handed back.
    pub async fn upload_file(
        &self,
        category_id: &str,
        file_name: &str,
        data: &[u8],
    ) -> Result<FileRef> {
        if file_name.trim().is_empty() || file_name.contains(['/', '\\']) {
            return Err(ClientError::InvalidInput(format!(
                "invalid file name: {file_name:?}"
            )));
        }

        // Fail before uploading if the category is gone.
        self.catalog.get_category(category_id).await?;

        let path = format!(
            "{UPLOADS_PREFIX}/{}_{file_name}",
            Utc::now().timestamp_millis()
        );
        let url = self.blobs.upload(&path, data).await?;

        let file = FileRef {
            title: file_name.to_string(),
            url,
        };
        self.catalog.add_file(category_id, file.clone()).await?;

        info!(category = category_id, url = %file.url, size = data.len(), "file uploaded");
        self.reload().await?;
        Ok(file)
    }

    pub async fn remove_file(&self, category_id: &str, url: &str) -> Result<bool> {
        let removed = self.catalog.remove_file(category_id, url).await?;
        self.reload().await?;
        Ok(removed)
    }
}
