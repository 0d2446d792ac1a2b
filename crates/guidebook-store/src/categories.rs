//! CRUD operations for [`MenuCategory`] records and their child entries.
//!
//! Every child mutation names its target category explicitly.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::catalog::Catalog;
use crate::constants::MENUS_COLLECTION;
use crate::document::{to_fields, Document, Fields};
use crate::error::{Result, StoreError};
use crate::models::{FileRef, MenuCategory, SubItem, VideoRef};

impl Catalog {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Create an empty category with a store-assigned id.
    pub async fn create_category(&self, title: &str) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::InvalidInput("category title is empty".into()));
        }

        let category = MenuCategory::new("", title);
        let id = self
            .documents()
            .add(MENUS_COLLECTION, to_fields(&category)?)
            .await?;

        debug!(id = %id, title, "created category");
        Ok(id)
    }

    /// Create or overwrite the category keyed by `category.id`.
    pub async fn put_category(&self, category: &MenuCategory) -> Result<()> {
        if category.id.is_empty() {
            return Err(StoreError::InvalidInput("category id is empty".into()));
        }
        self.documents()
            .set(MENUS_COLLECTION, &category.id, to_fields(category)?)
            .await
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub async fn get_category(&self, id: &str) -> Result<MenuCategory> {
        let doc = self
            .documents()
            .get(MENUS_COLLECTION, id)
            .await?
            .ok_or_else(|| StoreError::not_found(MENUS_COLLECTION, id))?;
        doc_to_category(doc)
    }

    /// All categories in store order.
    pub async fn list_categories(&self) -> Result<Vec<MenuCategory>> {
        self.documents()
            .list(MENUS_COLLECTION)
            .await?
            .into_iter()
            .map(doc_to_category)
            .collect()
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    pub async fn rename_category(&self, id: &str, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::InvalidInput("category title is empty".into()));
        }
        let mut fields = Fields::new();
        fields.insert("title".into(), Value::String(title.to_string()));
        self.documents().update(MENUS_COLLECTION, id, fields).await
    }

    /// Append a text block to the category.
    pub async fn add_sub_item(&self, id: &str, item: SubItem) -> Result<()> {
        let mut category = self.get_category(id).await?;
        category.items.push(item);
        self.replace_field(id, "items", &category.items).await
    }

    /// Append a video.  The video id must be non-empty and not yet present
    /// in the category.
    pub async fn add_video(&self, id: &str, video: VideoRef) -> Result<()> {
        if video.video_id.trim().is_empty() {
            return Err(StoreError::InvalidInput("video id is empty".into()));
        }
        let mut category = self.get_category(id).await?;
        if category.videos.iter().any(|v| v.video_id == video.video_id) {
            return Err(StoreError::InvalidInput(format!(
                "video {} already exists in category {id}",
                video.video_id
            )));
        }
        category.videos.push(video);
        self.replace_field(id, "videos", &category.videos).await
    }

    /// Remove the video with `video_id`.  Returns `true` if one was removed.
    pub async fn remove_video(&self, id: &str, video_id: &str) -> Result<bool> {
        let mut category = self.get_category(id).await?;
        let before = category.videos.len();
        category.videos.retain(|v| v.video_id != video_id);
        if category.videos.len() == before {
            return Ok(false);
        }
        self.replace_field(id, "videos", &category.videos).await?;
        Ok(true)
    }

    /// Append a file.  The URL must be non-empty and not yet present in the
    /// category.
    pub async fn add_file(&self, id: &str, file: FileRef) -> Result<()> {
        if file.url.trim().is_empty() {
            return Err(StoreError::InvalidInput("file url is empty".into()));
        }
        let mut category = self.get_category(id).await?;
        if category.files.iter().any(|f| f.url == file.url) {
            return Err(StoreError::InvalidInput(format!(
                "file {} already exists in category {id}",
                file.url
            )));
        }
        category.files.push(file);
        self.replace_field(id, "files", &category.files).await
    }

    /// Remove the file with `url`.  Returns `true` if one was removed.
    pub async fn remove_file(&self, id: &str, url: &str) -> Result<bool> {
        let mut category = self.get_category(id).await?;
        let before = category.files.len();
        category.files.retain(|f| f.url != url);
        if category.files.len() == before {
            return Ok(false);
        }
        self.replace_field(id, "files", &category.files).await?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete a category.  Returns `true` if it existed.
    pub async fn delete_category(&self, id: &str) -> Result<bool> {
        self.documents().delete(MENUS_COLLECTION, id).await
    }

    async fn replace_field<T: Serialize>(&self, id: &str, field: &str, values: &[T]) -> Result<()> {
        let mut fields = Fields::new();
        fields.insert(field.to_string(), serde_json::to_value(values)?);
        self.documents().update(MENUS_COLLECTION, id, fields).await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn doc_to_category(doc: Document) -> Result<MenuCategory> {
    let mut category: MenuCategory = doc.decode()?;
    category.id = doc.id;
    Ok(category)
}
