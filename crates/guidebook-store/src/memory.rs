//! In-memory [`DocumentStore`] used by tests and embedders that do not need
//! persistence.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{new_document_id, Document, DocumentStore, Fields};
use crate::error::{Result, StoreError};

type Collection = BTreeMap<String, Fields>;

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn add(&self, collection: &str, fields: Fields) -> Result<String> {
        let id = new_document_id();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_string(),
                fields: fields.clone(),
            }))
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let mut collections = self.collections.write().await;
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        existing.extend(fields);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .map_or(false, |docs| docs.remove(id).is_some()))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn add_assigns_distinct_ids() {
        let store = MemoryDocumentStore::new();
        let a = store.add("notes", fields(json!({"n": 1}))).await.unwrap();
        let b = store.add("notes", fields(json!({"n": 2}))).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.count("notes").await, 2);
    }

    #[tokio::test]
    async fn set_overwrites_whole_document() {
        let store = MemoryDocumentStore::new();
        store
            .set("menus", "A", fields(json!({"title": "A", "videos": []})))
            .await
            .unwrap();
        store
            .set("menus", "A", fields(json!({"title": "A2"})))
            .await
            .unwrap();

        let doc = store.get("menus", "A").await.unwrap().unwrap();
        assert_eq!(doc.fields, fields(json!({"title": "A2"})));
    }

    #[tokio::test]
    async fn update_merges_and_requires_existing_document() {
        let store = MemoryDocumentStore::new();
        store
            .set("menus", "A", fields(json!({"title": "A", "items": [1, 2]})))
            .await
            .unwrap();
        store
            .update("menus", "A", fields(json!({"title": "B"})))
            .await
            .unwrap();

        let doc = store.get("menus", "A").await.unwrap().unwrap();
        assert_eq!(doc.fields, fields(json!({"title": "B", "items": [1, 2]})));

        let missing = store.update("menus", "Z", Fields::new()).await;
        assert!(matches!(missing, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id_and_delete_reports_presence() {
        let store = MemoryDocumentStore::new();
        for id in ["b", "c", "a"] {
            store.set("menus", id, Fields::new()).await.unwrap();
        }
        let ids: Vec<_> = store
            .list("menus")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);

        assert!(store.delete("menus", "a").await.unwrap());
        assert!(!store.delete("menus", "a").await.unwrap());
        assert!(store.list("empty").await.unwrap().is_empty());
    }
}
