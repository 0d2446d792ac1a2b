//! The document-store collaborator.
//!
//! A document store holds named collections of documents.  Each document has
//! an opaque string id and a JSON object field set; array-valued fields keep
//! their insertion order.  Every individual write is atomic, nothing spans
//! more than one document.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};

/// The field set of a single document.
pub type Fields = Map<String, Value>;

/// A document read back from a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    /// Decode the field set into a typed model.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.fields.clone()))?)
    }
}

/// Encode a model into a document field set.
///
/// Fails with [`StoreError::InvalidInput`] if the model does not serialize to
/// a JSON object.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(StoreError::InvalidInput(format!(
            "expected an object field set, got {other}"
        ))),
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document with a store-assigned id and return that id.
    async fn add(&self, collection: &str, fields: Fields) -> Result<String>;

    /// Create or fully overwrite the document `id`.
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<()>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Merge `fields` into an existing document, replacing top-level keys.
    /// Fails with [`StoreError::NotFound`] when the document is absent.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()>;

    /// Returns `true` if a document was deleted.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool>;

    /// All documents of a collection, ordered by id.
    async fn list(&self, collection: &str) -> Result<Vec<Document>>;
}

pub type SharedDocumentStore = Arc<dyn DocumentStore>;

/// Generate an id for [`DocumentStore::add`].
pub(crate) fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoRef;

    #[test]
    fn fields_round_trip_through_decode() {
        let video = VideoRef {
            title: "Pump install".into(),
            video_id: "abc123".into(),
        };
        let doc = Document {
            id: "x".into(),
            fields: to_fields(&video).unwrap(),
        };
        assert_eq!(doc.decode::<VideoRef>().unwrap(), video);
    }

    #[test]
    fn non_object_values_are_rejected() {
        assert!(matches!(
            to_fields(&vec![1, 2, 3]),
            Err(StoreError::InvalidInput(_))
        ));
    }
}
