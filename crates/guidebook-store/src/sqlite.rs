//! SQLite-backed [`DocumentStore`].
//!
//! The [`SqliteDocumentStore`] owns a [`rusqlite::Connection`] and guarantees
//! that migrations are run before any other operation.  Each document is one
//! row of the `documents` table; its field set is stored as a JSON object so
//! array-valued fields keep their order.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

use crate::constants::DATABASE_FILE_NAME;
use crate::document::{new_document_id, Document, DocumentStore, Fields};
use crate::error::{Result, StoreError};
use crate::migrations;

pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/guidebook/guidebook.db`
    /// - macOS:   `~/Library/Application Support/com.guidebook.guidebook/guidebook.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\guidebook\guidebook\data\guidebook.db`
    pub fn new() -> Result<Self> {
        let db_path = default_database_path()?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "opening document database");

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrations::run_migrations(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn().ok()?.path().map(PathBuf::from)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

/// Platform data directory location of the document database.
pub fn default_database_path() -> Result<PathBuf> {
    let project_dirs =
        ProjectDirs::from("com", "guidebook", "guidebook").ok_or(StoreError::NoDataDir)?;
    Ok(project_dirs.data_dir().join(DATABASE_FILE_NAME))
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn add(&self, collection: &str, fields: Fields) -> Result<String> {
        let id = new_document_id();
        let body = serde_json::to_string(&fields)?;
        self.conn()?.execute(
            "INSERT INTO documents (collection, id, body, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![collection, id, body, Utc::now().to_rfc3339()],
        )?;
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let body = serde_json::to_string(&fields)?;
        self.conn()?.execute(
            "INSERT INTO documents (collection, id, body, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (collection, id)
             DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
            params![collection, id, body, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let conn = self.conn()?;
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
                params![collection, id],
                |row| row.get(0),
            )
            .optional()?;

        body.map(|body| -> Result<Document> {
            Ok(Document {
                id: id.to_string(),
                fields: serde_json::from_str(&body)?,
            })
        })
        .transpose()
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let body: String = tx
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
                params![collection, id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        let mut merged: Fields = serde_json::from_str(&body)?;
        merged.extend(fields);

        tx.execute(
            "UPDATE documents SET body = ?3, updated_at = ?4
             WHERE collection = ?1 AND id = ?2",
            params![
                collection,
                id,
                serde_json::to_string(&merged)?,
                Utc::now().to_rfc3339()
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let affected = self.conn()?.execute(
            "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
            params![collection, id],
        )?;
        Ok(affected > 0)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, body FROM documents
             WHERE collection = ?1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map(params![collection], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut docs = Vec::new();
        for row in rows {
            let (id, body) = row?;
            docs.push(Document {
                id,
                fields: serde_json::from_str(&body)?,
            });
        }
        Ok(docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let store = SqliteDocumentStore::open_at(&path).expect("should open");
        assert!(store.path().is_some());
    }

    #[tokio::test]
    async fn documents_survive_reopen_with_array_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let store = SqliteDocumentStore::open_at(&path).unwrap();
            store
                .set(
                    "menus",
                    "Pumps",
                    fields(json!({"title": "Pumps", "items": ["c", "a", "b"]})),
                )
                .await
                .unwrap();
        }

        let store = SqliteDocumentStore::open_at(&path).unwrap();
        let doc = store.get("menus", "Pumps").await.unwrap().unwrap();
        assert_eq!(doc.fields["items"], json!(["c", "a", "b"]));
    }

    #[tokio::test]
    async fn set_update_delete_cycle() {
        let store = SqliteDocumentStore::open_in_memory().unwrap();

        store
            .set("menus", "A", fields(json!({"title": "A", "files": []})))
            .await
            .unwrap();
        store
            .set("menus", "A", fields(json!({"title": "A", "videos": []})))
            .await
            .unwrap();
        store
            .update("menus", "A", fields(json!({"title": "Renamed"})))
            .await
            .unwrap();

        let doc = store.get("menus", "A").await.unwrap().unwrap();
        assert_eq!(doc.fields, fields(json!({"title": "Renamed", "videos": []})));

        assert!(store.delete("menus", "A").await.unwrap());
        assert!(store.get("menus", "A").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_missing_document_is_not_found() {
        let store = SqliteDocumentStore::open_in_memory().unwrap();
        let result = store.update("menus", "nope", Fields::new()).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn list_is_scoped_to_collection() {
        let store = SqliteDocumentStore::open_in_memory().unwrap();
        store.add("notifications", Fields::new()).await.unwrap();
        store.add("notifications", Fields::new()).await.unwrap();
        store.set("menus", "m", Fields::new()).await.unwrap();

        assert_eq!(store.list("notifications").await.unwrap().len(), 2);
        assert_eq!(store.list("menus").await.unwrap().len(), 1);
        assert!(store.list("calendar").await.unwrap().is_empty());
    }
}
