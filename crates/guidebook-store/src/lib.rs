//! # guidebook-store
//!
//! Persistence collaborators for the Guidebook catalog.
//!
//! The crate defines the two external stores the rest of the workspace talks
//! to: a [`DocumentStore`] (named collections of JSON documents) and a
//! [`BlobStore`] (byte payloads addressed by path, retrievable by URL).  On
//! top of the document store, [`Catalog`] provides typed CRUD helpers for
//! every domain model.

pub mod blob;
pub mod calendar;
pub mod catalog;
pub mod categories;
pub mod constants;
pub mod document;
pub mod memory;
pub mod migrations;
pub mod models;
pub mod notifications;
pub mod sqlite;

mod error;

pub use blob::{BlobStore, FsBlobStore, SharedBlobStore};
pub use catalog::Catalog;
pub use document::{Document, DocumentStore, Fields, SharedDocumentStore};
pub use error::{Result, StoreError};
pub use memory::MemoryDocumentStore;
pub use models::*;
pub use sqlite::SqliteDocumentStore;
