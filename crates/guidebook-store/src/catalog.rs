//! Typed access to the catalog collections.
//!
//! [`Catalog`] wraps any [`DocumentStore`] and exposes CRUD helpers per
//! domain model.  The helpers are split across `categories.rs`,
//! `notifications.rs` and `calendar.rs`, each adding an `impl Catalog` block.
//!
//! [`DocumentStore`]: crate::DocumentStore

use crate::document::SharedDocumentStore;

#[derive(Clone)]
pub struct Catalog {
    docs: SharedDocumentStore,
}

impl Catalog {
    pub fn new(docs: SharedDocumentStore) -> Self {
        Self { docs }
    }

    /// The underlying document store.
    pub fn documents(&self) -> &SharedDocumentStore {
        &self.docs
    }
}
