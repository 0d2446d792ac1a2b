use std::sync::{Arc, PoisonError, RwLock};

use guidebook_store::MenuCategory;

use super::index::SearchIndex;
use super::query::SearchResults;

/// Holds the current [`SearchIndex`] snapshot.
///
/// Rebuilds happen off to the side and are swapped in with a single pointer
/// replacement, so readers only ever see a complete index.
#[derive(Debug, Default)]
pub struct SearchCache {
    current: RwLock<Arc<SearchIndex>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The index as of now.  Later rebuilds do not affect the returned
    /// snapshot.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        // The lock only guards an Arc swap, a poisoned lock still holds a
        // complete index.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, index: SearchIndex) {
        let index = Arc::new(index);
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = index;
    }

    /// Build an index from `tree` and swap it in.  Returns the record count.
    pub fn rebuild(&self, tree: &[MenuCategory]) -> usize {
        let index = SearchIndex::build(tree);
        let len = index.len();
        self.replace(index);
        len
    }

    pub fn query(&self, text: &str) -> SearchResults {
        self.snapshot().query(text)
    }
}
