//! Client-side search over the category tree.
//!
//! [`SearchIndex::build`] flattens the tree into typed [`SearchRecord`]s,
//! [`SearchIndex::query`] matches titles by case-insensitive substring and
//! groups the hits by [`RecordKind`].  [`SearchCache`] holds the current
//! index and swaps in rebuilt ones whole.

mod cache;
mod index;
mod query;

pub use cache::SearchCache;
pub use index::{RecordKind, SearchIndex, SearchRecord, UNTITLED};
pub use query::SearchResults;
