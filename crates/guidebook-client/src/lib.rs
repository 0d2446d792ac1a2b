//! # guidebook-client
//!
//! Content-viewing side of Guidebook: loads the persisted category tree,
//! flattens it into a search index, answers substring queries grouped by
//! record kind, and resolves a clicked result into the view to open.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod search;

mod error;

pub use client::Client;
pub use config::ClientConfig;
pub use dispatch::{resolve, ClickAction};
pub use error::{ClientError, Result};
pub use search::{RecordKind, SearchCache, SearchIndex, SearchRecord, SearchResults};
