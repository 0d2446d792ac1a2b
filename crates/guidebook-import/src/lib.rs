//! # guidebook-import
//!
//! One-shot import of the legacy flat record set into the catalog.
//!
//! The run is strictly sequential: fetch the flat array from a
//! [`LegacySource`], classify and convert every record, group the results
//! by category name and sort each group, then write each group to the
//! document store independently.  A fetch failure aborts before anything
//! is written; a failed group write is reported in the [`ImportSummary`]
//! and the remaining groups are still written.

pub mod classify;
pub mod config;
pub mod convert;
pub mod group;
pub mod legacy;
pub mod pipeline;
pub mod source;
pub mod upload;

mod error;

pub use classify::classify;
pub use config::ImportConfig;
pub use convert::{convert, ConvertedItem, Payload};
pub use error::{ImportError, Result};
pub use group::{group_by_category, Destination, Group};
pub use legacy::LegacyRecord;
pub use pipeline::Importer;
pub use source::{FileLegacySource, HttpLegacySource, LegacySource};
pub use upload::{GroupReport, GroupStatus, ImportSummary, WriteFailure, Written};
