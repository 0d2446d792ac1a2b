//! The import run: fetch, classify and convert, group, upload.

use std::sync::Arc;

use guidebook_store::Catalog;
use tracing::info;

use crate::convert::convert;
use crate::error::Result;
use crate::group::{group_by_category, Group};
use crate::legacy::LegacyRecord;
use crate::source::LegacySource;
use crate::upload::{upload_groups, ImportSummary};

pub struct Importer {
    source: Arc<dyn LegacySource>,
    catalog: Catalog,
}

impl Importer {
    pub fn new(source: Arc<dyn LegacySource>, catalog: Catalog) -> Self {
        Self { source, catalog }
    }

    /// Run the whole import once.
    ///
    /// Returns an error only when the fetch fails, in which case nothing has
    /// been written.  Group write failures are reported in the summary.
    pub async fn run(&self) -> Result<ImportSummary> {
        info!(source = %self.source.describe(), "Starting legacy import");
        let records = self.source.fetch().await?;
        let record_count = records.len();

        info!("Grouping by category");
        let groups = prepare(&records);

        info!(groups = groups.len(), "Uploading groups");
        let reports = upload_groups(&self.catalog, groups).await;

        let summary = ImportSummary {
            records: record_count,
            groups: reports,
        };
        info!(
            records = summary.records,
            written = summary.written(),
            failed = summary.failed(),
            "Import complete"
        );
        Ok(summary)
    }
}

/// Classify, convert and group fetched records.  Pure; touches no store.
pub fn prepare(records: &[LegacyRecord]) -> Vec<Group> {
    group_by_category(
        records
            .iter()
            .map(|record| (record.category().to_string(), convert(record))),
    )
}
