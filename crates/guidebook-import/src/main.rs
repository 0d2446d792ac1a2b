//! # guidebook-import
//!
//! Operator tool that copies the legacy flat record set into the catalog.
//! Configured entirely through environment variables (see [`ImportConfig`]).
//! Exits non-zero when the fetch fails or any group could not be written.

use std::sync::Arc;

use anyhow::bail;
use guidebook_import::{
    FileLegacySource, GroupStatus, HttpLegacySource, ImportConfig, Importer, LegacySource,
};
use guidebook_store::{Catalog, SqliteDocumentStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,guidebook_import=debug,guidebook_store=info")
        }))
        .init();

    info!("Starting guidebook import v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ImportConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Open the document store and pick the source
    // -----------------------------------------------------------------------
    let store = match &config.database_path {
        Some(path) => SqliteDocumentStore::open_at(path)?,
        None => SqliteDocumentStore::new()?,
    };
    info!(path = ?store.path(), "Opened document store");
    let catalog = Catalog::new(Arc::new(store));

    let source: Arc<dyn LegacySource> = match &config.legacy_source_file {
        Some(path) => Arc::new(FileLegacySource::new(path.clone())),
        None => Arc::new(HttpLegacySource::new(
            &config.legacy_source_url,
            config.fetch_timeout,
        )?),
    };

    // -----------------------------------------------------------------------
    // 4. Run
    // -----------------------------------------------------------------------
    let summary = Importer::new(source, catalog).run().await?;

    for report in &summary.groups {
        match &report.status {
            GroupStatus::Written(written) => {
                info!(group = %report.name, items = report.items, ?written, "Group written")
            }
            GroupStatus::Failed { error, written } => {
                error!(
                    group = %report.name,
                    items = report.items,
                    written,
                    %error,
                    "Group failed"
                )
            }
        }
    }

    if summary.failed() > 0 {
        bail!(
            "{} of {} groups failed to import",
            summary.failed(),
            summary.groups.len()
        );
    }

    info!(
        records = summary.records,
        groups = summary.groups.len(),
        notifications = summary.notifications_written(),
        "Import finished"
    );
    Ok(())
}
