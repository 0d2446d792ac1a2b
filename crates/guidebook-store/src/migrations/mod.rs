//! Schema migrations for the document database.
//!
//! The catalog keeps every collection in one `documents` table, so schema
//! changes are rare.  Each entry of [`MIGRATIONS`] raises `user_version` to
//! its own number; entries at or below the stored version are skipped, so
//! reopening an existing catalog database is a no-op.

pub mod v001_initial;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

type Migration = (u32, &'static str, fn(&Connection) -> rusqlite::Result<()>);

/// Ordered by version.
const MIGRATIONS: &[Migration] = &[(1, "v001_initial", v001_initial::up)];

/// Schema version of a fully migrated catalog database.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |(version, _, _)| *version)
}

/// Bring the open connection up to [`latest_version`].
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|(version, _, _)| *version > current)
        .collect();
    if pending.is_empty() {
        tracing::debug!(version = current, "catalog schema up to date");
        return Ok(());
    }

    for (version, name, up) in pending {
        tracing::info!(from = current, to = version, migration = name, "migrating catalog schema");
        up(conn).map_err(|e| StoreError::Migration(format!("{name}: {e}")))?;
        conn.pragma_update(None, "user_version", version)?;
    }

    Ok(())
}
