//! v001 -- Initial schema creation.
//!
//! Creates the single `documents` table that backs every collection.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    collection  TEXT NOT NULL,
    id          TEXT NOT NULL,
    body        TEXT NOT NULL,               -- JSON object field set
    updated_at  TEXT NOT NULL,               -- RFC-3339
    PRIMARY KEY (collection, id)
);
"#;

/// Apply the initial schema.
pub fn up(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(UP_SQL)
}
