//! v001 -- Initial schema creation.
//!
//! Creates the single `collections` table. Each row holds one namespaced
//! collection key and that collection's full JSON payload.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS collections (
    key     TEXT PRIMARY KEY NOT NULL,  -- namespaced collection key
    payload TEXT NOT NULL               -- full collection as a JSON array
);
"#;

/// Apply the version-1 schema.
pub fn up(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(UP_SQL)
}
