//! Generic keyed-blob access for the five collections.
//!
//! Each collection is one row in the `collections` table: a namespaced key
//! and the full list serialized as a JSON array. Every mutation reads the
//! whole list, modifies it in memory, and writes the whole list back —
//! replace-on-write. Last write wins; the deployment is single-user.

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::error::Result;

/// Storage key for the movie catalog.
pub(crate) const KEY_MOVIES: &str = "strange_shows_movies";

/// Storage key for the venue list.
pub(crate) const KEY_LOCATIONS: &str = "strange_shows_locations";

/// Storage key for the canteen items.
pub(crate) const KEY_FOOD: &str = "strange_shows_food";

/// Storage key for the user accounts.
pub(crate) const KEY_USERS: &str = "strange_shows_users";

/// Storage key for the review feed.
pub(crate) const KEY_REVIEWS: &str = "strange_shows_reviews";

impl Database {
    /// Read a full collection, insertion order preserved.
    ///
    /// An absent key yields an empty list. A payload that no longer
    /// deserializes is logged and treated as absent rather than surfaced as
    /// an error, so a corrupt blob never propagates a parse fault.
    pub(crate) fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let payload: Option<String> = self
            .conn()
            .query_row(
                "SELECT payload FROM collections WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&payload) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt collection payload, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replace a full collection with the given list.
    pub(crate) fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let payload = serde_json::to_string(items)?;
        self.conn().execute(
            "INSERT INTO collections (key, payload) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload",
            params![key, payload],
        )?;
        Ok(())
    }

    /// Whether a collection key has ever been written.
    ///
    /// Seeding uses this to distinguish "never initialized" from "explicitly
    /// emptied": a deliberately empty collection must not be reseeded.
    pub(crate) fn collection_exists(&self, key: &str) -> Result<bool> {
        let count: i64 = self.conn().query_row(
            "SELECT COUNT(*) FROM collections WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use strange_shows_shared::types::Movie;

    use crate::database::Database;

    #[test]
    fn corrupt_payload_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        db.conn()
            .execute(
                "UPDATE collections SET payload = 'not json' WHERE key = 'strange_shows_movies'",
                [],
            )
            .unwrap();

        let movies: Vec<Movie> = db.read_collection(super::KEY_MOVIES).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn unknown_key_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        let items: Vec<Movie> = db.read_collection("strange_shows_nonexistent").unwrap();
        assert!(items.is_empty());
    }
}
