//! CRUD operations for [`Movie`] records.
//!
//! Every mutation returns the full post-mutation catalog so the caller can
//! re-render from one list, matching the replace-on-write contract.

use strange_shows_shared::types::Movie;

use crate::collection::KEY_MOVIES;
use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Fetch the full movie catalog, insertion order preserved.
    pub fn movies_get_all(&self) -> Result<Vec<Movie>> {
        self.read_collection(KEY_MOVIES)
    }

    /// Append a movie and persist the full catalog.
    ///
    /// The store does not enforce id uniqueness; callers must supply unique
    /// ids.
    pub fn movies_add(&self, movie: &Movie) -> Result<Vec<Movie>> {
        let mut movies = self.movies_get_all()?;
        movies.push(movie.clone());
        self.write_collection(KEY_MOVIES, &movies)?;
        tracing::debug!(movie_id = %movie.id, "movie added");
        Ok(movies)
    }

    /// Replace the movie whose id equals `movie.id`.
    ///
    /// When no id matches, the catalog is written back unchanged (silent
    /// no-op).
    pub fn movies_update(&self, movie: &Movie) -> Result<Vec<Movie>> {
        let mut movies = self.movies_get_all()?;
        for existing in &mut movies {
            if existing.id == movie.id {
                *existing = movie.clone();
            }
        }
        self.write_collection(KEY_MOVIES, &movies)?;
        Ok(movies)
    }

    /// Remove the movie with the given id. No-op if absent.
    pub fn movies_delete(&self, id: &str) -> Result<Vec<Movie>> {
        let mut movies = self.movies_get_all()?;
        movies.retain(|m| m.id != id);
        self.write_collection(KEY_MOVIES, &movies)?;
        Ok(movies)
    }
}
