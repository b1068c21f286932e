//! Read/append access for [`Review`] records.
//!
//! The review feed is append-only from the store's point of view: there is
//! no update or delete. New reviews are prepended so the feed reads
//! most-recent-first without sorting.

use strange_shows_shared::types::Review;

use crate::collection::KEY_REVIEWS;
use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Fetch the review feed, most recent first.
    pub fn reviews_get_all(&self) -> Result<Vec<Review>> {
        self.read_collection(KEY_REVIEWS)
    }

    /// Prepend a review and persist the full feed.
    pub fn reviews_add(&self, review: &Review) -> Result<Vec<Review>> {
        let mut reviews = self.reviews_get_all()?;
        reviews.insert(0, review.clone());
        self.write_collection(KEY_REVIEWS, &reviews)?;
        tracing::debug!(review_id = %review.id, movie_id = %review.movie_id, "review posted");
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review(id: &str) -> Review {
        Review {
            id: id.to_string(),
            movie_id: "m1".into(),
            movie_title: "THE GOO FROM SECTOR 7".into(),
            movie_image: None,
            username: "tester".into(),
            rating: 4,
            comment: "Solid goo.".into(),
            date: "JUST NOW".into(),
            likes: 0,
        }
    }

    #[test]
    fn add_prepends_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        db.reviews_add(&sample_review("r-a")).unwrap();
        let reviews = db.reviews_add(&sample_review("r-b")).unwrap();

        assert_eq!(reviews[0].id, "r-b");
        assert_eq!(reviews[1].id, "r-a");
    }
}
