//! Posting and listing movie reviews.

use uuid::Uuid;

use strange_shows_shared::types::{Movie, Review};
use strange_shows_store::{Database, StoreError};

/// Fetch the review feed, most recent first.
pub async fn load_reviews(db: &Database) -> Result<Vec<Review>, StoreError> {
    db.reviews_get_all()
}

/// Post a review for a movie and return the updated feed.
///
/// The movie's title and image are denormalized into the review so the feed
/// renders without a catalog lookup. The rating is clamped to the 1-5 star
/// scale; likes start at zero.
pub async fn post_review(
    db: &Database,
    movie: &Movie,
    username: &str,
    rating: u8,
    comment: String,
) -> Result<Vec<Review>, StoreError> {
    let review = Review {
        id: Uuid::new_v4().to_string(),
        movie_id: movie.id.clone(),
        movie_title: movie.title.clone(),
        movie_image: Some(movie.image.clone()),
        username: username.to_string(),
        rating: rating.clamp(1, 5),
        comment,
        date: "JUST NOW".to_string(),
        likes: 0,
    };

    db.reviews_add(&review)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn post_review_prepends_and_denormalizes() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        let movies = db.movies_get_all().unwrap();
        let movie = &movies[0];

        let feed = post_review(&db, movie, "alice", 9, "Too many stars.".into())
            .await
            .unwrap();

        let posted = &feed[0];
        assert_eq!(posted.movie_id, movie.id);
        assert_eq!(posted.movie_title, movie.title);
        assert_eq!(posted.rating, 5, "rating is clamped to the star scale");
        assert_eq!(posted.likes, 0);
        assert_eq!(posted.date, "JUST NOW");

        let reloaded = load_reviews(&db).await.unwrap();
        assert_eq!(reloaded[0].id, posted.id);
    }
}
