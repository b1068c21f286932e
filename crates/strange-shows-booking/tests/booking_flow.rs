//! End-to-end walk through the visitor flow: open the database, load the
//! catalog, filter by venue, pick a movie, select seats, confirm, reset.

use strange_shows_booking::catalog::{load_catalog, movies_at};
use strange_shows_booking::seats::SeatMap;
use strange_shows_booking::{auth, BookingFlow};
use strange_shows_shared::types::BookingStep;
use strange_shows_store::Database;

#[tokio::test]
async fn browse_select_confirm_reset() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open_at(&dir.path().join("test.db")).unwrap();

    let visitor = auth::register(&db, "visitor_7").await.unwrap();
    assert_eq!(visitor.credits, 100);

    let catalog = load_catalog(&db).await.unwrap();
    let venue = catalog.selected_location_id.clone().expect("seeded venue");

    let offered = movies_at(&catalog.movies, &venue);
    assert!(!offered.is_empty());

    // The Goo screens downtown at 12 credits a seat.
    let movie = offered
        .iter()
        .find(|m| m.id == "m1")
        .expect("m1 screens at l1");

    let mut flow = BookingFlow::new();
    flow.select_movie((*movie).clone());
    assert_eq!(flow.step(), BookingStep::SelectingSeats);
    assert_eq!(flow.showtime(), Some("18:00"));

    let mut seats = SeatMap::new();
    seats.toggle("A1");
    seats.toggle("A2");
    assert_eq!(seats.total(movie.price), 24.0);

    let ticket = flow
        .confirm_seats(&seats.selected().to_vec())
        .expect("ticket")
        .clone();

    assert!(ticket.id.starts_with("TKT-"));
    assert_eq!(ticket.id.len(), "TKT-".len() + 9);
    assert_eq!(ticket.movie_id, "m1");
    assert_eq!(ticket.seats, ["A1", "A2"]);
    assert_eq!(ticket.total, 24.0);
    assert_eq!(flow.step(), BookingStep::Confirmation);

    // Tickets are ephemeral: nothing is persisted, reset drops everything.
    flow.reset();
    assert_eq!(flow.step(), BookingStep::Browsing);
    assert!(flow.ticket().is_none());
}

#[tokio::test]
async fn closed_venue_still_lists_its_movies() {
    // Venue status gates the UI, not the filter: the maintenance venue l2
    // still has movies associated with it.
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open_at(&dir.path().join("test.db")).unwrap();

    let catalog = load_catalog(&db).await.unwrap();
    let at_l2: Vec<&str> = movies_at(&catalog.movies, "l2")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(at_l2, ["m1", "m3"]);
}
