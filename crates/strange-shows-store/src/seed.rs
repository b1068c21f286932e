//! Built-in demo data and the idempotent seeding routine.
//!
//! Seeding runs on every open, after migrations. A catalog collection is
//! populated only when its key has never been written, so an explicitly
//! emptied collection stays empty. The administrator account is appended to
//! the users collection only when no account with that username exists.

use strange_shows_shared::constants::{ADMIN_CREDITS, ADMIN_LEVEL, ADMIN_USERNAME};
use strange_shows_shared::types::{FoodItem, Location, LocationStatus, Movie, Review, User};

use crate::collection::{KEY_FOOD, KEY_LOCATIONS, KEY_MOVIES, KEY_REVIEWS};
use crate::database::Database;
use crate::error::Result;

/// Seed every collection that has never been initialized.
///
/// Called automatically at the end of [`Database::open_at`]; safe to call
/// again at any time.
///
/// [`Database::open_at`]: crate::database::Database::open_at
pub fn run(db: &Database) -> Result<()> {
    if !db.collection_exists(KEY_MOVIES)? {
        db.write_collection(KEY_MOVIES, &initial_movies())?;
        tracing::info!("seeded movie catalog");
    }

    if !db.collection_exists(KEY_LOCATIONS)? {
        db.write_collection(KEY_LOCATIONS, &initial_locations())?;
        tracing::info!("seeded venue list");
    }

    if !db.collection_exists(KEY_FOOD)? {
        db.write_collection(KEY_FOOD, &initial_food())?;
        tracing::info!("seeded canteen items");
    }

    if !db.collection_exists(KEY_REVIEWS)? {
        db.write_collection(KEY_REVIEWS, &initial_reviews())?;
        tracing::info!("seeded review feed");
    }

    // The users collection is handled record-wise: only the admin account is
    // seeded, and only when it is missing. No credential is stored with it.
    if db.find_user(ADMIN_USERNAME)?.is_none() {
        db.insert_user(&admin_user())?;
        tracing::info!(username = ADMIN_USERNAME, "seeded administrator account");
    }

    Ok(())
}

/// The seeded administrator account.
fn admin_user() -> User {
    User {
        username: ADMIN_USERNAME.to_string(),
        avatar: None,
        credits: ADMIN_CREDITS,
        level: ADMIN_LEVEL,
        is_admin: true,
    }
}

fn initial_locations() -> Vec<Location> {
    vec![
        Location {
            id: "l1".into(),
            name: "Downtown Retroplex".into(),
            address: "101 Neon Ave".into(),
            coordinates: "C-3".into(),
            status: LocationStatus::Open,
            capacity: 98,
        },
        Location {
            id: "l2".into(),
            name: "Sector 7 Underground".into(),
            address: "Sector 7, Level B".into(),
            coordinates: "E-5".into(),
            status: LocationStatus::Maintenance,
            capacity: 0,
        },
        Location {
            id: "l3".into(),
            name: "Orbital Station Alpha".into(),
            address: "Low Earth Orbit".into(),
            coordinates: "A-1".into(),
            status: LocationStatus::Open,
            capacity: 45,
        },
    ]
}

fn initial_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: "m1".into(),
            title: "THE GOO FROM SECTOR 7".into(),
            tagline: "It hungers for plasma.".into(),
            description: "A scientific experiment goes horribly wrong when Sector 7 \
                          scientists try to synthesize a new flavor of soda. Now, the \
                          carbonation is alive, and it is angry."
                .into(),
            rating: "R".into(),
            duration: "1h 34m".into(),
            genre: vec!["Sci-Fi".into(), "Horror".into()],
            image: "https://picsum.photos/400/600?random=1".into(),
            price: 12.0,
            showtimes: vec!["18:00".into(), "20:30".into(), "23:00".into()],
            location_ids: vec!["l1".into(), "l2".into()],
        },
        Movie {
            id: "m2".into(),
            title: "MIDNIGHT NEON DINER".into(),
            tagline: "Coffee. Pie. Murder.".into(),
            description: "In a city that never sleeps, a lonely detective finds solace \
                          in a 24-hour diner run by androids. But when the pie starts \
                          tasting like motor oil, he knows something is up."
                .into(),
            rating: "PG-13".into(),
            duration: "2h 10m".into(),
            genre: vec!["Noir".into(), "Cyberpunk".into()],
            image: "https://picsum.photos/400/600?random=2".into(),
            price: 14.0,
            showtimes: vec!["19:15".into(), "21:45".into()],
            location_ids: vec!["l1".into(), "l3".into()],
        },
        Movie {
            id: "m3".into(),
            title: "ATTACK OF THE POLYGONS".into(),
            tagline: "Low poly. High terror.".into(),
            description: "They came from the 64-bit dimension. Sharp edges, flat \
                          shading, and a thirst for high-resolution textures. Can \
                          humanity upgrade in time?"
                .into(),
            rating: "PG".into(),
            duration: "1h 45m".into(),
            genre: vec!["Adventure".into(), "Comedy".into()],
            image: "https://picsum.photos/400/600?random=3".into(),
            price: 10.0,
            showtimes: vec!["14:00".into(), "16:30".into(), "19:00".into()],
            location_ids: vec!["l1".into(), "l2".into(), "l3".into()],
        },
        Movie {
            id: "m4".into(),
            title: "VAMPIRE SYNTH 1999".into(),
            tagline: "Bite the beat.".into(),
            description: "A rock band of vampires tours the underground club scene of \
                          1999 Tokyo. They don't just want your blood, they want your \
                          applause."
                .into(),
            rating: "R".into(),
            duration: "1h 55m".into(),
            genre: vec!["Musical".into(), "Horror".into()],
            image: "https://picsum.photos/400/600?random=4".into(),
            price: 15.0,
            showtimes: vec!["22:00".into(), "00:30".into()],
            location_ids: vec!["l3".into()],
        },
    ]
}

fn initial_food() -> Vec<FoodItem> {
    vec![
        FoodItem {
            id: "f1".into(),
            name: "NEON POPCORN".into(),
            price: 8.0,
            description: "Glows in the dark. Radioactive butter flavor.".into(),
            image: "https://images.unsplash.com/photo-1578849278619-e73505e9610f?auto=format&fit=crop&q=80&w=400".into(),
            tags: vec!["POPULAR".into(), "VEGAN?".into()],
            is_out_of_stock: false,
        },
        FoodItem {
            id: "f2".into(),
            name: "VOID SODA".into(),
            price: 5.0,
            description: "Tastes like static. Zero calories, zero soul.".into(),
            image: "https://images.unsplash.com/photo-1622483767028-3f66f32aef97?auto=format&fit=crop&q=80&w=400".into(),
            tags: vec!["SUGAR-FREE".into()],
            is_out_of_stock: false,
        },
        FoodItem {
            id: "f3".into(),
            name: "CYBER PIZZA".into(),
            price: 12.0,
            description: "Holographic pepperoni. 100% Polygon cheese.".into(),
            image: "https://images.unsplash.com/photo-1513104890138-7c749659a591?auto=format&fit=crop&q=80&w=400".into(),
            tags: vec!["HOT".into()],
            is_out_of_stock: false,
        },
        FoodItem {
            id: "f4".into(),
            name: "DATA CHIPS".into(),
            price: 6.0,
            description: "Crunchy binary bites. May improve coding skills.".into(),
            image: "https://images.unsplash.com/photo-1566478919030-26d9c286094d?auto=format&fit=crop&q=80&w=400".into(),
            tags: vec!["CRUNCHY".into()],
            is_out_of_stock: false,
        },
    ]
}

fn initial_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".into(),
            movie_id: "m1".into(),
            movie_title: "THE GOO FROM SECTOR 7".into(),
            movie_image: Some("https://picsum.photos/400/600?random=1".into()),
            username: "NeonDrifter88".into(),
            rating: 5,
            comment: "Absolutely visceral. The texture of the goo was mind-blowing.".into(),
            date: "2 HOURS AGO".into(),
            likes: 24,
        },
        Review {
            id: "2".into(),
            movie_id: "m2".into(),
            movie_title: "MIDNIGHT NEON DINER".into(),
            movie_image: Some("https://picsum.photos/400/600?random=2".into()),
            username: "PixelQueen".into(),
            rating: 4,
            comment: "A bit slow in the second act, but the aesthetic is purely divine.".into(),
            date: "YESTERDAY".into(),
            likes: 12,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_carries_full_demo_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        assert_eq!(db.movies_get_all().unwrap().len(), 4);
        assert_eq!(db.locations_get_all().unwrap().len(), 3);
        assert_eq!(db.food_get_all().unwrap().len(), 4);
        assert_eq!(db.reviews_get_all().unwrap().len(), 2);
        assert_eq!(db.users_get_all().unwrap().len(), 1);
    }

    #[test]
    fn emptied_collection_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let db = Database::open_at(&path).unwrap();
            for movie in db.movies_get_all().unwrap() {
                db.movies_delete(&movie.id).unwrap();
            }
        }

        let db = Database::open_at(&path).unwrap();
        assert!(db.movies_get_all().unwrap().is_empty());
    }

    #[test]
    fn seeded_movies_are_bookable() {
        let movies = initial_movies();
        assert!(movies.iter().all(|m| m.price > 0.0));
        assert!(movies.iter().all(|m| !m.showtimes.is_empty()));
    }
}
