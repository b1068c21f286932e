//! Catalog loading and venue filtering for the browsing screen.

use serde::Serialize;

use strange_shows_shared::types::{FoodItem, Location, Movie};
use strange_shows_store::{Database, StoreError};

/// Everything the browsing screen needs, loaded in one pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub locations: Vec<Location>,
    pub food: Vec<FoodItem>,
    /// Venue preselected for the browsing filter: the first location, when
    /// any exist.
    pub selected_location_id: Option<String>,
}

/// Load the three browsing collections and preselect the first venue.
pub async fn load_catalog(db: &Database) -> Result<Catalog, StoreError> {
    let movies = db.movies_get_all()?;
    let locations = db.locations_get_all()?;
    let food = db.food_get_all()?;

    let selected_location_id = locations.first().map(|l| l.id.clone());

    tracing::debug!(
        movies = movies.len(),
        locations = locations.len(),
        food = food.len(),
        "catalog loaded"
    );

    Ok(Catalog {
        movies,
        locations,
        food,
        selected_location_id,
    })
}

/// Movies screening at the given venue, catalog order preserved.
pub fn movies_at<'a>(movies: &'a [Movie], location_id: &str) -> Vec<&'a Movie> {
    movies
        .iter()
        .filter(|movie| movie.screens_at(location_id))
        .collect()
}
