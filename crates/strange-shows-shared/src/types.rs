//! Domain model structs for the Strange Shows catalog and booking flow.
//!
//! Every struct derives `Serialize` and `Deserialize` with camelCase field
//! names so the stored JSON payloads keep the shape the UI layer expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Location (venue)
// ---------------------------------------------------------------------------

/// Operational status of a screening venue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatus {
    Open,
    Closed,
    Maintenance,
}

/// A physical or virtual screening site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Opaque venue identifier, e.g. `"l1"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address or sector designation.
    pub address: String,
    /// Grid label on the city map, e.g. `"C-3"`.
    pub coordinates: String,
    /// Whether the venue currently admits visitors.
    pub status: LocationStatus,
    /// Current load percentage (0-100). Not a seat limit.
    pub capacity: u8,
}

// ---------------------------------------------------------------------------
// Movie
// ---------------------------------------------------------------------------

/// A movie offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Opaque movie identifier, e.g. `"m1"`.
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    /// Classification string, e.g. `"PG-13"`.
    pub rating: String,
    /// Display runtime, e.g. `"1h 34m"`.
    pub duration: String,
    /// Genre tags.
    pub genre: Vec<String>,
    /// Poster image reference.
    pub image: String,
    /// Ticket price per seat. Always positive for a bookable movie.
    pub price: f64,
    /// Time-of-day strings, in screening order. Non-empty for any movie
    /// offered for booking.
    pub showtimes: Vec<String>,
    /// Ids of the venues screening this movie.
    pub location_ids: Vec<String>,
}

impl Movie {
    /// Whether the movie screens at the given venue.
    pub fn screens_at(&self, location_id: &str) -> bool {
        self.location_ids.iter().any(|id| id == location_id)
    }
}

// ---------------------------------------------------------------------------
// FoodItem
// ---------------------------------------------------------------------------

/// A canteen item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Opaque item identifier, e.g. `"f1"`.
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Product image reference.
    pub image: String,
    /// Marketing tags, e.g. `"POPULAR"`.
    pub tags: Vec<String>,
    /// Hidden from ordering when true.
    #[serde(default)]
    pub is_out_of_stock: bool,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A visitor account. The username doubles as the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique username.
    pub username: String,
    /// Optional avatar image reference.
    pub avatar: Option<String>,
    /// Credit balance. New accounts start at 100.
    pub credits: i64,
    /// Loyalty level.
    pub level: u32,
    /// Grants access to the admin dashboard. Exactly one seeded account
    /// carries this flag.
    #[serde(default)]
    pub is_admin: bool,
}

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

/// A confirmed booking. Synthesized at confirmation time and never
/// persisted; it lives only until the flow is reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// `TKT-` followed by 9 random uppercase base-36 characters.
    pub id: String,
    pub movie_id: String,
    /// The showtime the booking is for.
    pub showtime: String,
    /// Selected seat labels, in selection order. Never empty.
    pub seats: Vec<String>,
    /// `seats.len() * movie.price`.
    pub total: f64,
    /// When the booking was confirmed.
    pub date: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// A movie review. Denormalizes the movie title and image so the review
/// feed renders without a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Opaque review identifier.
    pub id: String,
    pub movie_id: String,
    pub movie_title: String,
    pub movie_image: Option<String>,
    pub username: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub comment: String,
    /// Display string, e.g. `"2 HOURS AGO"` or `"JUST NOW"`.
    pub date: String,
    /// Like counter, starts at 0.
    pub likes: u32,
}

// ---------------------------------------------------------------------------
// Booking flow
// ---------------------------------------------------------------------------

/// The step the booking flow is currently on.
///
/// `Browsing -> SelectingSeats -> Confirmation` is the booking path proper;
/// the remaining variants are side views reachable from `Browsing` only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStep {
    Browsing,
    SelectingSeats,
    Confirmation,
    Profile,
    Calendar,
    Food,
    Reviews,
}

impl Default for BookingStep {
    fn default() -> Self {
        Self::Browsing
    }
}

impl BookingStep {
    /// Whether this step is one of the side views off the browsing screen.
    pub fn is_side_view(self) -> bool {
        matches!(
            self,
            Self::Profile | Self::Calendar | Self::Food | Self::Reviews
        )
    }
}
