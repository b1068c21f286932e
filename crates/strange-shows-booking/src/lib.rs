//! # strange-shows-booking
//!
//! The booking flow for the Strange Shows client: a linear state machine
//! from browsing to seat confirmation, the seat map with its fixed
//! pseudo-occupancy, and the async-shaped command layer (auth, catalog,
//! reviews) a UI front-end drives.
//!
//! The command functions are `async` for interface symmetry with a remote
//! backend even though the store underneath is a synchronous local database.

pub mod auth;
pub mod catalog;
pub mod reviews;
pub mod seats;
pub mod state;

pub use state::BookingFlow;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// The default filter mirrors what the desktop shell ships with; override
/// it with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("strange_shows_booking=debug,strange_shows_store=info,warn")
    });

    fmt().with_env_filter(filter).with_target(true).init();
}
