//! The per-session booking state machine.
//!
//! `Browsing -> SelectingSeats -> Confirmation` is the booking path; the
//! four side views (profile, calendar, food, reviews) branch off `Browsing`
//! and return to it. There is no terminal state: [`BookingFlow::reset`]
//! always brings the session back to `Browsing`.
//!
//! Unmet preconditions are silent no-ops rather than errors (see
//! DESIGN.md).

use chrono::Utc;
use rand::Rng;

use strange_shows_shared::constants::{TICKET_ID_PREFIX, TICKET_TOKEN_LEN};
use strange_shows_shared::types::{BookingStep, Movie, Ticket};

/// Driver of the movie-selection-to-ticket flow.
///
/// Holds the current step, the selected movie and showtime, and — after
/// confirmation — the synthesized ticket. The ticket is never persisted; it
/// lives only until [`BookingFlow::reset`].
#[derive(Debug, Default)]
pub struct BookingFlow {
    step: BookingStep,
    movie: Option<Movie>,
    showtime: Option<String>,
    ticket: Option<Ticket>,
}

impl BookingFlow {
    /// Start a fresh session on the browsing screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The step the session is currently on.
    pub fn step(&self) -> BookingStep {
        self.step
    }

    /// The movie being booked, if any.
    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    /// The showtime the booking is for, if a movie is selected.
    pub fn showtime(&self) -> Option<&str> {
        self.showtime.as_deref()
    }

    /// The confirmed ticket, if the session reached `Confirmation`.
    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// Pick a movie and move to seat selection.
    ///
    /// The showtime defaults to the first entry of `movie.showtimes`. A
    /// movie without showtimes cannot be booked and is ignored. Venue
    /// filtering happens before this call: the caller only offers movies
    /// that screen at the chosen location.
    pub fn select_movie(&mut self, movie: Movie) {
        if movie.showtimes.is_empty() {
            tracing::warn!(movie_id = %movie.id, "movie has no showtimes, ignoring selection");
            return;
        }

        self.showtime = Some(movie.showtimes[0].clone());
        self.movie = Some(movie);
        self.step = BookingStep::SelectingSeats;
    }

    /// Override the default showtime.
    ///
    /// Only meaningful while a movie is selected; the UI offers only that
    /// movie's own showtimes, so the value is not validated further.
    pub fn select_showtime(&mut self, time: impl Into<String>) {
        if self.movie.is_some() {
            self.showtime = Some(time.into());
        }
    }

    /// Confirm the seat selection and synthesize the ticket.
    ///
    /// Returns `None` — leaving the state untouched — when the selection is
    /// empty or no movie is selected. Otherwise the flow moves to
    /// `Confirmation` and the new ticket is returned.
    pub fn confirm_seats(&mut self, seats: &[String]) -> Option<&Ticket> {
        if seats.is_empty() {
            return None;
        }

        let (movie, showtime) = match (&self.movie, &self.showtime) {
            (Some(movie), Some(showtime)) => (movie, showtime.clone()),
            _ => return None,
        };

        let ticket = Ticket {
            id: new_ticket_id(),
            movie_id: movie.id.clone(),
            showtime,
            seats: seats.to_vec(),
            total: seats.len() as f64 * movie.price,
            date: Utc::now(),
        };

        tracing::info!(
            ticket_id = %ticket.id,
            movie_id = %ticket.movie_id,
            seats = ticket.seats.len(),
            total = ticket.total,
            "booking confirmed"
        );

        self.ticket = Some(ticket);
        self.step = BookingStep::Confirmation;
        self.ticket.as_ref()
    }

    /// Open one of the side views. Only reachable from `Browsing`, and only
    /// for side-view steps; anything else is a no-op.
    pub fn open_side_view(&mut self, view: BookingStep) {
        if self.step == BookingStep::Browsing && view.is_side_view() {
            self.step = view;
        }
    }

    /// Return from a side view to the browsing screen.
    pub fn back_to_browsing(&mut self) {
        if self.step.is_side_view() {
            self.step = BookingStep::Browsing;
        }
    }

    /// Clear the selection and the ticket and return to `Browsing`.
    pub fn reset(&mut self) {
        self.step = BookingStep::Browsing;
        self.movie = None;
        self.showtime = None;
        self.ticket = None;
    }
}

const TOKEN_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Synthesize a ticket id: `TKT-` plus 9 random base-36 characters,
/// uppercase.
fn new_ticket_id() -> String {
    let mut rng = rand::thread_rng();
    let token: String = (0..TICKET_TOKEN_LEN)
        .map(|_| TOKEN_CHARS[rng.gen_range(0..TOKEN_CHARS.len())] as char)
        .collect();
    format!("{TICKET_ID_PREFIX}{token}")
}
