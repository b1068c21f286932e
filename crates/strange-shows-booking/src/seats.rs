//! Seat map and selection state for the seat-selection step.
//!
//! The auditorium is a fixed 6x8 grid. Seat labels combine the row letter
//! with a one-indexed column number: `A1` through `F8`.
//!
//! Occupancy is a fixed formula rather than persisted inventory: the same
//! grid renders identically on every visit. Tickets are never stored, so
//! there is no real seat state to consult (a deliberate scope limit of the
//! demo).

use strange_shows_shared::constants::{SEAT_COLS, SEAT_ROWS};

/// Whether the seat at zero-indexed `row`, one-indexed `col` is occupied.
///
/// Pure and deterministic: occupied exactly when `(row * col + col)` is
/// divisible by 7 or by 11.
pub fn is_occupied(row: usize, col: usize) -> bool {
    let n = row * col + col;
    n % 7 == 0 || n % 11 == 0
}

/// Label for the seat at zero-indexed `row`, one-indexed `col`, e.g. `"A1"`.
pub fn seat_label(row: usize, col: usize) -> String {
    let letter = (b'A' + row as u8) as char;
    format!("{letter}{col}")
}

/// Parse a seat label into (zero-indexed row, one-indexed col).
///
/// Returns `None` for labels outside the 6x8 grid.
pub fn parse_label(seat_id: &str) -> Option<(usize, usize)> {
    let mut chars = seat_id.chars();
    let letter = chars.next()?;
    let row = (letter as usize).checked_sub('A' as usize)?;
    let col: usize = chars.as_str().parse().ok()?;

    if row >= SEAT_ROWS || col == 0 || col > SEAT_COLS {
        return None;
    }
    Some((row, col))
}

/// Selection state for the auditorium grid.
///
/// Tracks which free seats the visitor has toggled on, in toggle order.
#[derive(Debug, Default)]
pub struct SeatMap {
    selected: Vec<String>,
}

impl SeatMap {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of a seat.
    ///
    /// Occupied seats and labels outside the grid are ignored. There is no
    /// cap on the selection size beyond the grid itself.
    pub fn toggle(&mut self, seat_id: &str) {
        let Some((row, col)) = parse_label(seat_id) else {
            return;
        };
        if is_occupied(row, col) {
            return;
        }

        if let Some(pos) = self.selected.iter().position(|s| s == seat_id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(seat_id.to_string());
        }
    }

    /// Whether a seat is currently selected.
    pub fn is_selected(&self, seat_id: &str) -> bool {
        self.selected.iter().any(|s| s == seat_id)
    }

    /// The selected seats, in the order they were toggled on.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Running total for the current selection at the given seat price.
    pub fn total(&self, price: f64) -> f64 {
        self.selected.len() as f64 * price
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
