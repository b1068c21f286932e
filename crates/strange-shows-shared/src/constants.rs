/// Application name
pub const APP_NAME: &str = "Strange Shows";

/// Number of seat rows in the auditorium grid
pub const SEAT_ROWS: usize = 6;

/// Number of seats per row
pub const SEAT_COLS: usize = 8;

/// Username of the seeded administrator account
pub const ADMIN_USERNAME: &str = "dine_15";

/// Password literal for the administrator account. The check happens in the
/// auth layer; no credential is ever stored.
pub const ADMIN_PASSWORD: &str = "Dhinesh";

/// Credit balance seeded for the administrator account
pub const ADMIN_CREDITS: i64 = 999_999;

/// Loyalty level seeded for the administrator account
pub const ADMIN_LEVEL: u32 = 99;

/// Credit balance granted to every newly registered account
pub const NEW_USER_CREDITS: i64 = 100;

/// Prefix of every synthesized ticket id
pub const TICKET_ID_PREFIX: &str = "TKT-";

/// Number of random base-36 characters after the ticket id prefix
pub const TICKET_TOKEN_LEN: usize = 9;
