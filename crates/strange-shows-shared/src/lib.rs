//! # strange-shows-shared
//!
//! Domain model types and application constants shared between the
//! persistence store and the booking flow.

pub mod constants;
pub mod types;
