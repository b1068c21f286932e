//! # strange-shows-store
//!
//! Local persistence for the Strange Shows application, backed by SQLite.
//!
//! Each collection lives as a JSON blob under a namespaced key — five
//! independent keyed blobs with replace-on-write semantics — in a single
//! `collections` table. The crate exposes a synchronous [`Database`] handle
//! with typed helpers per collection. Seeding of the built-in demo data
//! runs on every open and is idempotent.

pub mod database;
pub mod food;
pub mod locations;
pub mod migrations;
pub mod movies;
pub mod reviews;
pub mod seed;
pub mod users;

mod collection;
mod error;

pub use database::Database;
pub use error::StoreError;
