//! Gympass Infrastructure Layer
//!
//! SQLite implementations of the application ports.
pub mod database;
pub mod repositories;
