//! Gympass Application Layer
//!
//! Ports the storage collaborator must implement, and the use cases that
//! drive them.
pub mod ports;
pub mod use_cases;
