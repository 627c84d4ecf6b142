//! Exercise Tracker Shared Library
//!
//! This crate contains the domain model, API wire types, and validation
//! helpers shared between the backend and its tests. It deliberately
//! depends on no web or database crates.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{Exercise, User};
pub use types::*;
