//! Business logic services
//!
//! Services are stateless; every call receives the store it should read
//! from and write to. Validation lives here so the HTTP layer stays a
//! thin mapping between wire types and service calls.

pub mod users;

pub use users::{AddExerciseInput, AddedExercise, UserLog, UserService};
