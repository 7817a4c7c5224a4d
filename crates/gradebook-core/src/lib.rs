//! gradebook-core — Roster store and JSON persistence.
//!
//! This crate holds the student -> subject -> grade data model, the store
//! that validates every mutation, and the adapter that saves and loads
//! rosters as JSON files. It does no console I/O.

pub mod error;
pub mod model;
pub mod persistence;
pub mod store;

pub use error::{GradeError, LoadError, SaveError, StoreError};
pub use model::{Grade, Roster, SubjectGrades};
pub use store::{Average, Listing, RosterStore};
