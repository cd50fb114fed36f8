//! Repository traits for the domain layer.

pub mod matches;

pub use matches::{validate_key, MatchStore, DEFAULT_MATCH_KEY};
