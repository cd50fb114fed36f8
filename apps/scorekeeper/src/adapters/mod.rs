//! Adapters for external dependencies.

pub mod matches_file;
pub mod matches_memory;

pub use matches_file::FileMatchStore;
pub use matches_memory::InMemoryMatchStore;
