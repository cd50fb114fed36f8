//! Test support for the scorekeeper workspace.
//!
//! Shared by the library's unit tests and by the integration test binaries
//! so both capture `tracing` output the same way.

pub mod logging;
