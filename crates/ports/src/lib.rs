//! # Ports
//!
//! Interface definitions for the filesystem boundary of a run.
//!
//! - [`filesystem`]: enumerating and opening the input entries
//! - [`report`]: creating and appending to the report artifact
//!
//! The use case is written against these traits only, so it can be exercised
//! with in-memory stubs.

// crates/ports/src/lib.rs
pub mod filesystem;
pub mod report;
