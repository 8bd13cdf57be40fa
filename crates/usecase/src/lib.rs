//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the single-pass word count over an input directory
//! - [`dto`]: request type for the use case boundary
//!
//! Use cases depend on the domain and the ports, never on infrastructure.

pub mod dto;
pub mod orchestrator;

pub use dto::CountRequest;
pub use orchestrator::CountWords;
