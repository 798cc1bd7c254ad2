//! Fact source collaborator
//!
//! Fetches raw fact strings from a remote JSON API. All fetching,
//! fan-out, and failure handling lives here; the classification engine
//! only ever sees a plain sequence of strings.

pub mod client;

pub use client::{FactClient, SourceConfig};
