//! The classification engine
//!
//! A pure, depth-weighted bag-of-words matcher. [`Classifier`] maps one
//! fact string to a ranked list of topic hits; [`TreeBuilder`] drives it
//! over a fact batch and flattens each best placement into a node record
//! carrying depth and the root-to-parent chain. No state is held between
//! invocations beyond the read-only configuration, so both are safe to
//! call concurrently.

pub mod builder;
pub mod classifier;

pub use builder::{NodeRecord, TreeBuilder};
pub use classifier::{Classifier, TopicHit};
