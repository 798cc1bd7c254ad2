//! Static topic hierarchy, trigger-word sets, and depth weights
//!
//! The classification engine consumes three read-only tables:
//! - a topic model (identifiers, depths, parent links forming a forest)
//! - a match set (per-topic trigger tokens)
//! - a weight table (depth -> score)
//!
//! They are bundled into a [`ClassifierConfig`] that is constructed
//! explicitly, validated once at startup, and never mutated afterwards,
//! so multiple independently configured engines can coexist in-process.

pub mod catalog;
pub mod topics;

pub use catalog::cat_facts_config;
pub use topics::{ClassifierConfig, MatchSet, Topic, TopicModel, WeightTable};
