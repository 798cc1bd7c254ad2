//! fact-tree: hierarchical fact classification
//!
//! Sorts short text snippets ("facts") into a predefined topic hierarchy
//! with a depth-weighted bag-of-words model, persists the flattened tree
//! records, and serves them over HTTP.
//!
//! The engine lives in [`classify`] and is pure over the immutable
//! configuration in [`model`]; fetching ([`source`]), persistence
//! ([`store`]), and the HTTP surface ([`api`]) are thin collaborators
//! around it.

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod source;
pub mod store;

pub use classify::{Classifier, NodeRecord, TopicHit, TreeBuilder};
pub use config::Config;
pub use error::{Result, TreeError};
pub use model::{cat_facts_config, ClassifierConfig, MatchSet, Topic, TopicModel, WeightTable};
pub use source::{FactClient, SourceConfig};
pub use store::RecordStore;
