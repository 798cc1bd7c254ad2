//! Error types for the fact-tree service

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum TreeError {
    /// No weight defined for a depth used by the topic model.
    ///
    /// Surfaced immediately instead of defaulting, since an undefined
    /// weight would silently corrupt ranking.
    #[error("no weight defined for depth {depth} (required by topic '{topic}')")]
    UnknownDepthWeight { topic: String, depth: u32 },

    /// A topic's parent chain references an identifier that does not exist.
    #[error("topic '{topic}' references unknown parent '{parent}'")]
    BrokenTopicChain { topic: String, parent: String },

    /// A match set entry names a topic that is not in the topic model.
    #[error("match set references unknown topic '{0}'")]
    UnknownMatchTopic(String),

    /// A topic's depth disagrees with its position in the hierarchy.
    #[error("topic '{topic}' has depth {depth}, expected {expected}")]
    DepthMismatch {
        topic: String,
        depth: u32,
        expected: u32,
    },

    /// A single record in a batch write was rejected. Never aborts the
    /// batch; reported per-record in the write report.
    #[error("record {index} rejected: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("fact source request failed: {0}")]
    Source(#[from] reqwest::Error),

    #[error("configuration loading failed: {0}")]
    Config(#[from] config::ConfigError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl TreeError {
    /// True for the fatal startup-time configuration errors that must
    /// prevent the service from ever serving traffic.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TreeError::UnknownDepthWeight { .. }
                | TreeError::BrokenTopicChain { .. }
                | TreeError::UnknownMatchTopic(_)
                | TreeError::DepthMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
