//! Data models for the record store and its wire surface

use crate::classify::NodeRecord;
use serde::{Deserialize, Serialize};

/// Wildcard key for "every topic" retrievals.
pub const ALL_TOPICS: &str = "all";

/// A node record as persisted, with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: u64,
    #[serde(flatten)]
    pub record: NodeRecord,
}

/// Outcome of a batch write: which records landed and which were
/// rejected, in input order. Rejections never abort the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchWriteReport {
    pub written: Vec<u64>,
    pub failed: Vec<FailedWrite>,
}

impl BatchWriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One rejected record within a batch, identified by its input position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedWrite {
    pub index: usize,
    pub reason: String,
}

/// Incoming payload for a new record write.
///
/// `topic` may be omitted, in which case it is inferred as the last
/// element of `parents` (the direct parent). A payload with neither is
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecordPayload {
    pub depth: u32,
    #[serde(default)]
    pub parents: Vec<String>,
    pub fact: String,
    #[serde(default)]
    pub topic: Option<String>,
}

impl NewRecordPayload {
    /// Resolve the payload into a node record, or explain why it cannot
    /// be persisted.
    pub fn into_record(self) -> Result<NodeRecord, String> {
        if self.fact.trim().is_empty() {
            return Err("fact cannot be empty".to_string());
        }
        if self.depth == 0 {
            return Err("depth must be at least 1".to_string());
        }
        let topic = match self.topic {
            Some(topic) if !topic.trim().is_empty() => topic,
            _ => match self.parents.last() {
                Some(parent) => parent.clone(),
                None => return Err("either topic or a parent chain is required".to_string()),
            },
        };
        Ok(NodeRecord {
            depth: self.depth,
            parents: self.parents,
            topic,
            fact: self.fact,
        })
    }
}

/// Write request body: a batch of new record payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteRecordsRequest {
    pub records: Vec<NewRecordPayload>,
}

/// Write response body: the per-record batch report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteRecordsResponse {
    pub written: Vec<u64>,
    pub failed: Vec<FailedWrite>,
}
