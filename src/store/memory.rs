//! In-memory record store implementation

use super::models::{BatchWriteReport, FailedWrite, StoredRecord, ALL_TOPICS};
use crate::classify::NodeRecord;
use crate::metrics::METRICS;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Concurrent in-memory store for node records.
///
/// Identifiers are sequential (the upstream table had no auto-increment,
/// so the store owns the counter). Records are immutable once written;
/// the only mutations are batch inserts, the clear-then-write
/// `replace_all`, and explicit deletes.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: DashMap<u64, NodeRecord>,
    next_id: AtomicU64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write a batch of records in order.
    ///
    /// Per-record validation failures are reported, not thrown; the rest
    /// of the batch still lands. The report lists written ids and failed
    /// input positions so a partial write is never silent.
    pub fn insert_batch(&self, records: Vec<NodeRecord>) -> BatchWriteReport {
        let mut report = BatchWriteReport::default();
        for (index, record) in records.into_iter().enumerate() {
            if let Err(reason) = validate(&record) {
                warn!(index, reason = %reason, "rejecting record");
                report.failed.push(FailedWrite { index, reason });
                continue;
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            self.records.insert(id, record);
            report.written.push(id);
        }
        METRICS.records_written.inc_by(report.written.len() as f64);
        METRICS.records_rejected.inc_by(report.failed.len() as f64);
        info!(
            written = report.written.len(),
            failed = report.failed.len(),
            "batch write finished"
        );
        report
    }

    /// Erase existing records and write a fresh batch.
    pub fn replace_all(&self, records: Vec<NodeRecord>) -> BatchWriteReport {
        let dropped = self.records.len();
        self.records.clear();
        if dropped > 0 {
            info!(dropped, "cleared existing records");
        }
        self.insert_batch(records)
    }

    /// Retrieve records grouped by the requested topic identifiers.
    ///
    /// A record matches a topic if it is filed under it directly or the
    /// topic appears in its ancestor chain. `None` (or the `"all"`
    /// sentinel among the keys) returns everything under the `"all"`
    /// key. Results are ordered by record id.
    pub fn fetch(&self, topics: Option<&[String]>) -> BTreeMap<String, Vec<StoredRecord>> {
        METRICS.store_fetches.inc();
        let mut results = BTreeMap::new();
        match topics {
            None => {
                results.insert(ALL_TOPICS.to_string(), self.fetch_all());
            }
            Some(keys) => {
                for key in keys {
                    if key == ALL_TOPICS {
                        results.insert(ALL_TOPICS.to_string(), self.fetch_all());
                        continue;
                    }
                    let mut matched: Vec<StoredRecord> = self
                        .records
                        .iter()
                        .filter(|entry| {
                            let record = entry.value();
                            record.topic == *key || record.parents.iter().any(|p| p == key)
                        })
                        .map(|entry| StoredRecord {
                            id: *entry.key(),
                            record: entry.value().clone(),
                        })
                        .collect();
                    matched.sort_by_key(|r| r.id);
                    debug!(topic = %key, count = matched.len(), "fetched records");
                    results.insert(key.clone(), matched);
                }
            }
        }
        results
    }

    /// Every stored record, ordered by id.
    pub fn fetch_all(&self) -> Vec<StoredRecord> {
        let mut all: Vec<StoredRecord> = self
            .records
            .iter()
            .map(|entry| StoredRecord {
                id: *entry.key(),
                record: entry.value().clone(),
            })
            .collect();
        all.sort_by_key(|r| r.id);
        all
    }

    /// Delete a record by id. Returns whether anything was removed.
    pub fn delete(&self, id: u64) -> bool {
        self.records.remove(&id).is_some()
    }
}

fn validate(record: &NodeRecord) -> Result<(), String> {
    if record.fact.trim().is_empty() {
        return Err("fact cannot be empty".to_string());
    }
    if record.topic.trim().is_empty() {
        return Err("topic cannot be empty".to_string());
    }
    if record.depth == 0 {
        return Err("depth must be at least 1".to_string());
    }
    Ok(())
}
