//! Record store for classified fact placements
//!
//! Persists the flat node records the tree builder emits and serves them
//! back by topic. The store is the only shared mutable state in the
//! process; it is a concurrent map with an atomic id counter, so batch
//! writes and reads need no external locking. Batch writes are clearly
//! partial on failure: the report names which records were written and
//! which were rejected.

pub mod memory;
pub mod models;

pub use memory::RecordStore;
pub use models::{
    BatchWriteReport, FailedWrite, NewRecordPayload, StoredRecord, WriteRecordsRequest,
    WriteRecordsResponse, ALL_TOPICS,
};
