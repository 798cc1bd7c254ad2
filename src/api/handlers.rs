//! HTTP handlers over the record store
//!
//! The API surface reads and writes the store directly; it never invokes
//! the classifier. Placements written here are taken as supplied.

use crate::metrics::METRICS;
use crate::store::{
    FailedWrite, RecordStore, StoredRecord, WriteRecordsRequest, WriteRecordsResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

/// API error body
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Get records by topic
///
/// GET /api/v1/facts/{topics}
///
/// `topics` is a comma-separated list of topic identifiers, or `all` for
/// every record. A record belongs to a topic if it is filed under it or
/// the topic appears in its parent chain.
pub async fn get_facts(
    State(state): State<AppState>,
    Path(topics): Path<String>,
) -> Result<Json<BTreeMap<String, Vec<StoredRecord>>>, (StatusCode, Json<ApiError>)> {
    info!(topics = %topics, "facts fetch request");

    let keys: Vec<String> = topics
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if keys.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                "VALIDATION_ERROR",
                "At least one topic is required",
            )),
        ));
    }

    Ok(Json(state.store.fetch(Some(&keys))))
}

/// Write new records
///
/// POST /api/v1/facts
///
/// Accepts a batch of payloads with `depth`, `parents`, `fact`, and an
/// optional `topic` (inferred from the direct parent when omitted).
/// Responds with the per-record write report; a partially failed batch
/// is a 200 whose `failed` list names the rejected positions.
pub async fn write_facts(
    State(state): State<AppState>,
    Json(request): Json<WriteRecordsRequest>,
) -> Result<Json<WriteRecordsResponse>, (StatusCode, Json<ApiError>)> {
    info!(count = request.records.len(), "facts write request");

    if request.records.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                "VALIDATION_ERROR",
                "Batch must contain at least one record",
            )),
        ));
    }

    // Resolve payloads first so rejection indexes refer to the incoming
    // batch, then remap the store's report back onto those positions.
    let mut rejected = Vec::new();
    let mut accepted = Vec::new();
    for (index, payload) in request.records.into_iter().enumerate() {
        match payload.into_record() {
            Ok(record) => accepted.push((index, record)),
            Err(reason) => rejected.push(FailedWrite { index, reason }),
        }
    }

    let report = state
        .store
        .insert_batch(accepted.iter().map(|(_, r)| r.clone()).collect());

    let mut failed = rejected;
    for fw in report.failed {
        failed.push(FailedWrite {
            index: accepted[fw.index].0,
            reason: fw.reason,
        });
    }
    failed.sort_by_key(|f| f.index);

    Ok(Json(WriteRecordsResponse {
        written: report.written,
        failed,
    }))
}

/// Health check
///
/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Prometheus metrics exposition
///
/// GET /metrics
pub async fn metrics() -> String {
    METRICS.gather()
}
