//! HTTP client for the fact API

use crate::error::{Result, TreeError};
use crate::metrics::METRICS;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fact source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base endpoint returning `{"data": [{"fact": "..."}]}`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Facts requested per call (`limit` query parameter)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Number of requests to fan out. The public feed holds fewer facts
    /// than one request returns, so one is enough today; a larger feed
    /// only needs this turned up.
    #[serde(default = "default_requests")]
    pub requests: usize,

    /// Maximum requests in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    "https://catfact.ninja/facts".to_string()
}
fn default_limit() -> usize {
    1000
}
fn default_requests() -> usize {
    1
}
fn default_concurrency() -> usize {
    4
}
fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
            requests: default_requests(),
            concurrency: default_concurrency(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FactsPage {
    data: Vec<FactItem>,
}

#[derive(Debug, Deserialize)]
struct FactItem {
    fact: String,
}

/// Fact source client
pub struct FactClient {
    config: SourceConfig,
    client: Client,
}

impl FactClient {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TreeError::Internal(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Fetch all fact batches, fanning out up to `concurrency` requests
    /// at a time.
    ///
    /// A failed request is logged and skipped rather than failing the
    /// whole run, so one bad response is never a single point of
    /// failure. Results keep request order regardless of completion
    /// order, so a run against a stable feed is reproducible.
    pub async fn fetch_all(&self) -> Result<Vec<String>> {
        let url = format!("{}?limit={}", self.config.endpoint, self.config.limit);
        info!(
            requests = self.config.requests,
            url = %url,
            "fetching facts"
        );

        let mut facts = Vec::new();
        for chunk_start in (0..self.config.requests).step_by(self.config.concurrency.max(1)) {
            let chunk_end = (chunk_start + self.config.concurrency.max(1)).min(self.config.requests);
            let batch = futures::future::join_all(
                (chunk_start..chunk_end).map(|i| self.fetch_page(url.clone(), i)),
            )
            .await;
            for page in batch.into_iter().flatten() {
                facts.extend(page);
            }
        }

        METRICS.facts_fetched.inc_by(facts.len() as f64);
        info!(count = facts.len(), "finished fetching facts");
        Ok(facts)
    }

    async fn fetch_page(&self, url: String, index: usize) -> Option<Vec<String>> {
        debug!(index, "requesting fact page");
        let result = async {
            let response = self.client.get(&url).send().await?.error_for_status()?;
            response.json::<FactsPage>().await
        }
        .await;

        match result {
            Ok(page) => {
                METRICS.source_requests.with_label_values(&["ok"]).inc();
                Some(page.data.into_iter().map(|item| item.fact).collect())
            }
            Err(e) => {
                METRICS.source_requests.with_label_values(&["error"]).inc();
                warn!(index, error = %e, "fact request failed, skipping");
                None
            }
        }
    }
}
