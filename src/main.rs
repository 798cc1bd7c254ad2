//! Service entrypoint: fetch facts, classify them into the topic
//! hierarchy, persist the records, then serve them over HTTP.

use fact_tree::api::{build_router, AppState};
use fact_tree::{cat_facts_config, Classifier, Config, FactClient, RecordStore, TreeBuilder};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    // Configuration errors abort before anything else runs.
    let classifier = match Classifier::new(cat_facts_config()) {
        Ok(classifier) => classifier,
        Err(e) => {
            error!("invalid topic configuration: {}", e);
            anyhow::bail!("invalid topic configuration: {e}");
        }
    };
    let builder = TreeBuilder::new(classifier);

    let client = FactClient::new(config.source.clone())?;
    let facts = client.fetch_all().await?;
    info!(count = facts.len(), "fetched facts, building tree");

    let records = builder.build(&facts)?;

    let store = Arc::new(RecordStore::new());
    let report = store.replace_all(records);
    if !report.is_complete() {
        for failure in &report.failed {
            error!(index = failure.index, reason = %failure.reason, "record not persisted");
        }
    }
    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "records persisted"
    );

    let router = build_router(AppState { store });
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "serving fact tree API");
    axum::serve(listener, router).await?;

    Ok(())
}
