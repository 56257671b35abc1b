//! Loupe command-line entrypoint.
//!
//! Usage: `loupe <description.json>`. Prints the match outcome as JSON on stdout; logs go to
//! stderr and are controlled by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use mimalloc::MiMalloc;

use loupe::config::Config;
use loupe::library::{InMemoryReferenceLibrary, JsonlComparisonStore};
use loupe::matcher::MatchOrchestrator;
use loupe::model::WatchDescription;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(description_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        anyhow::bail!("usage: loupe <description.json>");
    };

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        library = %config.library_path.display(),
        comparison_log = %config.comparison_log_path.display(),
        max_results = config.matching.max_results,
        "Loupe starting"
    );

    let raw = tokio::fs::read(&description_path)
        .await
        .with_context(|| format!("failed to read {}", description_path.display()))?;
    let description: WatchDescription = serde_json::from_slice(&raw)
        .with_context(|| format!("invalid description in {}", description_path.display()))?;

    let library = InMemoryReferenceLibrary::load(&config.library_path).await?;
    let store = JsonlComparisonStore::new(config.comparison_log_path.clone());
    let orchestrator = MatchOrchestrator::new(library, store, config.matching)?;

    let outcome = orchestrator.find_matches(description).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
