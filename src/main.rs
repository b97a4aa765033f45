use anyhow::Result;
use chatwire::{config, console};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a log level or a full filter directive such as `chatwire=debug,warn`
fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter '{}': {}. Use a level (error, warn, info, debug, trace) \
             or directives like 'chatwire=debug'",
            directives,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // RUST_LOG wins over the configured level
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());
    let filter = log_filter(&directives)?;

    // stdout carries the conversation, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting chatwire with log filter: {}", directives);

    console::run(config).await?;

    Ok(())
}
