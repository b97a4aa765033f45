mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok(), DEFAULT_CONFIG_PATH).await
}

/// Resolves `CONFIG_PATH` and the override variables through `lookup`,
/// falling back to `default_path` when no explicit path is given.
pub async fn load_with<F>(lookup: F, default_path: &str) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit = lookup("CONFIG_PATH").filter(|v| !v.is_empty());
    let mut config = load_from_or_default(explicit.as_deref(), default_path).await?;
    apply_overrides(&mut config, &lookup);
    Ok(config)
}

pub async fn load_from(path: Option<&str>) -> Result<Config> {
    load_from_or_default(path, DEFAULT_CONFIG_PATH).await
}

/// Reads the YAML config at `path`. Without an explicit path a missing
/// `default_path` yields the built-in defaults.
pub async fn load_from_or_default(path: Option<&str>, default_path: &str) -> Result<Config> {
    let config_path = path.unwrap_or(default_path);

    if path.is_none() && !tokio::fs::try_exists(config_path).await.unwrap_or(false) {
        debug!("No {} found, using default configuration", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document is a valid "all defaults" config.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

/// Applies `CHAT_BACKEND_URL` and `CHAT_USERNAME` on top of the file values.
pub fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("CHAT_BACKEND_URL").filter(|v| !v.is_empty()) {
        debug!("Backend URL overridden from environment: {}", url);
        config.backend.base_url = url;
    }
    if let Some(username) = lookup("CHAT_USERNAME").filter(|v| !v.is_empty()) {
        config.user.username = username;
    }
}
