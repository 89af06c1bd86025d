// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

/// Environment override for the target base URL. When set, the config
/// file becomes optional.
pub const TARGET_URL_ENV: &str = "SMOKE_TARGET_URL";

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .context("Failed to read config file")?;

    let config: Config = if path.extension().and_then(|s| s.to_str()) == Some("yaml")
        || path.extension().and_then(|s| s.to_str()) == Some("yml") {
        serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
    } else {
        serde_json::from_str(&contents).context("Failed to parse JSON config")?
    };

    config.validate()?;
    Ok(config)
}

/// Resolve the effective configuration: the file, with `SMOKE_TARGET_URL`
/// overriding `target.base_url` when present.
pub async fn resolve_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let env_target = match std::env::var(TARGET_URL_ENV) {
        Ok(raw) => Some(
            raw.parse::<Url>()
                .with_context(|| format!("{} is not a valid URL", TARGET_URL_ENV))?,
        ),
        Err(_) => None,
    };

    let mut config = if path.exists() {
        load_config(path).await?
    } else if let Some(url) = env_target.clone() {
        Config::for_target(url)
    } else {
        anyhow::bail!(
            "config file '{}' not found and {} is not set",
            path.display(),
            TARGET_URL_ENV
        );
    };

    if let Some(url) = env_target {
        config.target.base_url = url;
    }

    config.validate()?;
    Ok(config)
}
