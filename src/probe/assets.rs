// src/probe/assets.rs
use super::probe::{Probe, ProbeError, ProbeOutcome};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::time::{timeout, Duration};
use tracing::debug;
use url::Url;

/// Static asset check: each configured path must be served (200) or cleanly
/// absent (404). Anything else means the static file layer is broken.
pub struct StaticAssetsProbe {
    assets: Vec<(String, Url)>,
    timeout: Duration,
}

impl StaticAssetsProbe {
    pub fn new(base_url: &Url, paths: &[String], timeout: Duration) -> Result<Self> {
        let mut assets = Vec::with_capacity(paths.len());

        for path in paths {
            let url = base_url.join(path).with_context(|| {
                format!("cannot join asset path '{}' onto {}", path, base_url)
            })?;
            assets.push((path.clone(), url));
        }

        Ok(Self { assets, timeout })
    }
}

/// 200 and 404 are both acceptable for an optional static asset.
pub fn acceptable_asset_status(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NOT_FOUND
}

#[async_trait]
impl Probe for StaticAssetsProbe {
    async fn run(&self, client: &Client) -> Result<ProbeOutcome, ProbeError> {
        let mut failures = Vec::new();

        for (path, url) in &self.assets {
            let result = timeout(self.timeout, client.get(url.as_str()).send()).await;

            let response = match result {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => return Err(ProbeError::Unreachable(e.to_string())),
                Err(_) => {
                    return Err(ProbeError::Unreachable(format!(
                        "request to {} timed out",
                        url
                    )))
                }
            };

            let status = response.status();
            debug!(%status, %url, "static asset response");

            if !acceptable_asset_status(status) {
                failures.push(format!("{} returned HTTP {}", path, status));
            }
        }

        if failures.is_empty() {
            Ok(ProbeOutcome::Passed)
        } else {
            Ok(ProbeOutcome::Failed(failures.join("; ")))
        }
    }

    fn name(&self) -> &'static str {
        "static_assets"
    }
}
