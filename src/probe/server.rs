// src/probe/server.rs
use super::probe::{Probe, ProbeError, ProbeOutcome};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::time::{timeout, Duration};
use tracing::debug;
use url::Url;

/// Root-page check: the deployment is up iff `GET {base_url}` returns 200.
pub struct ServerHealthProbe {
    url: Url,
    timeout: Duration,
}

impl ServerHealthProbe {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self { url, timeout }
    }
}

#[async_trait]
impl Probe for ServerHealthProbe {
    async fn run(&self, client: &Client) -> Result<ProbeOutcome, ProbeError> {
        let result = timeout(self.timeout, client.get(self.url.as_str()).send()).await;

        let response = match result {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(ProbeError::Unreachable(e.to_string())),
            Err(_) => {
                return Err(ProbeError::Unreachable(format!(
                    "request to {} timed out",
                    self.url
                )))
            }
        };

        let status = response.status();
        debug!(%status, url = %self.url, "server health response");

        // Exactly 200; other 2xx do not count.
        if status == StatusCode::OK {
            Ok(ProbeOutcome::Passed)
        } else {
            Ok(ProbeOutcome::Failed(format!("HTTP {}", status)))
        }
    }

    fn name(&self) -> &'static str {
        "server_health"
    }
}
