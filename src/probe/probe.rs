// src/probe/probe.rs
use async_trait::async_trait;
use reqwest::Client;

/// Assertion result of a probe that got HTTP responses back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Passed,
    Failed(String),
}

/// The only probe-level error: no HTTP response could be obtained at all
/// (connection refused, DNS failure, TLS error, timeout). Unexpected
/// status codes are `ProbeOutcome::Failed`, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("target unreachable: {0}")]
    Unreachable(String),
}

#[async_trait]
pub trait Probe: Send + Sync {
    async fn run(&self, client: &Client) -> Result<ProbeOutcome, ProbeError>;

    fn name(&self) -> &'static str;
}
