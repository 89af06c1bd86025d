// src/checker/checker.rs
use crate::config::Config;
use crate::probe::{build_probes, Probe, ProbeError, ProbeOutcome};
use crate::report::{CheckReport, ProbeResult, ProbeStatus};
use anyhow::{Context, Result};
use chrono::Utc;
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

pub struct HealthChecker {
    target: Url,
    probes: Vec<Arc<dyn Probe>>,
    client: Client,
}

impl HealthChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            target: config.target.base_url.clone(),
            probes: build_probes(config)?,
            client,
        })
    }

    /// Run every probe and collect the results into a report. Probes are
    /// independent, so they are awaited together; report order follows
    /// registration order.
    pub async fn run(&self) -> CheckReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        info!(%run_id, target = %self.target, "starting smoke check");

        let tasks = self
            .probes
            .iter()
            .map(|probe| self.run_probe(probe.clone()));
        let results = join_all(tasks).await;

        let passed = results
            .iter()
            .filter(|r| r.status == ProbeStatus::Passed)
            .count();

        info!(
            %run_id,
            "smoke check complete: {}/{} probes passed",
            passed,
            results.len()
        );

        CheckReport {
            run_id,
            target: self.target.clone(),
            started_at,
            results,
        }
    }

    async fn run_probe(&self, probe: Arc<dyn Probe>) -> ProbeResult {
        let start = std::time::Instant::now();
        let outcome = probe.run(&self.client).await;
        let response_time_ms = start.elapsed().as_millis() as u64;

        let (status, detail) = match outcome {
            Ok(ProbeOutcome::Passed) => {
                debug!(probe = probe.name(), "probe passed");
                (ProbeStatus::Passed, None)
            }
            Ok(ProbeOutcome::Failed(detail)) => {
                warn!(probe = probe.name(), %detail, "probe failed");
                (ProbeStatus::Failed, Some(detail))
            }
            Err(ProbeError::Unreachable(detail)) => {
                warn!(probe = probe.name(), %detail, "target unreachable");
                (ProbeStatus::Unreachable, Some(detail))
            }
        };

        ProbeResult {
            probe: probe.name(),
            status,
            response_time_ms,
            checked_at: Utc::now(),
            detail,
        }
    }
}
