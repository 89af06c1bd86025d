// src/report/mod.rs
use crate::config::ReportFormat;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Passed,
    Failed,
    Unreachable,
}

impl ProbeStatus {
    fn label(self) -> &'static str {
        match self {
            ProbeStatus::Passed => "PASS",
            ProbeStatus::Failed => "FAIL",
            ProbeStatus::Unreachable => "UNREACHABLE",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProbeResult {
    pub probe: &'static str,
    pub status: ProbeStatus,
    pub response_time_ms: u64,
    pub checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub run_id: Uuid,
    pub target: Url,
    pub started_at: DateTime<Utc>,
    pub results: Vec<ProbeResult>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.status == ProbeStatus::Passed)
    }

    /// Exit code under the usual test-runner convention.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn render_text(&self) -> String {
        let mut out = format!("smoke check against {} (run {})\n", self.target, self.run_id);

        for result in &self.results {
            out.push_str(&format!(
                "  {:<11} {:<14} {:>5} ms",
                result.status.label(),
                result.probe,
                result.response_time_ms
            ));
            if let Some(detail) = &result.detail {
                out.push_str(&format!("  {}", detail));
            }
            out.push('\n');
        }

        let failed = self
            .results
            .iter()
            .filter(|r| r.status != ProbeStatus::Passed)
            .count();
        out.push_str(&format!(
            "{} probes, {} passed, {} failed\n",
            self.results.len(),
            self.results.len() - failed,
            failed
        ));

        out
    }
}
