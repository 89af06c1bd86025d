// src/config/models.rs
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub target: TargetConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Root address of the deployment under test.
    pub base_url: Url,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecksConfig {
    /// Absolute paths probed for 200-or-404, joined onto the base URL.
    #[serde(default = "default_static_assets")]
    pub static_assets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_format")]
    pub format: ReportFormat,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_static_assets() -> Vec<String> {
    vec!["/favicon.ico".to_string(), "/manifest.json".to_string()]
}

fn default_report_format() -> ReportFormat {
    ReportFormat::Text
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            static_assets: default_static_assets(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_report_format(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// A configuration for one target with everything else at defaults.
    pub fn for_target(base_url: Url) -> Self {
        Self {
            target: TargetConfig { base_url },
            http: HttpConfig::default(),
            checks: ChecksConfig::default(),
            report: ReportConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.target.base_url.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!(
                "unsupported base_url scheme '{}', expected http or https",
                other
            ),
        }

        if self.target.base_url.host_str().is_none() {
            anyhow::bail!("base_url has no host");
        }

        if self.http.timeout_secs == 0 {
            anyhow::bail!("http.timeout_secs must be greater than zero");
        }

        for path in &self.checks.static_assets {
            if !path.starts_with('/') {
                anyhow::bail!(
                    "static asset path '{}' must start with '/'",
                    path
                );
            }
        }

        Ok(())
    }
}
