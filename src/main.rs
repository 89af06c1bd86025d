// src/main.rs
use anyhow::Result;
use tracing::{error, info};

mod checker;
mod config;
mod probe;
mod report;

use crate::checker::HealthChecker;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("smoke_probe=debug".parse()?)
                .add_directive("reqwest=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "smoke.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::resolve_config(&config_path).await?;

    let checker = HealthChecker::new(&config)?;
    let report = checker.run().await;

    // The report goes to stdout; logs stay on stderr.
    print!("{}", report.render(config.report.format)?);

    let code = report.exit_code();
    if code != 0 {
        error!("smoke check failed");
        std::process::exit(code);
    }

    Ok(())
}
