// src/probe/mod.rs
mod assets;
mod probe;
mod server;

pub use assets::StaticAssetsProbe;
pub use probe::{Probe, ProbeError, ProbeOutcome};
pub use server::ServerHealthProbe;

use crate::config::Config;
use anyhow::Result;
use std::sync::Arc;

/// Build the probe set for a configuration, in report order.
pub fn build_probes(config: &Config) -> Result<Vec<Arc<dyn Probe>>> {
    let timeout = config.http.timeout();

    Ok(vec![
        Arc::new(ServerHealthProbe::new(
            config.target.base_url.clone(),
            timeout,
        )),
        Arc::new(StaticAssetsProbe::new(
            &config.target.base_url,
            &config.checks.static_assets,
            timeout,
        )?),
    ])
}
