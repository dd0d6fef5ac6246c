// src/logging.rs
// =============================================================================
// Diagnostics setup.
//
// Results (link counts, the saved list) are printed to stdout with println!
// style output. Everything else, like "fetch failed" or "skipping link",
// goes through `tracing` and is printed to stderr by tracing-subscriber.
//
// Filter priority:
// 1. LINK_HARVEST_LOG, any EnvFilter directive ("debug", "link_harvest=trace")
// 2. the -v count from the command line
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LINK_HARVEST_LOG";

// Installs the global subscriber; call once, at startup
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
