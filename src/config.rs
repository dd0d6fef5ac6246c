// src/config.rs
// =============================================================================
// Resolved runtime settings.
//
// clap already merged command-line flags, LINK_HARVEST_* environment
// variables and defaults; this module turns the parsed Cli into the plain
// values the fetcher and record store need.
// =============================================================================

use crate::cli::Cli;
use crate::records::RecordStore;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RECORD_FILE: &str = "links.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Where harvested links are stored
    pub record_path: PathBuf,
    /// Per-request timeout for the page fetch
    pub timeout: Duration,
    /// Redirect hops reqwest may follow
    pub max_redirects: usize,
    /// Sent as the User-Agent header
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            record_path: PathBuf::from(DEFAULT_RECORD_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: default_user_agent(),
        }
    }
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            record_path: cli.record.clone(),
            timeout: Duration::from_secs(cli.timeout),
            max_redirects: cli.max_redirects,
            ..Self::default()
        }
    }

    pub fn record_store(&self) -> RecordStore {
        RecordStore::new(&self.record_path)
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.record_path, PathBuf::from("links.txt"));
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.max_redirects, 10);
        assert!(settings.user_agent.starts_with("link-harvest/"));
    }

    #[test]
    fn test_from_cli_overrides() {
        let cli = Cli::parse_from([
            "link-harvest",
            "--record",
            "/tmp/harvest.txt",
            "--timeout",
            "3",
            "--max-redirects",
            "0",
            "show",
        ]);
        let settings = Settings::from_cli(&cli);

        assert_eq!(settings.record_path, PathBuf::from("/tmp/harvest.txt"));
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.max_redirects, 0);
        assert_eq!(settings.record_store().path(), settings.record_path.as_path());
    }
}
