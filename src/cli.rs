// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Three ways to run the program:
//   link-harvest                      -> interactive menu
//   link-harvest extract <SEED_URL>   -> one pass, then exit
//   link-harvest show                 -> print the saved links
//
// The global options (--record, --timeout, ...) can also come from
// LINK_HARVEST_* environment variables thanks to clap's `env` feature.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Option<Commands>: the subcommand itself is optional
// =============================================================================

use crate::config::{DEFAULT_MAX_REDIRECTS, DEFAULT_RECORD_FILE, DEFAULT_TIMEOUT_SECS};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-harvest",
    version,
    about = "Collects the same-domain links of a web page into a text file",
    long_about = "link-harvest downloads one page, scans it for href attributes and keeps the \
                  links that mention the page's own domain. Links are saved one per line, \
                  in the order they appear on the page."
)]
pub struct Cli {
    /// What to do (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File where harvested links are stored, one per line
    #[arg(long, global = true, env = "LINK_HARVEST_RECORD", default_value = DEFAULT_RECORD_FILE)]
    pub record: PathBuf,

    /// Seconds to wait for the page before giving up
    #[arg(long, global = true, env = "LINK_HARVEST_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// How many HTTP redirects to follow while fetching
    #[arg(long, global = true, env = "LINK_HARVEST_MAX_REDIRECTS", default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    ///
    /// LINK_HARVEST_LOG overrides this with a full filter like "debug,hyper=warn"
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

// The subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu: harvest, show, exit
    Menu,

    /// Harvest the same-domain links of one page and save them
    ///
    /// Example: link-harvest extract https://www.rust-lang.org
    ///
    /// The record file is cleared first, so it only ever holds the
    /// links of the most recent page.
    Extract {
        /// Page to harvest (e.g., https://www.example.com)
        seed_url: String,

        /// Print the pass summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the links saved by the last harvest
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::parse_from(["link-harvest"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_extract_with_json() {
        let cli = Cli::parse_from(["link-harvest", "extract", "https://example.com", "--json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Extract {
                seed_url: "https://example.com".to_string(),
                json: true,
            })
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["link-harvest", "show", "--record", "out.txt", "-vv"]);
        assert_eq!(cli.command, Some(Commands::Show));
        assert_eq!(cli.record, PathBuf::from("out.txt"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_extract_requires_seed() {
        assert!(Cli::try_parse_from(["link-harvest", "extract"]).is_err());
    }
}
