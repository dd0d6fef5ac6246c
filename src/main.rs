// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and resolve settings
// 3. Dispatch to the menu or to a one-shot subcommand
// 4. Exit with proper code (0 = success, 2 = unexpected error)
//
// A page that can't be downloaded or a record that can't be read is NOT an
// unexpected error: those are reported and the program still exits with 0.
//
// Rust concepts used:
// - async/await: the page fetch runs on the tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod actions;   // src/actions.rs - harvest / show, shared by menu and subcommands
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - resolved settings
mod fetch;     // src/fetch/ - downloading the seed page
mod harvest;   // src/harvest/ - domain filter, href scanner, frontier
mod logging;   // src/logging.rs - tracing subscriber setup
mod menu;      // src/menu.rs - interactive menu loop
mod records;   // src/records/ - the links.txt record file

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Settings;
use fetch::HttpFetcher;
use harvest::Frontier;
use std::io;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole error chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let settings = Settings::from_cli(&cli);
    let store = settings.record_store();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let fetcher = HttpFetcher::new(&settings)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::run_menu(&fetcher, &store, &mut stdin.lock(), &mut stdout.lock()).await
        }
        Commands::Extract { seed_url, json } => {
            let fetcher = HttpFetcher::new(&settings)?;
            let mut frontier = Frontier::new();
            let outcome = actions::harvest_to_record(&fetcher, &seed_url, &mut frontier, &store).await;
            actions::print_outcome(&mut io::stdout().lock(), &outcome, json)
        }
        Commands::Show => actions::show(&store, &mut io::stdout().lock()),
    }
}
