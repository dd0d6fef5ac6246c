// src/actions.rs
// =============================================================================
// The two things a user can ask for, shared by the subcommands and the menu:
//
// - harvest_to_record(): clear the record, run one extraction pass, save the frontier
// - show():    print the saved record
//
// Both write their output to a caller-supplied stream instead of calling
// println! directly, so the menu tests can capture what the user would see.
// =============================================================================

use crate::fetch::PageFetcher;
use crate::harvest::{run_pass, Frontier, PassReport};
use crate::records::{self, RecordError, RecordStore};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::warn;

// Everything a harvest produced
#[derive(Debug, Clone, Serialize)]
pub struct HarvestOutcome {
    #[serde(flatten)]
    pub report: PassReport,
    /// Links actually written to the record
    pub links_saved: usize,
    /// Record file the links went to
    pub record: String,
}

// Clears the record, harvests `seed` and saves every queued link
//
// Neither a failed download nor a failed write stops this: the outcome
// just reports fewer links.
pub async fn harvest_to_record<F>(
    fetcher: &F,
    seed: &str,
    frontier: &mut Frontier,
    store: &RecordStore,
) -> HarvestOutcome
where
    F: PageFetcher + ?Sized,
{
    if let Err(e) = store.clear() {
        warn!(error = %e, "could not clear previous links");
    }

    let report = run_pass(fetcher, seed, frontier).await;
    let links_saved = records::drain_into(frontier, store);

    HarvestOutcome {
        report,
        links_saved,
        record: store.path().display().to_string(),
    }
}

// Prints a harvest outcome as text or as pretty JSON
pub fn print_outcome<W: Write>(out: &mut W, outcome: &HarvestOutcome, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(outcome)?)?;
        return Ok(());
    }

    let report = &outcome.report;
    writeln!(out, "🔍 Harvesting links from: {}", report.seed)?;
    match &report.fetch_error {
        None => writeln!(out, "🌐 Fetched: {}", report.target)?,
        Some(error) => writeln!(out, "⚠️  Could not download {}: {}", report.target, error)?,
    }
    writeln!(
        out,
        "📄 Found {} link(s), {} on {}",
        report.links_found, report.links_queued, report.domain
    )?;
    writeln!(out, "💾 Saved {} link(s) to {}", outcome.links_saved, outcome.record)?;
    Ok(())
}

// Prints every saved link, one per line
//
// A record that can't be opened (e.g. nothing harvested yet) is reported
// on stderr and is not an error for the caller.
pub fn show<W: Write>(store: &RecordStore, out: &mut W) -> Result<()> {
    match store.display(out) {
        Ok(_) => Ok(()),
        Err(e @ RecordError::Open { .. }) => {
            eprintln!("Error: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
