// src/menu.rs
// =============================================================================
// The interactive menu, shown when link-harvest runs without a subcommand.
//
//   1) Harvest the links of a page
//   2) Show the harvested links
//   3) Exit
//
// The loop reads from any BufRead and writes to any Write. main.rs passes
// stdin/stdout; tests pass a Cursor and a Vec<u8>.
//
// Rust concepts:
// - let-else: bail out of the loop when input runs out
// - Generic I/O: BufRead + Write instead of hard-coded stdin/stdout
// =============================================================================

use crate::actions;
use crate::fetch::PageFetcher;
use crate::harvest::Frontier;
use crate::records::RecordStore;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const RULE: &str = "******************************************************************";

// Runs the menu until the user picks "3" or input ends
//
// One Frontier lives for the whole session and is drained after every
// harvest, so it is always empty between actions.
pub async fn run_menu<F, R, W>(
    fetcher: &F,
    store: &RecordStore,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    F: PageFetcher + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut frontier = Frontier::new();

    loop {
        print_menu(out)?;

        let Some(choice) = read_answer(input)? else {
            // EOF (e.g. Ctrl-D) is a normal way to leave
            writeln!(out)?;
            return Ok(());
        };
        writeln!(out)?;

        match choice.as_str() {
            "1" => {
                write!(out, "Enter the URL to harvest: ")?;
                out.flush()?;

                let Some(seed) = read_answer(input)? else {
                    writeln!(out)?;
                    return Ok(());
                };

                let outcome = actions::harvest_to_record(fetcher, &seed, &mut frontier, store).await;
                actions::print_outcome(out, &outcome, false)?;
            }
            "2" => actions::show(store, out)?,
            "3" => {
                writeln!(out, "Thanks for using link-harvest")?;
                return Ok(());
            }
            other => debug!(choice = other, "ignoring unknown menu option"),
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "1) Harvest the links of a page")?;
    writeln!(out, "2) Show the harvested links")?;
    writeln!(out, "3) Exit")?;
    writeln!(out, "{}", RULE)?;
    write!(out, "Choose an option: ")?;
    out.flush()?;
    Ok(())
}

// Reads the next non-blank line and returns its first word
//
// Returns: None at end of input
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(word) = line.split_whitespace().next() {
            return Ok(Some(word.to_string()));
        }
    }
}
