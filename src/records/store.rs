// src/records/store.rs
// =============================================================================
// This module reads and writes the link record file.
//
// Operations:
// - clear():   truncate the file (creating it if needed) before a new pass
// - append():  add one URL as a newline-terminated line
// - display(): copy every line verbatim to an output stream
// - drain_into(): pop a whole Frontier into the file, oldest link first
//
// Write failures during a drain are logged and skipped; they never stop the
// program. A missing file on display is reported as RecordError::Open.
//
// Rust concepts:
// - std::fs::OpenOptions: choose append / truncate / create behavior
// - BufRead::lines(): iterate over a file line by line
// - Generic writers: display() takes any `impl Write`, so tests can use Vec<u8>
// =============================================================================

use crate::harvest::Frontier;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

// Errors touching the record file
//
// Variants about the file carry its path so the message is useful on its own.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The file could not be opened (missing, permissions, ...)
    #[error("could not open record file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line failed part way through
    #[error("could not read record file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the record file failed
    #[error("could not write to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying the record to the output stream failed
    #[error("could not print the saved links: {0}")]
    Output(#[source] io::Error),
}

// Line-oriented record of harvested URLs
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Removes every stored URL
    pub fn clear(&self) -> Result<(), RecordError> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| self.open_error(source))?;

        debug!(path = %self.path.display(), "record cleared");
        Ok(())
    }

    // Adds one URL at the end of the file
    pub fn append(&self, url: &str) -> Result<(), RecordError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.open_error(source))?;

        writeln!(file, "{}", url).map_err(|source| self.write_error(source))
    }

    // Copies every stored line to `out`, each followed by a newline
    //
    // Returns: how many lines were written
    pub fn display<W: Write>(&self, out: &mut W) -> Result<usize, RecordError> {
        let file = File::open(&self.path).map_err(|source| self.open_error(source))?;

        let mut count = 0;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| RecordError::Read {
                path: self.path.clone(),
                source,
            })?;
            writeln!(out, "{}", line).map_err(RecordError::Output)?;
            count += 1;
        }

        Ok(count)
    }

    fn open_error(&self, source: io::Error) -> RecordError {
        RecordError::Open {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> RecordError {
        RecordError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

// Empties `frontier` into `store`, oldest link first
//
// A link that can't be written is logged and dropped; the drain keeps going
// so the frontier always ends up empty.
//
// Returns: how many links made it into the file
pub fn drain_into(frontier: &mut Frontier, store: &RecordStore) -> usize {
    debug!(pending = frontier.len(), path = %store.path().display(), "saving frontier");

    let mut written = 0;
    while frontier.is_nonempty() {
        let link = frontier.pop_front();
        match store.append(&link) {
            Ok(()) => written += 1,
            Err(e) => warn!(error = %e, link = %link, "skipping link that could not be saved"),
        }
    }

    written
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why open the file again for every append?
//    - The file is tiny and appends are rare (one pass at a time)
//    - Nothing stays open between menu actions, so `cat links.txt` in
//      another terminal always sees a complete file
//
// 2. What does #[source] do in thiserror?
//    - Marks the field as the underlying cause of the error
//    - anyhow's "{:#}" formatting then prints the whole chain
//
// 3. Why `impl Into<PathBuf>`?
//    - Lets callers pass &str, String, &Path or PathBuf
//    - .into() converts whichever one they gave us
// -----------------------------------------------------------------------------
