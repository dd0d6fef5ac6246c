// src/records/mod.rs
// =============================================================================
// This module keeps the harvested links on disk.
//
// Submodules:
// - store: the RecordStore that appends, clears and displays the file
//
// The record is a plain text file with one URL per line. There is no header
// and no escaping, so it can be read with `cat` or fed into other tools.
//
// Rust concepts:
// - Modules: a directory module with a mod.rs root
// - pub use: re-exporting so callers write records::RecordStore
// =============================================================================

mod store;

pub use store::{drain_into, RecordError, RecordStore};
