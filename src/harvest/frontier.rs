// src/harvest/frontier.rs
// =============================================================================
// This module holds the links we decided to keep.
//
// Two pieces:
// - Frontier: a first-in-first-out queue of accepted links. The caller owns
//   it and drains it with pop_front() until it is empty.
// - ExtractionPass: a short-lived guard that borrows the Frontier for one
//   extraction pass. It owns the "seen" set used for duplicate suppression.
//   When the pass is dropped (or finish() is called) the set goes away, so
//   the next pass always starts with a clean dedup scope.
//
// The same-domain rule is a plain substring test: a link is kept when it
// *contains* the seed domain anywhere.
//
// Rust concepts:
// - VecDeque: queue with cheap push_back / pop_front
// - HashSet: O(1) "have we seen this?" checks
// - Borrowing: ExtractionPass<'f> holds &'f mut Frontier, so nobody else can
//   touch the frontier while a pass is running
// =============================================================================

use std::collections::{HashSet, VecDeque};
use tracing::trace;

// Ordered queue of discovered same-domain links
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    links: VecDeque<String>,
}

impl Frontier {
    // Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    // Starts a new extraction pass with a fresh dedup scope
    pub fn begin_pass(&mut self) -> ExtractionPass<'_> {
        ExtractionPass {
            frontier: self,
            seen: HashSet::new(),
            accepted: 0,
        }
    }

    // Removes and returns the oldest link
    //
    // Returns an empty String when the frontier is empty, so callers
    // should check is_nonempty() first
    pub fn pop_front(&mut self) -> String {
        self.links.pop_front().unwrap_or_default()
    }

    // True while at least one link is waiting
    pub fn is_nonempty(&self) -> bool {
        !self.links.is_empty()
    }

    // Number of links waiting
    pub fn len(&self) -> usize {
        self.links.len()
    }
}

// One extraction pass over a frontier
//
// The dedup set lives here, not in the Frontier, so it is scoped to the pass.
#[derive(Debug)]
pub struct ExtractionPass<'f> {
    frontier: &'f mut Frontier,
    seen: HashSet<String>,
    accepted: usize,
}

impl ExtractionPass<'_> {
    // Queues `link` if it contains `domain` and wasn't seen earlier in this pass
    //
    // Examples (domain = "example.com"):
    //   "https://example.com/a"      -> queued
    //   "https://example.com/a"      -> ignored (duplicate in this pass)
    //   "https://other.com/?r=example.com" -> queued (substring match)
    //   "/relative/path"             -> ignored
    pub fn accept_if_same_domain(&mut self, link: &str, domain: &str) {
        if !link.contains(domain) {
            return;
        }

        // insert() returns false when the value was already present
        if self.seen.insert(link.to_string()) {
            trace!(link, "queued link");
            self.frontier.links.push_back(link.to_string());
            self.accepted += 1;
        }
    }

    // Ends the pass and releases its dedup scope
    //
    // Returns: the number of links queued during the pass
    pub fn finish(self) -> usize {
        self.accepted
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does pop_front() return String instead of Option<String>?
//    - Callers loop with `while frontier.is_nonempty()`, so the empty case
//      is already handled before popping
//    - unwrap_or_default() turns None into "" for anyone who pops anyway
//
// 2. Why is the seen-set in ExtractionPass and not in Frontier?
//    - A set on the Frontier would need to be cleared by hand after each pass
//    - Here it is dropped automatically when the pass goes out of scope
//    - Running a second pass later may queue the same links again, on purpose
//
// 3. What does `&'f mut Frontier` buy us?
//    - While a pass exists, the frontier is mutably borrowed
//    - The compiler rejects popping from the frontier mid-pass
// -----------------------------------------------------------------------------
