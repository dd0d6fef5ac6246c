// src/harvest/extract.rs
// =============================================================================
// This module pulls raw link strings out of page text.
//
// It is NOT an HTML parser. It looks for the literal text `href=` and takes
// everything between the character after it (assumed to be a quote) and the
// next `"` or `'`. That means:
// - Commented-out links and links inside <script> are found too
// - Relative links like "/about" come back exactly as written
// - An unterminated attribute ends the whole scan
//
// The scan is lazy: HrefScanner is an iterator, so nothing is searched until
// the caller asks for the next link.
//
// Rust concepts:
// - Iterators: implementing Iterator for our own struct
// - Lifetimes: the yielded &'a str borrows from the page text
// - Char boundaries: byte offsets must not split a UTF-8 character
// =============================================================================

use std::iter::FusedIterator;

// The attribute we scan for
const HREF_MARKER: &str = "href=";

// Bytes skipped from the start of a match: the marker itself plus one quote
const MARKER_SKIP: usize = HREF_MARKER.len() + 1;

// Lazy scanner over one page of text
//
// Create it with extract_links(). Each call to next() finds one link.
#[derive(Debug, Clone)]
pub struct HrefScanner<'a> {
    /// The page text being scanned
    text: &'a str,
    /// Byte offset where the next search starts
    cursor: usize,
    /// Set once a search fails; the scan never restarts after that
    finished: bool,
}

// Starts a scan over `page_text`
//
// Parameters:
//   page_text: the downloaded page (borrowed, not copied)
//
// Returns: an iterator of raw link strings in document order
//
// Example:
//   "<a href=\"https://example.com/a\">x</a>" -> ["https://example.com/a"]
pub fn extract_links(page_text: &str) -> HrefScanner<'_> {
    HrefScanner {
        text: page_text,
        cursor: 0,
        finished: false,
    }
}

impl<'a> HrefScanner<'a> {
    fn stop(&mut self) -> Option<&'a str> {
        self.finished = true;
        None
    }
}

impl<'a> Iterator for HrefScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        let text = self.text;

        // Find the next marker after the cursor
        let marker = match text[self.cursor..].find(HREF_MARKER) {
            Some(offset) => self.cursor + offset,
            None => return self.stop(),
        };

        // Skip the marker and the assumed opening quote
        let start = char_boundary_at_or_after(text, marker + MARKER_SKIP);

        // The link ends at whichever quote comes first
        let end = match text[start..].find(|c: char| c == '"' || c == '\'') {
            Some(offset) => start + offset,
            None => return self.stop(),
        };

        // Continue right after the closing quote (a single ASCII byte)
        self.cursor = end + 1;
        Some(&text[start..end])
    }
}

impl FusedIterator for HrefScanner<'_> {}

// Moves `pos` forward until it is a valid place to slice `text`
//
// Only matters when the byte we assumed to be a quote is actually the
// start of a multi-byte character. Positions past the end clamp to len().
fn char_boundary_at_or_after(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an iterator instead of returning Vec<String>?
//    - The caller (the frontier) looks at links one at a time anyway
//    - No allocation for links we are going to throw away
//    - .collect::<Vec<_>>() still gives you a Vec when you want one
//
// 2. What is FusedIterator?
//    - A promise that once next() returns None, it keeps returning None
//    - Our `finished` flag is what makes that true
//
// 3. What does the 'a lifetime mean here?
//    - HrefScanner<'a> borrows the page text
//    - Every &'a str it yields points into that same text
//    - The compiler stops you from dropping the page while links are in use
// -----------------------------------------------------------------------------
