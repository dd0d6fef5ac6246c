// src/harvest/mod.rs
// =============================================================================
// This module runs one extraction pass: seed URL in, same-domain links out.
//
// Submodules:
// - domain: filter domain and fetch target derived from the seed
// - extract: lexical `href=` scanner over the page text
// - frontier: FIFO queue of kept links plus the per-pass dedup scope
//
// Flow of run_pass():
// 1. domain_of(seed)         -> "example.com"
// 2. canonicalize_seed(seed) -> "example.com/"
// 3. fetcher.fetch(target)   -> page text (or "" on failure)
// 4. extract_links(text)     -> raw href values, in page order
// 5. accept_if_same_domain   -> queued into the caller's Frontier
//
// Rust concepts:
// - Generics: run_pass works with any PageFetcher
// - &mut borrowing: the caller keeps ownership of the Frontier
// =============================================================================

pub mod domain;
pub mod extract;
pub mod frontier;

use crate::fetch::PageFetcher;
use serde::Serialize;
use tracing::{info, warn};

pub use domain::{canonicalize_seed, domain_of};
pub use extract::extract_links;
pub use frontier::Frontier;

// Summary of one extraction pass
//
// Printed as a short table by `extract`, or as JSON with --json
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    /// The URL the user typed
    pub seed: String,
    /// What was actually handed to the fetcher
    pub target: String,
    /// The same-domain filter key
    pub domain: String,
    /// Every href value the scanner found, kept or not
    pub links_found: usize,
    /// Links that passed the domain filter and dedup
    pub links_queued: usize,
    /// Why the page could not be downloaded, if it couldn't
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

// Runs one extraction pass and queues the results into `frontier`
//
// Parameters:
//   fetcher: where page text comes from (real HTTP or a test stub)
//   seed: the URL the user asked for
//   frontier: the caller's queue; new links are appended at the back
//
// A failed fetch is not an error here: it is logged, recorded in the
// report, and the pass continues with an empty page (so nothing is queued).
pub async fn run_pass<F>(fetcher: &F, seed: &str, frontier: &mut Frontier) -> PassReport
where
    F: PageFetcher + ?Sized,
{
    let domain = domain_of(seed);
    let target = canonicalize_seed(seed);
    info!(seed, %target, %domain, "starting extraction pass");

    let (page, fetch_error) = match fetcher.fetch(&target).await {
        Ok(page) => (page, None),
        Err(e) => {
            warn!(error = %e, "page download failed, no links to extract");
            (String::new(), Some(e.to_string()))
        }
    };

    let mut pass = frontier.begin_pass();
    let mut links_found = 0;
    for link in extract_links(&page) {
        links_found += 1;
        pass.accept_if_same_domain(link, &domain);
    }
    let links_queued = pass.finish();

    info!(links_found, links_queued, "extraction pass finished");

    PassReport {
        seed: seed.to_string(),
        target,
        domain,
        links_found,
        links_queued,
        fetch_error,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubFetcher;
    use super::*;

    const PAGE: &str = r#"<a href="https://example.com/a">x</a><a href='https://other.com/b'>y</a>"#;

    #[tokio::test]
    async fn test_pass_keeps_same_domain_links() {
        let fetcher = StubFetcher::serving(PAGE);
        let mut frontier = Frontier::new();

        let report = run_pass(&fetcher, "https://www.example.com/index.html", &mut frontier).await;

        assert_eq!(report.domain, "example.com");
        assert_eq!(report.target, "example.com/");
        assert_eq!(report.links_found, 2);
        assert_eq!(report.links_queued, 1);
        assert!(report.fetch_error.is_none());

        assert_eq!(frontier.pop_front(), "https://example.com/a");
        assert!(!frontier.is_nonempty());
    }

    #[tokio::test]
    async fn test_fetcher_receives_canonical_target() {
        let fetcher = StubFetcher::serving("");
        let mut frontier = Frontier::new();

        run_pass(&fetcher, "https://www.example.com/deep/page", &mut frontier).await;

        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(requested.as_slice(), ["example.com/"]);
    }

    #[tokio::test]
    async fn test_empty_page_queues_nothing() {
        let fetcher = StubFetcher::serving("");
        let mut frontier = Frontier::new();

        let report = run_pass(&fetcher, "https://example.com", &mut frontier).await;

        assert_eq!(report.links_found, 0);
        assert!(!frontier.is_nonempty());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_reported_not_raised() {
        let fetcher = StubFetcher::failing();
        let mut frontier = Frontier::new();

        let report = run_pass(&fetcher, "https://example.com", &mut frontier).await;

        assert!(report.fetch_error.is_some());
        assert_eq!(report.links_queued, 0);
        assert!(!frontier.is_nonempty());
    }

    #[tokio::test]
    async fn test_unterminated_href_keeps_earlier_links() {
        let page = r#"<a href="https://example.com/a">a</a><a href="https://example.com/b>b</a>"#;
        let fetcher = StubFetcher::serving(page);
        let mut frontier = Frontier::new();

        let report = run_pass(&fetcher, "https://example.com", &mut frontier).await;

        assert_eq!(report.links_queued, 1);
        assert_eq!(frontier.pop_front(), "https://example.com/a");
    }

    #[tokio::test]
    async fn test_duplicates_on_page_are_queued_once() {
        let page = r#"<a href="https://example.com/a">1</a><a href="https://example.com/a">2</a>"#;
        let fetcher = StubFetcher::serving(page);
        let mut frontier = Frontier::new();

        let first = run_pass(&fetcher, "https://example.com", &mut frontier).await;
        assert_eq!(first.links_queued, 1);

        // A second pass starts a new dedup scope
        let second = run_pass(&fetcher, "https://example.com", &mut frontier).await;
        assert_eq!(second.links_queued, 1);
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_report_json_skips_missing_error() {
        let report = PassReport {
            seed: "https://example.com".to_string(),
            target: "example.com/".to_string(),
            domain: "example.com".to_string(),
            links_found: 3,
            links_queued: 2,
            fetch_error: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["links_queued"], 2);
        assert!(json.get("fetch_error").is_none());
    }
}
