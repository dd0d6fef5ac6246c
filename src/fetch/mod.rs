// src/fetch/mod.rs
// =============================================================================
// This module downloads the seed page.
//
// Submodules:
// - http: the real fetcher, built on reqwest
//
// The rest of the program only sees the PageFetcher trait. That keeps the
// extraction pass testable: tests hand it a fetcher that returns canned HTML
// instead of touching the network.
//
// Rust concepts:
// - Traits: a shared interface that several types can implement
// - async-trait: lets a trait declare `async fn` methods
// - thiserror: derive macro for descriptive error enums
// =============================================================================

mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpFetcher;

// Anything that can turn a URL into page text
//
// On failure the caller treats the page as empty; a fetch error never
// aborts the extraction pass.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Ways a fetch can fail
//
// Mirrors the categories a link checker reports (timeout, redirects,
// connection) so the diagnostic says *why* nothing was found. An HTTP error
// status is not one of them: the error page body is still returned.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be built
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The fetch target is not something we can request
    #[error("invalid URL '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    /// The server took longer than the configured timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Redirects went past the configured limit (or looped)
    #[error("too many redirects for {url}")]
    TooManyRedirects { url: String },

    /// DNS failure, refused connection, TLS handshake, etc.
    #[error("could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    /// Anything else reqwest reports (body decoding, protocol errors)
    #[error("failed to download {url}: {message}")]
    Other { url: String, message: String },
}
