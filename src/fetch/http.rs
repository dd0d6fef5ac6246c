// src/fetch/http.rs
// =============================================================================
// This module fetches a page over HTTP(S) with reqwest.
//
// Key functionality:
// - Turns a bare host like "example.com/" into "http://example.com/"
// - Follows redirects automatically (bounded by --max-redirects), so an
//   http -> https or example.com -> www.example.com hop just works
// - Applies a request timeout so a dead server can't hang the menu
// - Returns the body for any HTTP status; only a failed transfer is an error
// - Sorts reqwest errors into FetchError variants
//
// Rust concepts:
// - async/await: the request is awaited on the tokio runtime
// - Builder pattern: Client::builder() configures the client step by step
// - map_err: converting one error type into another
// =============================================================================

use super::{FetchError, PageFetcher};
use crate::config::Settings;
use async_trait::async_trait;
use reqwest::{redirect, Client};
use tracing::{debug, warn};
use url::Url;

// Scheme used when the fetch target has none
const DEFAULT_SCHEME: &str = "http://";

// Page fetcher backed by a reusable reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the client from the resolved settings
    //
    // Returns: FetchError::Client if reqwest refuses the configuration
    //          (for example, an invalid user agent header value)
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .redirect(redirect::Policy::limited(settings.max_redirects))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = target_url(url)?;
        debug!(%target, "fetching page");

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        // An error page still has a body worth scanning (navigation links on a 404)
        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "server answered with an error status");
        }

        // After redirects this is where we actually ended up
        debug!(final_url = %response.url(), status = status.as_u16(), "page downloaded");

        response.text().await.map_err(|e| categorize_error(url, e))
    }
}

// Makes a canonicalized target requestable
//
// Examples:
//   "example.com/"          -> http://example.com/
//   "https://example.com/a" -> https://example.com/a (unchanged)
//   ""                      -> Err(InvalidTarget)
fn target_url(target: &str) -> Result<Url, FetchError> {
    let absolute = if target.contains("://") {
        target.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, target)
    };

    Url::parse(&absolute).map_err(|e| FetchError::InvalidTarget {
        target: target.to_string(),
        reason: e.to_string(),
    })
}

// Categorizes the error types reqwest can return
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_redirect() {
        FetchError::TooManyRedirects { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            message: error.to_string(),
        }
    } else {
        FetchError::Other {
            url,
            message: error.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does redirect::Policy::limited exist?
//    - Servers answer 301/302 with a Location header pointing elsewhere
//    - reqwest follows those for us, up to the limit we give it
//    - Past the limit, send() fails and error.is_redirect() is true
//
// 2. Why is the Client stored instead of created per fetch?
//    - A Client holds a connection pool and TLS configuration
//    - Menu users may run several passes; reusing it is cheaper
//
// 3. Why add "http://" and not "https://"?
//    - The canonicalized target has no scheme left
//    - Plain http works everywhere and servers that want https redirect us
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_default_scheme() {
        let url = target_url("example.com/").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        let url = target_url("https://example.com/docs").unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_empty_target_is_invalid() {
        let result = target_url("");
        assert!(matches!(result, Err(FetchError::InvalidTarget { .. })));
    }

    #[test]
    fn test_client_builds_from_default_settings() {
        assert!(HttpFetcher::new(&Settings::default()).is_ok());
    }

    // Answers one connection with `response` and returns the bare host:port
    async fn serve_once(response: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("{}/", addr)
    }

    #[tokio::test]
    async fn test_error_status_still_returns_body() {
        let body = r#"<a href="http://127.0.0.1/home">home</a>"#;
        let response = format!(
            "HTTP/1.1 404 Not Found\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let target = serve_once(response).await;

        let fetcher = HttpFetcher::new(&Settings::default()).unwrap();
        let page = fetcher.fetch(&target).await.unwrap();

        assert_eq!(page, body);
    }

    #[tokio::test]
    async fn test_unparseable_target_fails_without_network() {
        let fetcher = HttpFetcher::new(&Settings::default()).unwrap();
        let result = fetcher.fetch("http://").await;
        assert!(matches!(result, Err(FetchError::InvalidTarget { .. })));
    }
}
