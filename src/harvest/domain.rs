// src/harvest/domain.rs
// =============================================================================
// This module turns URLs into the two strings a pass needs:
//
// - The filter domain: "https://www.example.com/path" -> "example.com"
//   Every discovered link must contain this string to be kept.
// - The fetch target: the seed with scheme and "www." stripped, so the
//   transport layer gets a bare host like "example.com/".
//
// None of this is real URL parsing. We only look for "://", "/" and "www."
// as plain substrings, so malformed input still produces *some* string.
//
// Rust concepts:
// - Option<usize>: str::find returns None instead of a "not found" index
// - String slicing: &s[a..b] borrows part of a string without copying
// - strip_prefix: returns Some(rest) only when the prefix is really there
// =============================================================================

// Returns the part of `url` after the first "://", or all of it when
// there is no scheme separator
fn after_scheme(url: &str) -> &str {
    match url.find("://") {
        Some(pos) => &url[pos + 3..],
        None => url,
    }
}

// Returns everything before the first '/', or the whole string if there is none
fn up_to_slash(rest: &str) -> &str {
    match rest.find('/') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

// Derives the domain used as the same-domain filter key
//
// Parameters:
//   url: any URL-ish string (borrowed)
//
// Returns: the host part without "www.", possibly empty
//
// Examples:
//   "https://www.example.com/path" -> "example.com"
//   "example.com/page"             -> "example.com"
//   "www.example.com"              -> "example.com"
pub fn domain_of(url: &str) -> String {
    let candidate = up_to_slash(after_scheme(url));

    // The candidate never contains '/', so the "https://" arm can't match
    if let Some(rest) = candidate.strip_prefix("https://") {
        rest.to_string()
    } else if let Some(rest) = candidate.strip_prefix("www.") {
        rest.to_string()
    } else {
        candidate.to_string()
    }
}

// Scheme-stripper: keeps only the host of `url` and appends a '/'
//
// Example:
//   "https://example.com/docs/intro" -> "example.com/"
//
// Without "://" the host search starts at the beginning of the string,
// and without a following '/' the host runs to the end.
pub fn strip_scheme(url: &str) -> String {
    let host = up_to_slash(after_scheme(url));
    format!("{}/", host)
}

// WWW-stripper: returns the bare host of `url` without any "www." prefix
//
// Example:
//   "https://www.example.com/docs" -> "example.com"
pub fn strip_www(url: &str) -> String {
    let rest = after_scheme(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let host = up_to_slash(rest);
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

// Prepares the seed URL for the page fetcher
//
// Each stripper only runs when its marker appears in the *original* seed:
//   "www."     -> strip_www
//   "https://" -> strip_scheme
//
// Examples:
//   "https://www.example.com/path" -> "example.com/"
//   "http://www.example.com/path"  -> "example.com"
//   "example.com/page"             -> "example.com/page" (untouched)
pub fn canonicalize_seed(seed: &str) -> String {
    let mut target = seed.to_string();

    if seed.contains("www.") {
        target = strip_www(&target);
    }
    if seed.contains("https://") {
        target = strip_scheme(&target);
    }

    target
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does find() return Option<usize>?
//    - Some(index) when the pattern exists, None when it doesn't
//    - There is no magic "-1" or "npos" value to forget about
//    - The compiler makes us handle the None case before slicing
//
// 2. Is &url[pos + 3..] safe?
//    - pos is where "://" starts, so pos + 3 is right after it
//    - "://" is plain ASCII, so that index is always a valid char boundary
//    - Slicing in the middle of a multi-byte character would panic,
//      which is why we only ever slice next to ASCII delimiters
//
// 3. Why return String instead of &str?
//    - canonicalize_seed builds a new string with format!
//    - Returning owned Strings everywhere keeps the API uniform
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_of_full_url() {
        assert_eq!(domain_of("https://www.example.com/path"), "example.com");
        assert_eq!(domain_of("http://example.com/a/b?q=1"), "example.com");
    }

    #[test]
    fn test_domain_of_without_scheme() {
        assert_eq!(domain_of("example.com/page"), "example.com");
        assert_eq!(domain_of("www.example.com"), "example.com");
        assert_eq!(domain_of("example.com"), "example.com");
    }

    #[test]
    fn test_domain_of_degenerate_input() {
        assert_eq!(domain_of(""), "");
        assert_eq!(domain_of("/only/path"), "");
        assert_eq!(domain_of("https://"), "");
    }

    #[test]
    fn test_domain_of_is_idempotent() {
        for url in [
            "https://www.example.com/path",
            "http://docs.rs/tokio",
            "example.org",
            "www.rust-lang.org/learn",
        ] {
            let once = domain_of(url);
            assert_eq!(domain_of(&once), once, "not idempotent for {}", url);
        }
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com/docs/intro"), "example.com/");
        assert_eq!(strip_scheme("https://example.com"), "example.com/");
        assert_eq!(strip_scheme("example.com"), "example.com/");
    }

    #[test]
    fn test_strip_www() {
        assert_eq!(strip_www("https://www.example.com/docs"), "example.com");
        assert_eq!(strip_www("www.example.com"), "example.com");
        assert_eq!(strip_www("https://example.com"), "example.com");
    }

    #[test]
    fn test_canonicalize_seed() {
        assert_eq!(canonicalize_seed("https://www.example.com/path"), "example.com/");
        assert_eq!(canonicalize_seed("https://example.com/path"), "example.com/");
        assert_eq!(canonicalize_seed("http://www.example.com/path"), "example.com");
        assert_eq!(canonicalize_seed("example.com/page"), "example.com/page");
    }

    #[test]
    fn test_canonicalize_missing_slash_does_not_panic() {
        // No '/' after the host at all
        assert_eq!(canonicalize_seed("https://www.example.com"), "example.com/");
        assert_eq!(canonicalize_seed("https://"), "/");
    }
}
