//! urlmatch - Match URLs against `scheme://domain/path` wildcard patterns
//!
//! This library checks whether a URL is covered by one or more match patterns:
//! - Scheme selection (`*`, `http`, `https`) with optional fuzzy http/https
//! - Exact, subdomain-wildcard (`*.example.com`) and any-host (`*`) domains
//! - `*` wildcards in the path
//! - Optional `user[:password]@` credentials in the URL
//! - Multiple patterns, as a comma-separated string or a list
//!
//! # Example
//!
//! ```rust
//! use urlmatch::{url_match, MatchOptions};
//!
//! let options = MatchOptions::default();
//!
//! assert!(url_match("http://*.test.com/*", "http://www.test.com/page", &options).unwrap());
//! assert!(!url_match("http://test.com/*", "https://test.com/", &options).unwrap());
//!
//! let fuzzy = MatchOptions::default().with_fuzzy_scheme(true);
//! assert!(url_match("http://test.com/*", "https://test.com/", &fuzzy).unwrap());
//!
//! // Several patterns are OR-combined
//! let patterns = "http://test.com/*, http://example.com/*";
//! assert!(url_match(patterns, "http://example.com/", &options).unwrap());
//!
//! // Malformed patterns are errors, not silent mismatches
//! assert!(url_match("http://test.com", "http://test.com/", &options).is_err());
//! ```
//!
//! # Pattern Syntax
//!
//! ```text
//! scheme://domain/path
//! ```
//!
//! | Part | Example | Description |
//! |------|---------|-------------|
//! | Scheme | `*://` | `http` or `https` |
//! | Scheme | `https://` | Only `https` (unless fuzzy) |
//! | Domain | `example.com` | Exactly that domain |
//! | Domain | `*.example.com` | The domain and all of its subdomains |
//! | Domain | `*` | Any domain |
//! | Path | `/docs/*` | `*` matches any run of characters |
//!
//! A path without `*` must match the URL's path exactly. With
//! `path_required` turned off, a pattern may stop after the domain and then
//! matches every path on it.
//!
//! The scheme and host of a pattern compile to a small regular expression on
//! a linear-time engine; the path is matched by a single left-to-right scan
//! over its literal segments. Wildcard-heavy patterns cannot blow up on long
//! URLs, and their size does not hit any engine limit.

pub mod cache;
pub mod compile;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use cache::{PatternCache, DEFAULT_CACHE_SIZE};
pub use compile::{compile_pattern, compile_patterns, CompiledPattern, CompiledPatternSet};
pub use error::{BadPatternKind, Result, UrlMatchError};
pub use matcher::{PathTemplate, UrlMatcher};
pub use parser::{parse_match_pattern, DomainPattern, MatchPattern, Scheme};
pub use types::{MatchOptions, PatternInput};

/// Check whether `url` matches any of `patterns`.
///
/// `patterns` is a single pattern, a comma-separated string, or a list. Every
/// pattern is compiled in order and the first malformed one is returned as an
/// error. An empty list matches nothing.
pub fn url_match(
    patterns: impl Into<PatternInput>,
    url: &str,
    options: &MatchOptions,
) -> Result<bool> {
    let set = compile_patterns(patterns, options)?;
    let matched = set.is_match(url);
    tracing::trace!(url, matched, patterns = set.len(), "evaluated url");
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let options = MatchOptions::default();

        let patterns = "http://*.test.com/*, https://example.com/docs/*";
        assert!(url_match(patterns, "http://test.com/", &options).unwrap());
        assert!(url_match(patterns, "http://a.b.test.com/x", &options).unwrap());
        assert!(url_match(patterns, "https://example.com/docs/intro", &options).unwrap());
        assert!(!url_match(patterns, "http://example.com/docs/intro", &options).unwrap());
        assert!(!url_match(patterns, "https://example.com/blog", &options).unwrap());

        let set = compile_patterns(patterns, &options).unwrap();
        assert_eq!(set.len(), 2);
        for url in ["http://test.com/", "https://example.com/docs/", "ftp://x/"] {
            assert_eq!(set.is_match(url), url_match(patterns, url, &options).unwrap());
        }
    }

    #[test]
    fn test_empty_list_is_false() {
        let empty: Vec<String> = Vec::new();
        assert!(!url_match(empty, "http://test.com/", &MatchOptions::default()).unwrap());
    }

    #[test]
    fn test_empty_string_is_bad_pattern() {
        let err = url_match("", "http://test.com/", &MatchOptions::default()).unwrap_err();
        assert_eq!(err.bad_pattern_kind(), Some(BadPatternKind::InvalidScheme));
    }

    #[test]
    fn test_deterministic() {
        let options = MatchOptions::default();
        for _ in 0..3 {
            assert!(url_match("*://*/*", "https://other.com/a", &options).unwrap());
            assert!(!url_match("http://test.com/*", "http://bad.com/", &options).unwrap());
        }
    }
}
