use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BadPatternKind, Result, UrlMatchError};

/// Regex pattern for the scheme prefix of a match pattern
/// Format: (*|http|https)://
static SCHEME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*|https?)://").expect("SCHEME_PATTERN: hardcoded regex is invalid")
});

/// Scheme selector of a match pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `*`: either `http` or `https`
    Any,
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Any => "*",
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Domain selector of a match pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomainPattern {
    /// Bare `*`: any host up to the next `/`
    Any,
    /// `*.example.com`: "example.com" and every subdomain of it
    Subdomains(String),
    /// `example.com`: only "example.com"
    Exact(String),
}

/// A parsed `scheme://domain/path` match pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchPattern {
    /// The pattern as written
    pub raw: String,
    pub scheme: Scheme,
    pub domain: DomainPattern,
    /// Path template following the domain, starting with `/` or empty
    pub path: String,
}

impl MatchPattern {
    /// Whether the pattern carries a path after its domain
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a single match pattern.
///
/// With `path_required`, the domain must be followed by `/`. Without it, the
/// domain may also end the pattern.
pub fn parse_match_pattern(pattern: &str, path_required: bool) -> Result<MatchPattern> {
    let captures = SCHEME_PATTERN
        .captures(pattern)
        .ok_or_else(|| UrlMatchError::bad_pattern(BadPatternKind::InvalidScheme, pattern))?;

    let scheme = match &captures[1] {
        "*" => Scheme::Any,
        "http" => Scheme::Http,
        _ => Scheme::Https,
    };
    let rest = &pattern[captures[0].len()..];

    let (domain, path) = parse_domain(rest, path_required)
        .ok_or_else(|| UrlMatchError::bad_pattern(BadPatternKind::InvalidDomainOrPath, pattern))?;

    Ok(MatchPattern {
        raw: pattern.to_string(),
        scheme,
        domain,
        path: path.to_string(),
    })
}

/// Split the domain selector off the front of `rest`, returning it with the
/// remaining path template.
fn parse_domain(rest: &str, path_required: bool) -> Option<(DomainPattern, &str)> {
    let (domain, remainder) = match rest.strip_prefix('*') {
        Some(after) if after.is_empty() || after.starts_with('/') => (DomainPattern::Any, after),
        Some(after) => {
            let after = after.strip_prefix('.')?;
            let (name, remainder) = split_domain_token(after)?;
            (DomainPattern::Subdomains(name.to_string()), remainder)
        }
        None => {
            let (name, remainder) = split_domain_token(rest)?;
            (DomainPattern::Exact(name.to_string()), remainder)
        }
    };

    let terminated = if path_required {
        remainder.starts_with('/')
    } else {
        remainder.is_empty() || remainder.starts_with('/')
    };

    terminated.then_some((domain, remainder))
}

/// A literal domain token is the longest non-empty run of characters other
/// than `/` and `*`.
fn split_domain_token(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| c == '/' || c == '*').unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}
