use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::matcher::{PathTemplate, UrlMatcher};
use crate::parser::{parse_match_pattern, DomainPattern, MatchPattern, Scheme};
use crate::types::{MatchOptions, PatternInput};

/// Optional `user[:password]@` prefix. Neither part may be empty or contain
/// `/`, `:` or `.`.
const USER_INFO: &str = r"(?:[^/:.]+(?::[^/:.]+)?@)?";

/// Any number of `label.` prefixes ahead of a subdomain wildcard's domain.
/// Labels cannot contain user-info or query/fragment delimiters.
const SUBDOMAIN_LABELS: &str = r"(?:[^/.@:#?]+\.)*";

/// A single compiled match pattern
///
/// The scheme, user-info and host are checked by an anchored regex over the
/// URL up to its first path `/`; the path by a [`PathTemplate`]. The regex
/// size does not depend on the path, so `*`-heavy patterns stay cheap.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: MatchPattern,
    authority: Regex,
    /// `None` for a domain-only pattern, which accepts every path
    path: Option<PathTemplate>,
}

impl CompiledPattern {
    /// The parsed pattern this matcher was built from
    pub fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    /// The expression matched against `scheme://[user-info]host`
    pub fn authority_regex_str(&self) -> &str {
        self.authority.as_str()
    }

    pub fn is_match(&self, url: &str) -> bool {
        let (authority, path) = split_authority(url);
        self.authority.is_match(authority)
            && self.path.as_ref().map_or(true, |template| template.matches(path))
    }
}

impl UrlMatcher for CompiledPattern {
    fn matches(&self, url: &str) -> bool {
        self.is_match(url)
    }
}

/// OR-combination of compiled patterns, kept in input order
#[derive(Debug, Clone)]
pub struct CompiledPatternSet {
    patterns: Vec<CompiledPattern>,
}

impl CompiledPatternSet {
    /// Whether any pattern matches the URL. An empty set matches nothing.
    pub fn is_match(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(url))
    }

    /// Every pattern that matches the URL, in input order
    pub fn matching_patterns(&self, url: &str) -> Vec<&MatchPattern> {
        self.patterns
            .iter()
            .filter(|p| p.is_match(url))
            .map(|p| &p.pattern)
            .collect()
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get the number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl UrlMatcher for CompiledPatternSet {
    fn matches(&self, url: &str) -> bool {
        self.is_match(url)
    }
}

/// Compile a single match pattern
pub fn compile_pattern(pattern: &str, options: &MatchOptions) -> Result<CompiledPattern> {
    let parsed = match parse_match_pattern(pattern, options.path_required) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(pattern, error = %e, "rejected match pattern");
            return Err(e);
        }
    };

    let source = build_authority_source(&parsed, options);
    let authority = Regex::new(&source)?;
    let path = parsed.has_path().then(|| PathTemplate::new(&parsed.path));
    debug!(
        pattern,
        authority = %source,
        wildcards = path.as_ref().map_or(0, PathTemplate::wildcard_count),
        "compiled match pattern"
    );

    Ok(CompiledPattern {
        pattern: parsed,
        authority,
        path,
    })
}

/// Compile one or more match patterns into a combined matcher.
///
/// Patterns are compiled in order; the first invalid one aborts the whole set.
pub fn compile_patterns(
    patterns: impl Into<PatternInput>,
    options: &MatchOptions,
) -> Result<CompiledPatternSet> {
    let patterns: PatternInput = patterns.into();
    let compiled = patterns
        .into_patterns()
        .iter()
        .map(|p| compile_pattern(p, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(CompiledPatternSet { patterns: compiled })
}

/// Split a URL before the first `/` following `://`. The path half is empty
/// when there is no such `/`.
fn split_authority(url: &str) -> (&str, &str) {
    let host_start = url.find("://").map_or(0, |i| i + 3);
    match url[host_start..].find('/') {
        Some(pos) => url.split_at(host_start + pos),
        None => (url, ""),
    }
}

/// Translate the scheme and domain of a parsed pattern into an anchored
/// regular expression
fn build_authority_source(pattern: &MatchPattern, options: &MatchOptions) -> String {
    let mut source = String::from("^");

    if pattern.scheme == Scheme::Any || options.fuzzy_scheme {
        source.push_str("https?");
    } else {
        source.push_str(pattern.scheme.as_str());
    }
    source.push_str("://");

    if options.http_auth_allowed {
        source.push_str(USER_INFO);
    }

    match &pattern.domain {
        DomainPattern::Any => source.push_str("[^/]+"),
        DomainPattern::Subdomains(domain) => {
            source.push_str(SUBDOMAIN_LABELS);
            source.push_str(&regex::escape(domain));
        }
        DomainPattern::Exact(domain) => source.push_str(&regex::escape(domain)),
    }
    source.push('$');

    source
}
