use std::fmt;

use thiserror::Error;

/// Classifies malformed match patterns for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadPatternKind {
    /// Pattern does not start with `*://`, `http://` or `https://`
    InvalidScheme,
    /// Domain token could not be parsed, or a required path is missing
    InvalidDomainOrPath,
}

impl fmt::Display for BadPatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadPatternKind::InvalidScheme => f.write_str("invalid scheme"),
            BadPatternKind::InvalidDomainOrPath => f.write_str("invalid domain or path"),
        }
    }
}

/// urlmatch error types
#[derive(Error, Debug)]
pub enum UrlMatchError {
    #[error("Bad match pattern ({kind}): {pattern}")]
    BadPattern {
        kind: BadPatternKind,
        pattern: String,
    },

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

impl UrlMatchError {
    pub(crate) fn bad_pattern(kind: BadPatternKind, pattern: &str) -> Self {
        UrlMatchError::BadPattern {
            kind,
            pattern: pattern.to_string(),
        }
    }

    /// Returns the kind of pattern failure, if this is a `BadPattern` error.
    pub fn bad_pattern_kind(&self) -> Option<BadPatternKind> {
        match self {
            UrlMatchError::BadPattern { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UrlMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_pattern_kind_is_matchable() {
        let err = UrlMatchError::bad_pattern(BadPatternKind::InvalidScheme, "bad://test.com/*");
        match &err {
            UrlMatchError::BadPattern { kind, pattern } => {
                assert!(matches!(kind, BadPatternKind::InvalidScheme));
                assert_eq!(pattern, "bad://test.com/*");
            }
            _ => panic!("expected BadPattern"),
        }
        assert_eq!(err.bad_pattern_kind(), Some(BadPatternKind::InvalidScheme));
    }

    #[test]
    fn test_bad_pattern_display_includes_pattern() {
        let err =
            UrlMatchError::bad_pattern(BadPatternKind::InvalidDomainOrPath, "http://test.com");
        let display = format!("{}", err);
        assert!(display.contains("http://test.com"), "got: {}", display);
        assert!(display.contains("invalid domain or path"), "got: {}", display);
    }

    #[test]
    fn test_regex_error_has_no_pattern_kind() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err = UrlMatchError::from(regex_err);
        assert!(err.bad_pattern_kind().is_none());
        assert!(format!("{}", err).starts_with("Regex error"));
    }
}
