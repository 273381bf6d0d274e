use serde::{Deserialize, Serialize};

/// Options applied uniformly to every pattern of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Every pattern must contain a path after the domain (default: true)
    pub path_required: bool,
    /// Treat `http` and `https` as interchangeable (default: false)
    pub fuzzy_scheme: bool,
    /// Accept a `user[:password]@` prefix before the host (default: true)
    pub http_auth_allowed: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            path_required: true,
            fuzzy_scheme: false,
            http_auth_allowed: true,
        }
    }
}

impl MatchOptions {
    pub fn with_path_required(mut self, path_required: bool) -> Self {
        self.path_required = path_required;
        self
    }

    pub fn with_fuzzy_scheme(mut self, fuzzy_scheme: bool) -> Self {
        self.fuzzy_scheme = fuzzy_scheme;
        self
    }

    pub fn with_http_auth_allowed(mut self, http_auth_allowed: bool) -> Self {
        self.http_auth_allowed = http_auth_allowed;
        self
    }
}

/// One or more match patterns.
///
/// A single string is split on `,` with each segment trimmed, so
/// `"http://a.com/*, http://b.com/*"` and `["http://a.com/*", "http://b.com/*"]`
/// describe the same set. List elements are taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternInput {
    Single(String),
    Many(Vec<String>),
}

impl PatternInput {
    /// Resolve into the ordered list of individual patterns.
    pub fn into_patterns(self) -> Vec<String> {
        match self {
            PatternInput::Single(s) => s.split(',').map(|p| p.trim().to_string()).collect(),
            PatternInput::Many(list) => list,
        }
    }
}

impl From<&str> for PatternInput {
    fn from(s: &str) -> Self {
        PatternInput::Single(s.to_string())
    }
}

impl From<String> for PatternInput {
    fn from(s: String) -> Self {
        PatternInput::Single(s)
    }
}

impl From<&String> for PatternInput {
    fn from(s: &String) -> Self {
        PatternInput::Single(s.clone())
    }
}

impl From<Vec<String>> for PatternInput {
    fn from(list: Vec<String>) -> Self {
        PatternInput::Many(list)
    }
}

impl From<Vec<&str>> for PatternInput {
    fn from(list: Vec<&str>) -> Self {
        PatternInput::Many(list.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for PatternInput {
    fn from(list: &[&str]) -> Self {
        PatternInput::Many(list.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for PatternInput {
    fn from(list: &[String]) -> Self {
        PatternInput::Many(list.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for PatternInput {
    fn from(list: [&str; N]) -> Self {
        PatternInput::Many(list.iter().map(|s| s.to_string()).collect())
    }
}
