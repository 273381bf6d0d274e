/// Trait for URL matchers
pub trait UrlMatcher: Send + Sync {
    /// Check if the URL matches this matcher
    fn matches(&self, url: &str) -> bool;
}

/// Path template split on `*` into literal segments.
///
/// `/a*b*c` becomes `["/a", "b", "c"]`: the first segment must be a prefix,
/// the last a suffix, and the ones in between must appear in order. Matching
/// is a single left-to-right scan, linear in the text length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<String>,
}

impl PathTemplate {
    pub fn new(template: &str) -> Self {
        Self {
            segments: template.split('*').map(String::from).collect(),
        }
    }

    /// Number of `*` wildcards in the template
    pub fn wildcard_count(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn matches(&self, text: &str) -> bool {
        let (first, rest) = match self.segments.split_first() {
            Some(split) => split,
            None => return text.is_empty(),
        };

        let Some(mut remaining) = text.strip_prefix(first.as_str()) else {
            return false;
        };

        let Some((last, middle)) = rest.split_last() else {
            // No wildcard: the template is the whole text
            return remaining.is_empty();
        };

        let Some(body) = remaining.strip_suffix(last.as_str()) else {
            return false;
        };
        remaining = body;

        // Taking the leftmost occurrence of each middle segment leaves the
        // most room for the ones after it.
        for segment in middle {
            match remaining.find(segment.as_str()) {
                Some(pos) => remaining = &remaining[pos + segment.len()..],
                None => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_template() {
        let template = PathTemplate::new("/exact/path");
        assert_eq!(template.wildcard_count(), 0);
        assert!(template.matches("/exact/path"));
        assert!(!template.matches("/exact/path/"));
        assert!(!template.matches("/exact"));
    }

    #[test]
    fn test_empty_template() {
        let template = PathTemplate::new("");
        assert!(template.matches(""));
        assert!(!template.matches("/"));
    }

    #[test]
    fn test_trailing_wildcard() {
        let template = PathTemplate::new("/*");
        assert!(template.matches("/"));
        assert!(template.matches("/longer/path"));
        assert!(!template.matches(""));
    }

    #[test]
    fn test_middle_wildcards() {
        let template = PathTemplate::new("/a*b*c");
        assert!(template.matches("/abc"));
        assert!(template.matches("/a/x/b/y/c"));
        assert!(!template.matches("/a/x/b/y/cd"));
        assert!(!template.matches("/ac"));
        assert!(!template.matches("/acb"));
    }

    #[test]
    fn test_prefix_and_suffix_do_not_overlap() {
        // "/ab" could serve as both prefix "/ab" and suffix "b" only by
        // sharing the "b".
        let template = PathTemplate::new("/ab*b");
        assert!(!template.matches("/ab"));
        assert!(template.matches("/abb"));
    }

    #[test]
    fn test_consecutive_wildcards() {
        let template = PathTemplate::new("/a**b");
        assert_eq!(template.wildcard_count(), 2);
        assert!(template.matches("/ab"));
        assert!(template.matches("/a-b"));
    }

    #[test]
    fn test_regex_syntax_is_literal() {
        let template = PathTemplate::new("/a.b?c=(1)+[x]");
        assert!(template.matches("/a.b?c=(1)+[x]"));
        assert!(!template.matches("/aXb?c=(1)+[x]"));
    }
}
