//! Path normalization and pattern segment classification.
//!
//! # Responsibilities
//! - Strip query string and fragment from a raw path
//! - Split paths and patterns into non-empty segments
//! - Recognize `{name}` placeholders inside a pattern segment
//!
//! # Design Decisions
//! - Placeholder recognition never fails; anything malformed is a literal
//! - No regex, every function is a single linear scan

/// One segment of a split pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    /// Compared case-sensitively against the path segment.
    Literal(&'a str),
    /// Binds the path segment to the contained name.
    Placeholder(&'a str),
}

impl<'a> PatternSegment<'a> {
    /// Classify a pattern segment.
    pub fn classify(segment: &'a str) -> Self {
        match extract_parameter(segment) {
            Some(name) => Self::Placeholder(name),
            None => Self::Literal(segment),
        }
    }
}

/// Cut `url` before the earliest `?` or `#`.
///
/// Returns the input untouched when neither delimiter is present.
///
/// ```
/// use url_matcher::routing::pattern::strip_query_and_fragment;
///
/// assert_eq!(strip_query_and_fragment("/users/42?x=1#y"), "/users/42");
/// assert_eq!(strip_query_and_fragment("/users#top?x"), "/users");
/// assert_eq!(strip_query_and_fragment("?x=1"), "");
/// assert_eq!(strip_query_and_fragment("/users"), "/users");
/// ```
pub fn strip_query_and_fragment(url: &str) -> &str {
    match url.find(['?', '#']) {
        Some(cut) => &url[..cut],
        None => url,
    }
}

/// Split on `/`, discarding empty segments.
///
/// Leading, trailing and repeated slashes all collapse away, so `/a//b/`,
/// `a/b` and `/a/b/` produce the same segments.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Extract the placeholder name from a pattern segment.
///
/// The name is the text strictly between the first `{` and the first `}`
/// after it. Returns `None` when there is no `{`, no closing `}` after it,
/// or the name would be empty.
///
/// ```
/// use url_matcher::routing::pattern::extract_parameter;
///
/// assert_eq!(extract_parameter("{id}"), Some("id"));
/// assert_eq!(extract_parameter("{}"), None);
/// assert_eq!(extract_parameter("{id"), None);
/// assert_eq!(extract_parameter("id}"), None);
/// assert_eq!(extract_parameter("users"), None);
/// ```
pub fn extract_parameter(segment: &str) -> Option<&str> {
    let start = segment.find('{')?;
    let rest = &segment[start + 1..];
    let end = rest.find('}')?;
    (end > 0).then(|| &rest[..end])
}
