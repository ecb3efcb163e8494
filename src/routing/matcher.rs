//! Path matching against `{name}` route patterns.
//!
//! # Responsibilities
//! - Normalize and tokenize a path or URI once at construction
//! - Compare path segments against pattern segments position by position
//! - Bind placeholder segments into a [`ParameterMap`]
//!
//! # Design Decisions
//! - Segment counts must be equal; there are no optional or catch-all segments
//! - Literal segments are compared case-sensitively (ordinal)
//! - Values are bound verbatim, never percent-decoded
//! - A failed match never leaks bindings from earlier positions

use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::error::{MatchError, MatchResult};
use crate::routing::params::ParameterMap;
use crate::routing::pattern::{split_segments, strip_query_and_fragment, PatternSegment};

/// Outcome of matching one path against one pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    /// True if every segment matched.
    pub matched: bool,
    /// Bound placeholders. Always empty when `matched` is false.
    pub params: ParameterMap,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        self.matched
    }

    fn no_match() -> Self {
        Self::default()
    }
}

/// A path captured once and matched against any number of patterns.
///
/// ```
/// use url_matcher::Matcher;
///
/// let matcher = Matcher::new("/v1.0/users/42?expand=true").unwrap();
/// let outcome = matcher.match_pattern("/{version}/users/{id}").unwrap();
///
/// assert!(outcome.is_match());
/// assert_eq!(outcome.params.get("Version"), Some("v1.0"));
/// assert_eq!(outcome.params.get("id"), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    url: String,
    segments: Vec<String>,
}

impl Matcher {
    /// Create a matcher from a raw path or URL string.
    ///
    /// Query string and fragment are stripped before tokenizing.
    pub fn new(url: &str) -> MatchResult<Self> {
        if url.is_empty() {
            return Err(MatchError::invalid("url"));
        }
        Ok(Self::from_normalized(strip_query_and_fragment(url)))
    }

    /// Create a matcher from the path-and-query of a URI.
    ///
    /// A `&Url` is always present and an empty path simply yields no
    /// segments, so this never fails. It returns a `Result` to share the
    /// signature of [`Matcher::new`] and back `TryFrom<&Url>`.
    pub fn from_uri(uri: &Url) -> MatchResult<Self> {
        Ok(Self::from_normalized(strip_query_and_fragment(
            &path_and_query(uri),
        )))
    }

    fn from_normalized(url: &str) -> Self {
        let segments: Vec<String> = split_segments(url).map(str::to_owned).collect();
        tracing::debug!(url, segments = segments.len(), "Matcher created");
        Self {
            url: url.to_owned(),
            segments,
        }
    }

    /// The normalized path this matcher was built from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// A fresh copy of the path segments.
    pub fn segments(&self) -> Vec<String> {
        self.segments.clone()
    }

    /// Match the captured path against `pattern`.
    pub fn match_pattern(&self, pattern: &str) -> MatchResult<MatchOutcome> {
        if pattern.is_empty() {
            return Err(MatchError::invalid("pattern"));
        }
        let path: Vec<&str> = self.segments.iter().map(String::as_str).collect();
        Ok(match_segments(&path, pattern))
    }
}

impl FromStr for Matcher {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&Url> for Matcher {
    type Error = MatchError;

    fn try_from(uri: &Url) -> Result<Self, Self::Error> {
        Self::from_uri(uri)
    }
}

/// Match a raw path or URL string against `pattern` without building a [`Matcher`].
///
/// ```
/// use url_matcher::match_path;
///
/// let outcome = match_path("/users/42/extra", "/users/{id}").unwrap();
/// assert!(!outcome.is_match());
/// assert!(outcome.params.is_empty());
/// ```
pub fn match_path(url: &str, pattern: &str) -> MatchResult<MatchOutcome> {
    if url.is_empty() {
        return Err(MatchError::invalid("url"));
    }
    if pattern.is_empty() {
        return Err(MatchError::invalid("pattern"));
    }
    let path: Vec<&str> = split_segments(strip_query_and_fragment(url)).collect();
    Ok(match_segments(&path, pattern))
}

/// Match the path-and-query of a URI against `pattern`.
///
/// Agrees with [`Matcher::from_uri`] followed by [`Matcher::match_pattern`],
/// including URIs whose path is empty.
pub fn match_uri(uri: &Url, pattern: &str) -> MatchResult<MatchOutcome> {
    if pattern.is_empty() {
        return Err(MatchError::invalid("pattern"));
    }
    let raw = path_and_query(uri);
    let path: Vec<&str> = split_segments(strip_query_and_fragment(&raw)).collect();
    Ok(match_segments(&path, pattern))
}

fn path_and_query(uri: &Url) -> String {
    match uri.query() {
        Some(query) => format!("{}?{}", uri.path(), query),
        None => uri.path().to_owned(),
    }
}

fn match_segments(path: &[&str], pattern: &str) -> MatchOutcome {
    let pattern: Vec<&str> = split_segments(pattern).collect();

    if path.len() != pattern.len() {
        tracing::trace!(
            path_segments = path.len(),
            pattern_segments = pattern.len(),
            "Segment count mismatch"
        );
        return MatchOutcome::no_match();
    }

    let mut params = ParameterMap::new();
    for (position, (&value, &segment)) in path.iter().zip(&pattern).enumerate() {
        match PatternSegment::classify(segment) {
            PatternSegment::Placeholder(name) => params.insert(name, value),
            PatternSegment::Literal(literal) if literal == value => {}
            PatternSegment::Literal(literal) => {
                tracing::trace!(position, expected = literal, actual = value, "Literal mismatch");
                return MatchOutcome::no_match();
            }
        }
    }

    MatchOutcome {
        matched: true,
        params,
    }
}
