//! Error definitions for matching operations.

use thiserror::Error;

/// Errors raised by the matcher before any matching logic runs.
///
/// A pattern that does not match is not an error; it is reported through
/// [`MatchOutcome::matched`](crate::routing::MatchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A required path, URI or pattern argument was empty.
    #[error("invalid argument: {argument} must not be empty")]
    InvalidArgument { argument: &'static str },
}

impl MatchError {
    pub(crate) fn invalid(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }
}

/// Result type for matcher operations.
pub type MatchResult<T> = Result<T, MatchError>;
