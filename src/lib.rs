//! URL pattern matching library.
//!
//! Matches a concrete path or URI against a route pattern made of literal
//! segments and `{name}` placeholders, binding placeholder values into a
//! case-insensitive, multi-valued [`ParameterMap`].
//!
//! ```
//! use url_matcher::match_path;
//!
//! let outcome = match_path("/v1.0/users/42", "/{version}/users/{id}").unwrap();
//! assert!(outcome.is_match());
//! assert_eq!(outcome.params.get("ID"), Some("42"));
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod observability;
pub mod routing;

pub use error::{MatchError, MatchResult};
pub use routing::{match_path, match_uri, MatchOutcome, Matcher, ParameterMap};
