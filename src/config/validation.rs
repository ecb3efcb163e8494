//! Suite validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Each case names exactly one input (`url` or `uri`)
//! - URIs parse as absolute URLs
//! - Expectations do not contradict each other
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SuiteConfig → Result<(), Vec<ValidationError>>
//! - Empty `url` and `pattern` are legal: they express invalid-argument cases

use std::collections::HashSet;
use std::fmt;

use url::Url;

use crate::config::schema::{CaseConfig, SuiteConfig};

/// A single semantic problem in a suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName { index: usize },
    DuplicateName(String),
    MissingInput(String),
    ConflictingInput(String),
    InvalidUri { case: String, reason: String },
    UnexpectedParams(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName { index } => write!(f, "case #{} has an empty name", index + 1),
            ValidationError::DuplicateName(name) => write!(f, "duplicate case name '{}'", name),
            ValidationError::MissingInput(name) => {
                write!(f, "case '{}' sets neither url nor uri", name)
            }
            ValidationError::ConflictingInput(name) => {
                write!(f, "case '{}' sets both url and uri", name)
            }
            ValidationError::InvalidUri { case, reason } => {
                write!(f, "case '{}' has an invalid uri: {}", case, reason)
            }
            ValidationError::UnexpectedParams(name) => write!(
                f,
                "case '{}' lists expect_params but expects no match",
                name
            ),
        }
    }
}

/// Validate every case in the suite.
pub fn validate_suite(suite: &SuiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, case) in suite.cases.iter().enumerate() {
        if case.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(case.name.as_str()) {
            errors.push(ValidationError::DuplicateName(case.name.clone()));
        }
        validate_case(case, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_case(case: &CaseConfig, errors: &mut Vec<ValidationError>) {
    match (&case.url, &case.uri) {
        (None, None) => errors.push(ValidationError::MissingInput(case.name.clone())),
        (Some(_), Some(_)) => errors.push(ValidationError::ConflictingInput(case.name.clone())),
        (None, Some(uri)) => {
            if let Err(e) = Url::parse(uri) {
                errors.push(ValidationError::InvalidUri {
                    case: case.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
        (Some(_), None) => {}
    }

    if !case.expect_params.is_empty() && (case.expect_error || !case.expect_match) {
        errors.push(ValidationError::UnexpectedParams(case.name.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str) -> CaseConfig {
        CaseConfig {
            name: name.to_string(),
            url: Some("/a".to_string()),
            pattern: "/a".to_string(),
            expect_match: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_suite() {
        let suite = SuiteConfig {
            cases: vec![case("one"), case("two")],
            ..Default::default()
        };
        assert!(validate_suite(&suite).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut missing = case("missing");
        missing.url = None;

        let mut both = case("both");
        both.uri = Some("http://host/a".to_string());

        let mut bad_uri = case("bad uri");
        bad_uri.url = None;
        bad_uri.uri = Some("/relative".to_string());

        let mut params = case("params");
        params.expect_match = false;
        params.expect_params.insert("id".into(), vec!["1".into()]);

        let suite = SuiteConfig {
            cases: vec![case(""), case("dup"), case("dup"), missing, both, bad_uri, params],
            ..Default::default()
        };

        let errors = validate_suite(&suite).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[0], ValidationError::EmptyName { index: 0 });
        assert_eq!(errors[1], ValidationError::DuplicateName("dup".into()));
        assert_eq!(errors[2], ValidationError::MissingInput("missing".into()));
        assert_eq!(errors[3], ValidationError::ConflictingInput("both".into()));
        assert!(matches!(errors[4], ValidationError::InvalidUri { .. }));
        assert_eq!(errors[5], ValidationError::UnexpectedParams("params".into()));
    }

    #[test]
    fn test_empty_url_and_pattern_allowed() {
        let mut empty = case("empty");
        empty.url = Some(String::new());
        empty.pattern = String::new();
        empty.expect_match = false;
        empty.expect_error = true;

        let suite = SuiteConfig {
            cases: vec![empty],
            ..Default::default()
        };
        assert!(validate_suite(&suite).is_ok());
    }
}
