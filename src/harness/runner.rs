//! Suite execution.

use std::time::{Duration, Instant};

use url::Url;

use crate::config::{CaseConfig, SuiteConfig};
use crate::error::MatchResult;
use crate::routing::{match_path, match_uri, MatchOutcome, Matcher, ParameterMap};

/// What a case matched and what it bound.
#[derive(Debug, Clone, Default)]
pub struct CaseDetail {
    pub target: String,
    pub pattern: String,
    /// `None` when the matcher rejected its arguments.
    pub matched: Option<bool>,
    pub params: ParameterMap,
    pub note: Option<String>,
}

/// Result of one case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub elapsed: Duration,
    pub detail: CaseDetail,
    /// Error returned by the matcher, expected or not.
    pub error: Option<String>,
    /// Why the case failed.
    pub failure: Option<String>,
}

/// Results of a whole suite run.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub results: Vec<CaseResult>,
    pub total_elapsed: Duration,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Run every case in order. A failing case never stops the run.
pub fn run_suite(suite: &SuiteConfig) -> SuiteReport {
    let started = Instant::now();
    let results: Vec<CaseResult> = suite.cases.iter().map(run_case).collect();
    let report = SuiteReport {
        results,
        total_elapsed: started.elapsed(),
    };

    tracing::info!(
        total = report.total(),
        passed = report.passed(),
        failed = report.failed(),
        "Suite finished"
    );
    report
}

/// Run a single case.
pub fn run_case(case: &CaseConfig) -> CaseResult {
    let started = Instant::now();
    let attempt = execute(case);
    let elapsed = started.elapsed();

    let mut detail = CaseDetail {
        target: case.uri.clone().or_else(|| case.url.clone()).unwrap_or_default(),
        pattern: case.pattern.clone(),
        note: case.note.clone(),
        ..Default::default()
    };

    let (error, failure) = match attempt {
        Err(setup) => (None, Some(setup)),
        Ok(Err(e)) if case.expect_error => (Some(e.to_string()), None),
        Ok(Err(e)) => (Some(e.to_string()), Some(format!("unexpected error: {}", e))),
        Ok(Ok(outcome)) => {
            let failure = if case.expect_error {
                Some("expected an invalid-argument error".to_string())
            } else {
                check_outcome(case, &outcome)
            };
            detail.matched = Some(outcome.matched);
            detail.params = outcome.params;
            (None, failure)
        }
    };

    let passed = failure.is_none();
    tracing::debug!(case = %case.name, passed, elapsed_us = elapsed.as_micros() as u64, "Case finished");

    CaseResult {
        name: case.name.clone(),
        passed,
        elapsed,
        detail,
        error,
        failure,
    }
}

/// The outer error means the case itself could not be set up.
fn execute(case: &CaseConfig) -> Result<MatchResult<MatchOutcome>, String> {
    let pattern = case.pattern.as_str();

    match (&case.url, &case.uri) {
        (Some(url), None) if case.instance => {
            Ok(Matcher::new(url).and_then(|m| m.match_pattern(pattern)))
        }
        (Some(url), None) => Ok(match_path(url, pattern)),
        (None, Some(uri)) => {
            let uri = Url::parse(uri).map_err(|e| format!("invalid uri: {}", e))?;
            if case.instance {
                Ok(Matcher::from_uri(&uri).and_then(|m| m.match_pattern(pattern)))
            } else {
                Ok(match_uri(&uri, pattern))
            }
        }
        _ => Err("case must set exactly one of url or uri".to_string()),
    }
}

fn check_outcome(case: &CaseConfig, outcome: &MatchOutcome) -> Option<String> {
    if outcome.matched != case.expect_match {
        return Some(format!(
            "expected matched={}, got matched={}",
            case.expect_match, outcome.matched
        ));
    }
    if !outcome.matched && !outcome.params.is_empty() {
        return Some(format!(
            "failed match returned {} parameter(s)",
            outcome.params.len()
        ));
    }
    case.expect_params.iter().find_map(|(name, expected)| {
        let actual = outcome.params.get_all(name);
        (actual != *expected).then(|| {
            format!(
                "parameter '{}': expected {:?}, got {:?}",
                name, expected, actual
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(url: &str, pattern: &str, expect_match: bool) -> CaseConfig {
        CaseConfig {
            name: format!("{} ~ {}", url, pattern),
            url: Some(url.to_string()),
            pattern: pattern.to_string(),
            expect_match,
            ..Default::default()
        }
    }

    #[test]
    fn test_passing_case() {
        let mut c = case("/users/42", "/users/{id}", true);
        c.expect_params.insert("ID".into(), vec!["42".into()]);

        let result = run_case(&c);
        assert!(result.passed, "{:?}", result.failure);
        assert_eq!(result.detail.matched, Some(true));
        assert_eq!(result.detail.params.get("id"), Some("42"));
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let result = run_case(&case("/users/42", "/posts/{id}", true));
        assert!(!result.passed);
        assert_eq!(
            result.failure.as_deref(),
            Some("expected matched=true, got matched=false")
        );
    }

    #[test]
    fn test_wrong_parameter_fails() {
        let mut c = case("/users/42", "/users/{id}", true);
        c.expect_params.insert("id".into(), vec!["43".into()]);

        let result = run_case(&c);
        assert!(!result.passed);
        assert!(result.failure.unwrap().starts_with("parameter 'id'"));
    }

    #[test]
    fn test_expected_error() {
        let mut c = case("/users", "", false);
        c.expect_error = true;

        let result = run_case(&c);
        assert!(result.passed);
        assert_eq!(result.detail.matched, None);
        assert_eq!(
            result.error.as_deref(),
            Some("invalid argument: pattern must not be empty")
        );
    }

    #[test]
    fn test_unexpected_error_fails() {
        let result = run_case(&case("", "/users", false));
        assert!(!result.passed);
        assert!(result.failure.unwrap().starts_with("unexpected error"));
    }

    #[test]
    fn test_missing_expected_error_fails() {
        let mut c = case("/users", "/users", true);
        c.expect_error = true;
        assert!(!run_case(&c).passed);
    }

    #[test]
    fn test_uri_instance_case() {
        let c = CaseConfig {
            name: "uri".into(),
            uri: Some("http://localhost:8000/v1.0/users/42".into()),
            pattern: "/{version}/users/{id}".into(),
            expect_match: true,
            instance: true,
            ..Default::default()
        };
        let result = run_case(&c);
        assert!(result.passed);
        assert_eq!(result.detail.target, "http://localhost:8000/v1.0/users/42");
    }

    #[test]
    fn test_unparsable_uri_fails_case() {
        let c = CaseConfig {
            name: "bad".into(),
            uri: Some("not a uri".into()),
            pattern: "/".into(),
            ..Default::default()
        };
        let result = run_case(&c);
        assert!(!result.passed);
        assert!(result.failure.unwrap().starts_with("invalid uri"));
    }

    #[test]
    fn test_report_counts() {
        let suite = SuiteConfig {
            cases: vec![
                case("/a", "/a", true),
                case("/a", "/b", true),
                case("/a", "/{x}", true),
            ],
            ..Default::default()
        };
        let report = run_suite(&suite);
        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }
}
