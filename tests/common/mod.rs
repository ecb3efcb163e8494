//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;
use url_matcher::MatchOutcome;

/// Collect the bound entries of an outcome in insertion order.
#[allow(dead_code)]
pub fn entries(outcome: &MatchOutcome) -> Vec<(String, String)> {
    outcome
        .params
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Write `content` to a temporary `.toml` file that lives as long as the handle.
#[allow(dead_code)]
pub fn suite_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
