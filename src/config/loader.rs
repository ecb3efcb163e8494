//! Suite loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SuiteConfig;
use crate::config::validation::{validate_suite, ValidationError};

/// Built-in suite shipped with the binary.
const DEFAULT_SUITE: &str = include_str!("../../suites/default.toml");

/// Error type for suite loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Suite file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Suite is not valid TOML or does not fit the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Suite parsed but failed semantic checks.
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate a suite from a TOML file.
pub fn load_suite(path: &Path) -> Result<SuiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_suite(&content)
}

/// Parse and validate a suite from TOML text.
pub fn parse_suite(content: &str) -> Result<SuiteConfig, ConfigError> {
    let suite: SuiteConfig = toml::from_str(content)?;

    validate_suite(&suite).map_err(ConfigError::Validation)?;

    Ok(suite)
}

/// The built-in suite.
pub fn default_suite() -> Result<SuiteConfig, ConfigError> {
    parse_suite(DEFAULT_SUITE)
}
