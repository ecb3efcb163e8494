//! Test suite schema definitions.
//!
//! A suite is a list of cases, each matching one URL or URI against one
//! pattern and stating the expected outcome. All types derive Serde traits
//! for deserialization from TOML.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for a test suite.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SuiteConfig {
    /// Output settings.
    pub settings: SuiteSettings,

    /// Cases, executed in file order.
    pub cases: Vec<CaseConfig>,
}

/// Output settings for a suite run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SuiteSettings {
    /// Print URL, pattern and bound parameters for each case.
    pub verbose: bool,

    /// Colorize the report.
    pub color: bool,
}

impl Default for SuiteSettings {
    fn default() -> Self {
        Self {
            verbose: true,
            color: true,
        }
    }
}

/// A single match case.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CaseConfig {
    /// Case name shown in the report.
    pub name: String,

    /// Raw path or URL to match.
    pub url: Option<String>,

    /// Absolute URI to match (mutually exclusive with `url`).
    pub uri: Option<String>,

    /// Pattern with `{name}` placeholders.
    #[serde(default)]
    pub pattern: String,

    /// Expected match flag.
    #[serde(default)]
    pub expect_match: bool,

    /// Expected bindings: name -> every value bound under it.
    #[serde(default)]
    pub expect_params: BTreeMap<String, Vec<String>>,

    /// The case expects an invalid-argument error.
    #[serde(default)]
    pub expect_error: bool,

    /// Match through a constructed `Matcher` instead of the stateless form.
    #[serde(default)]
    pub instance: bool,

    /// Free-form note printed with the case.
    pub note: Option<String>,
}
