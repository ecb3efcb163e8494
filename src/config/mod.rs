//! Test suite configuration.
//!
//! # Data Flow
//! ```text
//! suite file (TOML) or built-in suite
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SuiteConfig (validated, immutable)
//!     → harness runner
//! ```
//!
//! # Design Decisions
//! - Settings have defaults to allow minimal suites
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_suite, load_suite, parse_suite, ConfigError};
pub use schema::{CaseConfig, SuiteConfig, SuiteSettings};
