//! Suite harness.
//!
//! # Data Flow
//! ```text
//! SuiteConfig
//!     → runner.rs (execute each case, time it, compare expectations)
//!     → SuiteReport
//!     → report.rs (colorized per-case blocks and summary)
//!     → exit status (0 when every case passed)
//! ```
//!
//! # Design Decisions
//! - Cases are independent; an error in one never aborts the run
//! - Report rendering is separate from execution so it can target any writer

pub mod report;
pub mod runner;

pub use report::{paint, write_report};
pub use runner::{run_case, run_suite, CaseDetail, CaseResult, SuiteReport};
