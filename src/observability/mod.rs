//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! matcher, config and harness produce:
//!     → tracing events (debug on construction, trace on mismatches)
//!     → logging.rs (subscriber writing to stderr)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Trace-level events on the matching path cost nothing when filtered out

pub mod logging;

pub use logging::{init_logging, DEFAULT_FILTER};
