//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path or URI
//!     → pattern.rs (strip query/fragment, split into segments)
//!     → matcher.rs (segment-by-segment comparison against a pattern)
//!     → params.rs (placeholder bindings)
//!     → Return: MatchOutcome { matched, params }
//! ```
//!
//! # Design Decisions
//! - One pattern against one path per call; no route table or ranking
//! - No regex in the hot path
//! - Deterministic: same input always produces the same outcome
//! - Matcher state is immutable after construction (shareable across threads)

pub mod matcher;
pub mod params;
pub mod pattern;

pub use matcher::{match_path, match_uri, MatchOutcome, Matcher};
pub use params::ParameterMap;
