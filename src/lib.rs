//! MTR path expectation check.
//!
//! Runs `mtr` once against a target and validates the reported path: the
//! ordered hop pattern, per-hop and global latency/loss ceilings, and the
//! routers that must be present.

pub mod checks;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod output;
pub mod pattern;
pub mod report;

pub use checks::{Expectations, Violation};
pub use config::CheckConfig;
pub use error::CheckError;
pub use lifecycle::{run, CheckReport, CheckRequest};
pub use pattern::{compile, match_path, MatchOutcome, PatternToken};
