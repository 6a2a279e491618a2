//! Errors that stop a run before any path validation could happen.
//!
//! Every variant is reported as UNKNOWN. Violations of the expected path are
//! not errors; they travel as [`crate::checks::Violation`] inside a
//! [`crate::pattern::MatchOutcome`].

use thiserror::Error;

use crate::config::cli::UsageError;
use crate::config::loader::ConfigError;
use crate::pattern::ParseError;
use crate::report::ReportError;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("Wrong format of hops string: {0}")]
    Pattern(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("mtr failed: {0}")]
    Report(#[from] ReportError),
}
