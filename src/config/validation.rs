//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (cycles > 0, timeout > 0, limits > 0)
//! - Reject unknown log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CheckConfig → Result<(), Vec<ValidationError>>
//! - Runs before mtr is invoked

use thiserror::Error;

use crate::config::schema::CheckConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mtr.path must not be empty")]
    EmptyMtrPath,

    #[error("mtr.cycles must be greater than zero")]
    ZeroCycles,

    #[error("mtr.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("matching.max_candidates must be greater than zero")]
    ZeroCandidateLimit,

    #[error("unknown log level '{0}' (expected one of trace, debug, info, warn, error)")]
    UnknownLogLevel(String),
}

/// Check a configuration for semantic problems.
pub fn validate_config(config: &CheckConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.mtr.path.trim().is_empty() {
        errors.push(ValidationError::EmptyMtrPath);
    }
    if config.mtr.cycles == 0 {
        errors.push(ValidationError::ZeroCycles);
    }
    if config.mtr.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.matching.max_candidates == 0 {
        errors.push(ValidationError::ZeroCandidateLimit);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
