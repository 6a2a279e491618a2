//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the configuration file, if one was given
//! - Layer command-line overrides on top
//! - Validate the merged result
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and reported as UNKNOWN
//! - Overrides are validated together with file values

use crate::config::cli::CliArgs;
use crate::config::loader::{read_config, ConfigError};
use crate::config::schema::CheckConfig;
use crate::config::validation::validate_config;

/// Build the effective configuration for this run.
pub fn load_configuration(cli: &CliArgs) -> Result<CheckConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => CheckConfig::default(),
    };

    cli.apply_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
