//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line (clap)
//!     → cli.rs (expectation flags → CheckRequest, overrides)
//!
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CheckConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; the check runs without a config file
//! - Command-line flags override file values
//! - Validation separates syntactic (serde) from semantic checks

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::{CliArgs, UsageError};
pub use loader::ConfigError;
pub use schema::CheckConfig;
pub use schema::MatchingConfig;
pub use schema::MtrConfig;
pub use schema::ObservabilityConfig;
