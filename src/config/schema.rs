//! Configuration schema definitions.
//!
//! This module defines the optional TOML configuration for the check.
//! Every field has a default so the check runs without a config file.

use serde::{Deserialize, Serialize};

use crate::pattern::matcher::DEFAULT_MAX_CANDIDATES;

/// Root configuration for the check.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// How mtr is invoked.
    pub mtr: MtrConfig,

    /// Hop pattern matching limits.
    pub matching: MatchingConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// mtr invocation settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MtrConfig {
    /// Path or name of the mtr binary.
    pub path: String,

    /// Pings sent to each hop (`mtr -c`).
    pub cycles: u32,

    /// Deadline for the whole mtr run in seconds.
    pub timeout_secs: u64,

    /// Skip reverse DNS so hops are reported by address (`mtr -n`).
    pub no_dns: bool,
}

impl Default for MtrConfig {
    fn default() -> Self {
        Self {
            path: "mtr".to_string(),
            cycles: 10,
            timeout_secs: 60,
            no_dns: false,
        }
    }
}

/// Hop pattern matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Upper bound on candidate hop positions tracked at once.
    pub max_candidates: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). Logs go to stderr.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
