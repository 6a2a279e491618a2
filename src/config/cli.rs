//! Command-line interface.
//!
//! Flags follow the usual monitoring-plugin layout: `-H` names the target,
//! `-j/-l/-p/-r` carry the expectations. Everything is parsed here, before
//! mtr runs, so a bad flag never costs a probe.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::checks::{Expectations, GlobalThresholds, RouterSet};
use crate::config::schema::CheckConfig;
use crate::error::CheckError;
use crate::lifecycle::CheckRequest;
use crate::pattern::compile;
use crate::report::AddressFamily;

/// Problems with the command line itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("No host was given!")]
    MissingHost,

    #[error("At least one expectation (-j, -l, -p, -r) must be given!")]
    NoExpectation,

    #[error("The maximum expected {name} must be a number, got '{value}'!")]
    InvalidThreshold { name: &'static str, value: String },

    #[error("{0}")]
    Arguments(String),
}

#[derive(Parser, Debug, Default)]
#[command(name = "check_mtr", version)]
#[command(
    about = "Monitoring check that compares the expected hops, latency and packet loss to the actual mtr results",
    long_about = None
)]
pub struct CliArgs {
    /// Host to run mtr against
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Expected hops, e.g. "r1,*,r4[20:5],*1-2,r7"
    #[arg(short, long)]
    pub jumps: Option<String>,

    /// Maximum expected average latency of every hop, in ms
    #[arg(short, long)]
    pub latency: Option<String>,

    /// Maximum expected packet loss of every hop, in percent
    #[arg(short, long)]
    pub packetloss: Option<String>,

    /// Routers that must be in the routing path, e.g. "[r1, r2]"
    #[arg(short, long)]
    pub routers: Option<String>,

    /// Use IPv4 for mtr
    #[arg(short = '4', long)]
    pub ipv4: bool,

    /// Use IPv6 for mtr
    #[arg(short = '6', long)]
    pub ipv6: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// mtr binary to run (overrides mtr.path)
    #[arg(long)]
    pub mtr_path: Option<String>,

    /// Pings per hop (overrides mtr.cycles)
    #[arg(long)]
    pub cycles: Option<u32>,

    /// Deadline for mtr in seconds (overrides mtr.timeout_secs)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Report hops by address instead of name (overrides mtr.no_dns)
    #[arg(short = 'n', long)]
    pub no_dns: bool,

    /// Log level for stderr diagnostics (overrides observability.log_level)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Turn the expectation flags into a validated request.
    pub fn to_request(&self) -> Result<CheckRequest, CheckError> {
        let host = self.host.clone().ok_or(UsageError::MissingHost)?;

        if self.jumps.is_none()
            && self.latency.is_none()
            && self.packetloss.is_none()
            && self.routers.is_none()
        {
            return Err(UsageError::NoExpectation.into());
        }

        let pattern = self.jumps.as_deref().map(compile).transpose()?;
        let thresholds = GlobalThresholds {
            max_latency_ms: parse_threshold("latency", self.latency.as_deref())?,
            max_loss_percent: parse_threshold("packet loss", self.packetloss.as_deref())?,
        };
        let routers = self.routers.as_deref().map(RouterSet::parse);

        Ok(CheckRequest {
            host,
            family: AddressFamily::from_flags(self.ipv4, self.ipv6),
            expectations: Expectations {
                pattern,
                thresholds,
                routers,
            },
        })
    }

    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut CheckConfig) {
        if let Some(path) = &self.mtr_path {
            config.mtr.path = path.clone();
        }
        if let Some(cycles) = self.cycles {
            config.mtr.cycles = cycles;
        }
        if let Some(timeout) = self.timeout {
            config.mtr.timeout_secs = timeout;
        }
        if self.no_dns {
            config.mtr.no_dns = true;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

fn parse_threshold(name: &'static str, value: Option<&str>) -> Result<Option<f64>, UsageError> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| UsageError::InvalidThreshold {
                    name,
                    value: raw.to_string(),
                })
        })
        .transpose()
}
