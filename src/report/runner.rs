//! mtr invocation.
//!
//! # Responsibilities
//! - Build the mtr command line from configuration
//! - Run mtr once, bounded by the configured deadline
//! - Decode its JSON report
//!
//! # Design Decisions
//! - Exactly one invocation per run, never retried
//! - Any failure (spawn, timeout, exit status, bad JSON) ends the run
//! - The child is killed if the deadline passes

use std::process::Stdio;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::process::Command;
use tokio::time;

use crate::config::schema::MtrConfig;
use crate::report::types::{MtrDocument, MtrReport};

/// IP version mtr should probe with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressFamily {
    #[default]
    V4,
    V6,
}

impl AddressFamily {
    /// IPv6 only when asked for alone; IPv4 otherwise.
    pub fn from_flags(ipv4: bool, ipv6: bool) -> Self {
        if ipv6 && !ipv4 {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        }
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "-4",
            AddressFamily::V6 => "-6",
        }
    }
}

/// Errors from running mtr or decoding its output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("mtr did not finish within {0} seconds")]
    Timeout(u64),

    #[error("mtr exited with {status}: {stderr}")]
    NonZeroExit { status: String, stderr: String },

    #[error("could not parse mtr report: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Runs mtr against a single target.
#[derive(Debug, Clone)]
pub struct MtrRunner {
    config: MtrConfig,
}

impl MtrRunner {
    pub fn new(config: MtrConfig) -> Self {
        Self { config }
    }

    /// Arguments passed to mtr, target last.
    pub fn args(&self, host: &str, family: AddressFamily) -> Vec<String> {
        let mut args = vec![
            "--json".to_string(),
            "-c".to_string(),
            self.config.cycles.to_string(),
        ];
        if self.config.no_dns {
            args.push("-n".to_string());
        }
        args.push(family.as_flag().to_string());
        args.push(host.to_string());
        args
    }

    /// Run mtr and decode the report.
    pub async fn run(&self, host: &str, family: AddressFamily) -> Result<MtrReport, ReportError> {
        let args = self.args(host, family);
        tracing::info!(program = %self.config.path, args = ?args, "Running mtr");

        let started = Instant::now();
        let child = Command::new(&self.config.path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ReportError::Spawn {
                program: self.config.path.clone(),
                source,
            })?;

        let deadline = Duration::from_secs(self.config.timeout_secs);
        let output = match time::timeout(deadline, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ReportError::Spawn {
                program: self.config.path.clone(),
                source,
            })?,
            Err(_) => {
                tracing::warn!(timeout_secs = self.config.timeout_secs, "mtr timed out");
                return Err(ReportError::Timeout(self.config.timeout_secs));
            }
        };

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            status = %output.status,
            "mtr finished"
        );

        if !output.status.success() {
            return Err(ReportError::NonZeroExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let report = parse_report(&output.stdout)?;
        tracing::info!(
            src = %report.mtr.src,
            dst = %report.mtr.dst,
            hops = report.hubs.len(),
            "mtr report decoded"
        );
        Ok(report)
    }
}

/// Decode mtr `--json` output.
pub fn parse_report(json: &[u8]) -> Result<MtrReport, ReportError> {
    let document: MtrDocument = serde_json::from_slice(json)?;
    Ok(document.report)
}
