//! Check violations.
//!
//! A violation is the definitive failing condition of a run. Every check
//! stops at the first one it finds; nothing is aggregated.

use std::fmt;

use thiserror::Error;

/// Which ceiling a latency/loss violation was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `--latency` / `--packetloss`, applied to every hop.
    Global,
    /// A `host[latency:loss]` qualifier in the hop pattern.
    Hop,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "maximum expected"),
            Scope::Hop => write!(f, "expected per-hop"),
        }
    }
}

/// Machine-readable violation reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    LatencyExceeded,
    LossExceeded,
    RouterMissing,
    HopNotFound,
    NoCandidatesRemaining,
    CandidateLimitExceeded,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::LatencyExceeded => "latency-exceeded",
            ViolationKind::LossExceeded => "loss-exceeded",
            ViolationKind::RouterMissing => "router-missing",
            ViolationKind::HopNotFound => "hop-not-found",
            ViolationKind::NoCandidatesRemaining => "no-candidates-remaining",
            ViolationKind::CandidateLimitExceeded => "candidate-limit-exceeded",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed expectation, localized to the offending hop where there is one.
///
/// Hop numbers in messages are 1-based, matching mtr's own numbering;
/// `hop_index` fields are 0-based positions in the decoded path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("The latency for hop {} ({host}) was {observed} ms, higher than the {scope} value of {ceiling} ms!", .hop_index + 1)]
    LatencyExceeded {
        scope: Scope,
        hop_index: usize,
        host: String,
        observed: f64,
        ceiling: f64,
    },

    #[error("The packet loss for hop {} ({host}) was {observed}%, higher than the {scope} value of {ceiling}%!", .hop_index + 1)]
    LossExceeded {
        scope: Scope,
        hop_index: usize,
        host: String,
        observed: f64,
        ceiling: f64,
    },

    #[error("The expected router {host} was not in the routing path!")]
    RouterMissing { host: String },

    #[error("The expected hop {host} was not in the routing path!")]
    HopNotFound { host: String },

    #[error("The expected hop {host} was not in the routing path: no hops left to search!")]
    NoCandidatesRemaining { host: String },

    #[error("The hop pattern segment {segment} produced {count} candidate positions, more than the limit of {limit}!")]
    CandidateLimitExceeded {
        segment: String,
        count: usize,
        limit: usize,
    },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::LatencyExceeded { .. } => ViolationKind::LatencyExceeded,
            Violation::LossExceeded { .. } => ViolationKind::LossExceeded,
            Violation::RouterMissing { .. } => ViolationKind::RouterMissing,
            Violation::HopNotFound { .. } => ViolationKind::HopNotFound,
            Violation::NoCandidatesRemaining { .. } => ViolationKind::NoCandidatesRemaining,
            Violation::CandidateLimitExceeded { .. } => ViolationKind::CandidateLimitExceeded,
        }
    }

    /// 0-based index of the offending hop, when the violation is tied to one.
    pub fn hop_index(&self) -> Option<usize> {
        match self {
            Violation::LatencyExceeded { hop_index, .. }
            | Violation::LossExceeded { hop_index, .. } => Some(*hop_index),
            _ => None,
        }
    }

    /// Host identity the violation is about, if any.
    pub fn host(&self) -> Option<&str> {
        match self {
            Violation::LatencyExceeded { host, .. }
            | Violation::LossExceeded { host, .. }
            | Violation::RouterMissing { host }
            | Violation::HopNotFound { host }
            | Violation::NoCandidatesRemaining { host } => Some(host),
            Violation::CandidateLimitExceeded { .. } => None,
        }
    }
}
