//! Path validation checks.
//!
//! # Data Flow
//! ```text
//! Expectations (compiled before mtr runs)
//!     + Vec<HopObservation> (decoded mtr report)
//!     → thresholds.rs (global latency/loss ceilings)
//!     → routers.rs (required routers anywhere in the path)
//!     → pattern::matcher (ordered hop pattern)
//!     → Return: MatchOutcome::Pass or MatchOutcome::Fail(first violation)
//! ```
//!
//! # Design Decisions
//! - Cheapest, most general check first; first violation ends the run
//! - Checks are pure functions of (expectations, hops)

pub mod routers;
pub mod thresholds;
pub mod violation;

pub use routers::RouterSet;
pub use thresholds::GlobalThresholds;
pub use violation::{Scope, Violation, ViolationKind};

use crate::pattern::{match_path_with_limits, MatchLimits, MatchOutcome, PatternToken};
use crate::report::types::HopObservation;

/// Everything the operator expects of the path, already parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expectations {
    pub pattern: Option<Vec<PatternToken>>,
    pub thresholds: GlobalThresholds,
    pub routers: Option<RouterSet>,
}

impl Expectations {
    /// True when no check would run.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none() && self.thresholds.is_empty() && self.routers.is_none()
    }

    /// Run every configured check, stopping at the first violation.
    pub fn evaluate(&self, path: &[HopObservation], limits: &MatchLimits) -> MatchOutcome {
        if let Err(violation) = self.thresholds.check(path) {
            return MatchOutcome::Fail(violation);
        }
        tracing::debug!(hops = path.len(), "Global thresholds satisfied");

        if let Some(routers) = &self.routers {
            if let Err(violation) = routers.check(path) {
                return MatchOutcome::Fail(violation);
            }
            tracing::debug!(routers = routers.routers().len(), "Required routers present");
        }

        if let Some(pattern) = &self.pattern {
            let outcome = match_path_with_limits(pattern, path, limits);
            tracing::debug!(
                tokens = pattern.len(),
                pass = outcome.is_pass(),
                "Hop pattern evaluated"
            );
            return outcome;
        }

        MatchOutcome::Pass
    }
}
