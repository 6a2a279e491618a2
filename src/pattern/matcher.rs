//! Path matching.
//!
//! # Responsibilities
//! - Walk compiled tokens against the decoded hop list, left to right
//! - Track where in the path the next named hop may occur
//! - Enforce per-hop latency/loss ceilings on matched hops
//!
//! # Design Decisions
//! - Position is either exact or a sorted set of candidates
//! - Candidate sets never hold indices past the end of the path
//! - A named hop commits to its first matching candidate; no backtracking
//! - Range expansion is clipped to the path, so work per step is bounded
//!   by the path length rather than by the offsets written in the pattern

use std::collections::BTreeSet;

use crate::checks::violation::{Scope, Violation};
use crate::pattern::token::{HostExpectation, PatternToken};
use crate::report::types::HopObservation;

/// Default upper bound on live candidate positions.
pub const DEFAULT_MAX_CANDIDATES: usize = 4096;

/// Result of matching a pattern against a path.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Pass,
    Fail(Violation),
}

impl MatchOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, MatchOutcome::Pass)
    }
}

/// Resource limits for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Maximum candidate positions alive after any step.
    pub max_candidates: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Where in the path the matcher currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionState {
    /// A single known index. May point past the end of the path.
    Exact(usize),
    /// Any of these indices, all within the path.
    Ambiguous(BTreeSet<usize>),
}

impl PositionState {
    /// Smallest reachable index, `None` when no candidates remain.
    pub fn start(&self) -> Option<usize> {
        match self {
            PositionState::Exact(index) => Some(*index),
            PositionState::Ambiguous(candidates) => candidates.first().copied(),
        }
    }

    /// Number of live candidate positions.
    pub fn candidate_count(&self) -> usize {
        match self {
            PositionState::Exact(_) => 1,
            PositionState::Ambiguous(candidates) => candidates.len(),
        }
    }

    /// `*`: the next match may occur anywhere from the current start to the end.
    fn any_hop(&self, path_len: usize) -> PositionState {
        let candidates = match self.start() {
            Some(start) => (start..path_len).collect(),
            None => BTreeSet::new(),
        };
        PositionState::Ambiguous(candidates)
    }

    /// `*n`: advance every candidate by exactly `n`.
    fn advance(&self, n: usize, path_len: usize) -> PositionState {
        match self {
            PositionState::Exact(index) => PositionState::Exact(index.saturating_add(n)),
            PositionState::Ambiguous(candidates) => PositionState::Ambiguous(
                candidates
                    .iter()
                    .map(|index| index.saturating_add(n))
                    .filter(|index| *index < path_len)
                    .collect(),
            ),
        }
    }

    /// `*min-max`: every candidate expands into `candidate+min ..= candidate+max`.
    fn expand(&self, min: usize, max: usize, path_len: usize) -> PositionState {
        let mut expanded = BTreeSet::new();
        let Some(last) = path_len.checked_sub(1) else {
            return PositionState::Ambiguous(expanded);
        };

        let mut push_range = |origin: usize| {
            let low = origin.saturating_add(min);
            let high = origin.saturating_add(max).min(last);
            if low <= high {
                expanded.extend(low..=high);
            }
        };

        match self {
            PositionState::Exact(index) => push_range(*index),
            PositionState::Ambiguous(candidates) => candidates.iter().copied().for_each(push_range),
        }

        PositionState::Ambiguous(expanded)
    }
}

/// Match `tokens` against `path` with default limits.
pub fn match_path(tokens: &[PatternToken], path: &[HopObservation]) -> MatchOutcome {
    match_path_with_limits(tokens, path, &MatchLimits::default())
}

/// Match `tokens` against `path`.
///
/// Pure: the same tokens and path always produce the same outcome.
pub fn match_path_with_limits(
    tokens: &[PatternToken],
    path: &[HopObservation],
    limits: &MatchLimits,
) -> MatchOutcome {
    let mut state = PositionState::Exact(0);

    for token in tokens {
        state = match token {
            PatternToken::AnyHop => state.any_hop(path.len()),
            PatternToken::FixedOffset { n } => state.advance(*n, path.len()),
            PatternToken::OffsetRange { min, max } => state.expand(*min, *max, path.len()),
            PatternToken::Host(expectation) => match resolve_host(&state, expectation, path) {
                Ok(next) => next,
                Err(violation) => return MatchOutcome::Fail(violation),
            },
        };

        let count = state.candidate_count();
        if count > limits.max_candidates {
            return MatchOutcome::Fail(Violation::CandidateLimitExceeded {
                segment: token.to_string(),
                count,
                limit: limits.max_candidates,
            });
        }

        tracing::trace!(token = %token, state = ?state, "Pattern step");
    }

    MatchOutcome::Pass
}

/// Find the first candidate holding the expected host and check its ceilings.
fn resolve_host(
    state: &PositionState,
    expectation: &HostExpectation,
    path: &[HopObservation],
) -> Result<PositionState, Violation> {
    let is_expected = |index: &usize| {
        path.get(*index)
            .is_some_and(|hop| hop.host == expectation.identity)
    };

    let matched = match state {
        PositionState::Exact(index) => Some(*index).filter(is_expected),
        PositionState::Ambiguous(candidates) if candidates.is_empty() => {
            return Err(Violation::NoCandidatesRemaining {
                host: expectation.identity.clone(),
            });
        }
        PositionState::Ambiguous(candidates) => candidates.iter().copied().find(is_expected),
    };

    let Some(index) = matched else {
        return Err(Violation::HopNotFound {
            host: expectation.identity.clone(),
        });
    };

    let hop = &path[index];
    check_hop_ceilings(index, hop, expectation)?;

    Ok(PositionState::Exact(index + 1))
}

fn check_hop_ceilings(
    index: usize,
    hop: &HopObservation,
    expectation: &HostExpectation,
) -> Result<(), Violation> {
    if let Some(ceiling) = expectation.latency_ceiling_ms {
        if hop.avg_latency_ms > ceiling {
            return Err(Violation::LatencyExceeded {
                scope: Scope::Hop,
                hop_index: index,
                host: hop.host.clone(),
                observed: hop.avg_latency_ms,
                ceiling,
            });
        }
    }

    if let Some(ceiling) = expectation.loss_ceiling_percent {
        if hop.loss_percent > ceiling {
            return Err(Violation::LossExceeded {
                scope: Scope::Hop,
                hop_index: index,
                host: hop.host.clone(),
                observed: hop.loss_percent,
                ceiling,
            });
        }
    }

    Ok(())
}
