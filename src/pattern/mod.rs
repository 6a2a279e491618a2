//! Expected-path pattern language.
//!
//! # Data Flow
//! ```text
//! Expectation text ("r1,*,r4[20:5],*1-2,r7")
//!     → compiler.rs (split on ',', classify each segment)
//!     → Vec<PatternToken> (immutable, evaluated left to right)
//!     → matcher.rs (walk tokens against the decoded hop list)
//!     → Return: MatchOutcome::Pass or MatchOutcome::Fail(Violation)
//! ```
//!
//! # Grammar
//! ```text
//! *            any number of intervening hops (zero or more)
//! *N           skip exactly N hops
//! *N-M         skip between N and M hops (inclusive)
//! host         the next hop must be `host`
//! host[L:P]    as above, with average latency <= L ms and loss <= P %
//!              (either side may be empty)
//! ```
//!
//! # Design Decisions
//! - Compilation is purely syntactic; the path is unknown until mtr has run
//! - Matching is a pure function of (tokens, hops): same input, same outcome
//! - Single forward pass, no backtracking once a host has matched
//! - Candidate positions are kept sorted and bounded by the path length

pub mod compiler;
pub mod matcher;
pub mod token;

pub use compiler::{compile, ParseError};
pub use matcher::{match_path, match_path_with_limits, MatchLimits, MatchOutcome, PositionState};
pub use token::{HostExpectation, PatternToken};
