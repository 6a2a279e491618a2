//! Status line and exit code policy.

use std::fmt;

use crate::checks::ViolationKind;
use crate::error::CheckError;
use crate::lifecycle::CheckReport;
use crate::output::perfdata::render_performance;
use crate::pattern::MatchOutcome;

/// Monitoring-plugin state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Critical,
    Unknown,
}

impl Status {
    /// Exit code convention: 0 pass, 2 violation, 3 usage/parse/environment error
    /// or a pattern too wide to evaluate.
    pub fn exit_code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Everything `main` needs to finish the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: Status,
    pub text: String,
}

/// Render the result of a run as plugin output.
pub fn render(result: &Result<CheckReport, CheckError>) -> Rendered {
    let (status, message, performance) = match result {
        Ok(check) => {
            let (status, message) = match &check.outcome {
                MatchOutcome::Pass => {
                    (Status::Ok, "All values were in the valid range".to_string())
                }
                // The pattern is too wide to evaluate, so the path was never judged.
                MatchOutcome::Fail(violation)
                    if violation.kind() == ViolationKind::CandidateLimitExceeded =>
                {
                    (Status::Unknown, violation.to_string())
                }
                MatchOutcome::Fail(violation) => (Status::Critical, violation.to_string()),
            };
            (status, message, render_performance(&check.report))
        }
        Err(error) => (Status::Unknown, error.to_string(), None),
    };

    let mut text = format!("{} - {}", status, message);
    if let Some(block) = performance {
        text.push('\n');
        text.push_str(&block);
    }

    Rendered { status, text }
}
