//! A single check run.

use crate::checks::Expectations;
use crate::config::schema::CheckConfig;
use crate::error::CheckError;
use crate::pattern::{MatchLimits, MatchOutcome};
use crate::report::{AddressFamily, MtrReport, MtrRunner};

/// What to probe and what to expect of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub host: String,
    pub family: AddressFamily,
    pub expectations: Expectations,
}

/// The decoded report together with the verdict reached on it.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub report: MtrReport,
    pub outcome: MatchOutcome,
}

/// Run mtr once against the requested host and evaluate every expectation.
pub async fn run(request: &CheckRequest, config: &CheckConfig) -> Result<CheckReport, CheckError> {
    let runner = MtrRunner::new(config.mtr.clone());
    let report = runner.run(&request.host, request.family).await?;

    let limits = MatchLimits {
        max_candidates: config.matching.max_candidates,
    };
    Ok(evaluate_report(request, report, &limits))
}

/// Evaluate an already decoded report.
pub fn evaluate_report(
    request: &CheckRequest,
    report: MtrReport,
    limits: &MatchLimits,
) -> CheckReport {
    let hops = report.observations();
    let outcome = request.expectations.evaluate(&hops, limits);

    match &outcome {
        MatchOutcome::Pass => tracing::info!(
            host = %request.host,
            hops = hops.len(),
            "Path matches expectations"
        ),
        MatchOutcome::Fail(violation) => tracing::info!(
            host = %request.host,
            reason = %violation.kind(),
            hop_index = ?violation.hop_index(),
            hop = ?violation.host(),
            "Path violates expectations"
        ),
    }

    CheckReport { report, outcome }
}
