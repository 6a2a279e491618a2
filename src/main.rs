//! check_mtr: monitoring check for the route to a host.
//!
//! # Architecture Overview
//!
//! ```text
//!   -H host -j pattern -l -p -r
//!        │
//!        ▼
//!   ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//!   │  config  │──▶│  pattern  │──▶│  report  │──▶│  checks  │──▶│  output  │──▶ stdout + exit code
//!   │ cli+toml │   │ compiler  │   │ mtr run  │   │ + match  │   │ perfdata │
//!   └──────────┘   └───────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! Exit codes: 0 OK, 2 CRITICAL, 3 UNKNOWN.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use check_mtr::config::{CliArgs, UsageError};
use check_mtr::error::CheckError;
use check_mtr::lifecycle::{self, load_configuration};
use check_mtr::observability::logging::init_logging;
use check_mtr::output::{render, Status};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match CliArgs::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let error = CheckError::Usage(UsageError::Arguments(e.to_string().trim().to_string()));
            return finish(Err(error));
        }
    };

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => return finish(Err(e.into())),
    };

    init_logging(&config.observability);
    tracing::debug!(
        mtr = %config.mtr.path,
        cycles = config.mtr.cycles,
        timeout_secs = config.mtr.timeout_secs,
        "Configuration loaded"
    );

    let request = match cli.to_request() {
        Ok(request) => request,
        Err(e) => return finish(Err(e)),
    };

    if let Some(pattern) = &request.expectations.pattern {
        let rendered: Vec<String> = pattern.iter().map(ToString::to_string).collect();
        tracing::debug!(pattern = %rendered.join(","), "Hop pattern compiled");
    }

    finish(lifecycle::run(&request, &config).await)
}

fn finish(result: Result<lifecycle::CheckReport, CheckError>) -> ExitCode {
    let rendered = render(&result);
    println!("{}", rendered.text);
    if rendered.status == Status::Unknown {
        tracing::warn!(output = %rendered.text, "Check could not be completed");
    }
    ExitCode::from(rendered.status.exit_code())
}
