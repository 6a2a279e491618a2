//! Lifecycle of a single check run.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     CLI args → Load config file → Apply overrides → Validate
//!
//! Run (run.rs):
//!     CheckRequest → Invoke mtr once → Decode → Evaluate → CheckReport
//!
//! Exit (main.rs):
//!     CheckReport / CheckError → Status line + perfdata → Exit code
//! ```
//!
//! # Design Decisions
//! - Fail fast: every usage or config error is reported before mtr runs
//! - No state survives a run; one invocation, one verdict
//! - Only `main` decides the process exit code

pub mod run;
pub mod startup;

pub use run::{evaluate_report, run, CheckReport, CheckRequest};
pub use startup::load_configuration;
