//! Plugin output.
//!
//! # Data Flow
//! ```text
//! Result<CheckReport, CheckError>
//!     → status.rs (OK / CRITICAL / UNKNOWN, exit code, status line)
//!     → perfdata.rs (hop table and per-hop rta/pl metrics)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - stdout carries only plugin output; diagnostics go to stderr
//! - Exit codes are assigned in exactly one place (`Status::exit_code`)
//! - The perfdata block covers every hop, in path order, even on CRITICAL

pub mod perfdata;
pub mod status;

pub use perfdata::render_performance;
pub use status::{render, Rendered, Status};
