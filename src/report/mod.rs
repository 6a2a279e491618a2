//! mtr report subsystem.
//!
//! # Data Flow
//! ```text
//! CheckRequest (host, address family)
//!     → runner.rs (spawn `mtr --json`, wait with deadline)
//!     → types.rs (decode JSON into MtrReport)
//!     → MtrReport::observations() (0-based HopObservation list)
//! ```

pub mod runner;
pub mod types;

pub use runner::{parse_report, AddressFamily, MtrRunner, ReportError};
pub use types::{HopObservation, Hub, MtrReport};
