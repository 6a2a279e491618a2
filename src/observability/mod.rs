//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!
//! Per-hop metrics for the monitoring system are plugin output, not logs,
//! and live in `output::perfdata`.
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for the plugin status line and perfdata
//! - Quiet by default (warn); RUST_LOG or config raises verbosity

pub mod logging;
