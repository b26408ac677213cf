//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the record log lines are the
//!   service's only output of record (nothing is persisted).
//! - Metrics are optional and exposed on a separate address so the device
//!   route stays the single routable endpoint.
//! - Request ID flows through every intake log line.

pub mod logging;
pub mod metrics;
