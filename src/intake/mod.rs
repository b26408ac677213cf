//! Device record intake subsystem.
//!
//! # Data Flow
//! ```text
//! raw request body (bytes)
//!     → extract.rs (first '{' .. last '}' span)
//!     → serde_json (object decode)
//!     → record.rs (classify: punch / heartbeat / other)
//! ```
//!
//! # Design Decisions
//! - Extraction is the devices' tolerated framing, not real JSON scanning;
//!   the span heuristic stays exactly as the firmware expects it.
//! - Classification order is fixed: punch, then heartbeat, then other.
//! - Nothing here fails a request; every outcome maps to a log line.

pub mod extract;
pub mod record;

pub use extract::{extract_payload, ExtractError};
pub use record::{classify, DeviceRecord};
