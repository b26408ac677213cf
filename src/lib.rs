//! Attendance punch intake service.
//!
//! Accepts device-originated punch records over HTTP on a single fixed
//! route, digs the JSON payload out of whatever wrapper bytes the device
//! firmware sends around it, classifies the record, and logs it. Devices
//! implement no retry or error handling, so the endpoint always answers
//! with the same acknowledgement whether or not the payload was understood.
//!
//! # Data Flow
//!
//! ```text
//! Device POST /hdata.aspx
//!     → http::server (Axum route, request ID, trace)
//!     → intake::extract (first '{' .. last '}' span)
//!     → intake::record (classify: punch / heartbeat / other)
//!     → one log line + fixed "OK" acknowledgement
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod intake;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::IntakeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
