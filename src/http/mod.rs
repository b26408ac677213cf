//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, single device route)
//!     → request.rs (request ID injection)
//!     → intake (extract + classify)
//!     → response.rs (fixed acknowledgement / empty 404)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
