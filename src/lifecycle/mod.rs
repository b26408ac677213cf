//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Init logging → build config → bind listener → start metrics → serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM → Shutdown::trigger → drain in-flight requests → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
