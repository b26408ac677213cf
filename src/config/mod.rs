//! Configuration management subsystem.
//!
//! # Design Decisions
//! - All values are compile-time defaults on the schema; nothing reads
//!   disk, CLI flags, or environment variables to decide behavior.
//! - Config is immutable once constructed and travels into the server
//!   instance; there is no ambient global state.

pub mod schema;

pub use schema::EndpointConfig;
pub use schema::IntakeConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
