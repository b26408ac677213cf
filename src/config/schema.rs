//! Configuration schema definitions.
//!
//! All types derive Serde traits so deployments can deserialize overrides,
//! but the shipped binary runs on the defaults below.

use serde::{Deserialize, Serialize};

/// Root configuration for the intake service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct IntakeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Intake endpoint settings (route path, body ceiling).
    pub endpoint: EndpointConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Intake endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Route path the devices POST their uploads to.
    pub path: String,

    /// Maximum accepted request body size in bytes. An oversized body is
    /// discarded with a logged warning; the device is still acknowledged.
    pub max_body_bytes: usize,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            path: "/hdata.aspx".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
