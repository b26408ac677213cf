//! HTTP server setup and the intake handler.
//!
//! # Responsibilities
//! - Create the Axum Router with the single device route
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener and drain on shutdown
//! - Accumulate request bodies and run the intake pipeline
//! - Emit one log line per received record

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    response::Response,
    routing::post,
    Router,
};
use serde_json::{Map, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::IntakeConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::response;
use crate::intake::extract;
use crate::intake::record::{self, DeviceRecord};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub max_body_bytes: usize,
}

/// HTTP server for the punch intake endpoint.
pub struct HttpServer {
    router: Router,
    config: IntakeConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: IntakeConfig) -> Self {
        let state = AppState {
            max_body_bytes: config.endpoint.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Non-POST methods on the intake path fall back to the same empty 404
    /// as unknown paths; the devices know exactly one route.
    fn build_router(config: &IntakeConfig, state: AppState) -> Router {
        Router::new()
            .route(
                &config.endpoint.path,
                post(intake_handler).fallback(not_found_handler),
            )
            .fallback(not_found_handler)
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path = %self.config.endpoint.path,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }
}

/// Handle one device upload: accumulate the body, run the intake pipeline,
/// acknowledge.
///
/// Every outcome — classified, no payload, parse failure, oversized body —
/// ends in the same acknowledgement. The devices retry nothing.
async fn intake_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Response {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        peer = %peer,
        "Receiving device upload"
    );

    match axum::body::to_bytes(request.into_body(), state.max_body_bytes).await {
        Ok(body) => {
            let raw = String::from_utf8_lossy(&body);
            process_body(&request_id, &raw);
        }
        Err(_) => {
            tracing::warn!(
                request_id = %request_id,
                limit = state.max_body_bytes,
                "Could not read full request body within size limit, discarding"
            );
        }
    }

    metrics::record_request("POST", 200, start);
    response::acknowledgement()
}

/// Run extraction and classification, emitting exactly one log line.
fn process_body(request_id: &str, raw: &str) {
    let payload = match extract::extract_payload(raw) {
        Ok(span) => span,
        Err(reason) => {
            tracing::warn!(
                request_id = %request_id,
                reason = %reason,
                "No JSON brackets found in request body"
            );
            return;
        }
    };

    let fields: Map<String, Value> = match serde_json::from_str(payload) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Could not parse extracted JSON"
            );
            return;
        }
    };

    let decoded = record::classify(fields);
    metrics::record_classified(decoded.kind());

    match decoded {
        DeviceRecord::Punch {
            user_id,
            io_time,
            io_mode,
        } => {
            tracing::info!(
                request_id = %request_id,
                "[PUNCH] User ID: {} | Time: {} | Mode: {}",
                user_id,
                io_time,
                record::describe_io_mode(io_mode.as_ref())
            );
        }
        DeviceRecord::Heartbeat { fk_name } => {
            tracing::info!(
                request_id = %request_id,
                "[INFO] Device Heartbeat: {}",
                fk_name.as_deref().unwrap_or("-")
            );
        }
        DeviceRecord::Other(fields) => {
            tracing::info!(
                request_id = %request_id,
                "[DATA] Other JSON received: {}",
                serde_json::Value::Object(fields)
            );
        }
    }
}

/// Catch-all for any method or path outside the intake route.
async fn not_found_handler() -> Response {
    response::not_found()
}
