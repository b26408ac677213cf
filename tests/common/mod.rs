//! Shared utilities for integration tests.

use std::time::Duration;

use punch_intake::config::IntakeConfig;
use punch_intake::http::HttpServer;
use punch_intake::lifecycle::Shutdown;

/// Spawn the intake server with the given config and return its shutdown
/// handle. The listener is bound before returning so requests can be sent
/// immediately.
pub async fn spawn_intake(config: IntakeConfig) -> Shutdown {
    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, shutdown_rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown
}

/// Non-pooled client so each request opens a fresh connection, matching
/// the devices' connection-per-upload behavior.
pub fn device_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
