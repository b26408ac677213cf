use tokio::net::TcpListener;

use punch_intake::config::IntakeConfig;
use punch_intake::http::HttpServer;
use punch_intake::lifecycle::{shutdown, Shutdown};
use punch_intake::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = IntakeConfig::default();

    logging::init(&config.observability);

    tracing::info!("punch-intake v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        path = %config.endpoint.path,
        max_body_bytes = config.endpoint.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener. Failing to bind is the only fatal condition.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Metrics exporter lives on its own address so the device route stays
    // the single routable endpoint.
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let coordinator = Shutdown::new();
    let shutdown_rx = coordinator.subscribe();
    tokio::spawn(async move {
        shutdown::wait_for_signal().await;
        coordinator.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
