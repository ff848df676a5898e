//! Serve command - prediction page and JSON API

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use super::{load_config, ModelArgs};
use crate::api::create_router;
use crate::config::AppConfig;
use crate::infrastructure::logging::{self, LoggingConfig};
use crate::infrastructure::observability::init_metrics;

/// Arguments for the serve command
#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.model)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init_logging(&LoggingConfig::from(&config));

    // A missing or corrupt model aborts startup here
    let state = crate::create_app_state_with_config(&config)?;
    let metrics = init_metrics(&config.observability.metrics);
    let app = create_router(state, metrics);

    let addr = build_socket_addr(&config)?;
    info!("Starting diabetes predictor on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
