//! Console gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 GATEWAY                      │
//!   PATCH /api/queries/  │  ┌──────────┐    ┌───────────────────────┐  │
//!     {id}/reprocess ────┼─▶│   http   │───▶│ reprocess (ack only)  │  │
//!                        │  │  server  │    └───────────────────────┘  │
//!   GET /api/system/     │  │          │    ┌───────────────────────┐  │
//!     diagnostics ───────┼─▶│          │───▶│ upstream client       │──┼──▶ Backend
//!                        │  └──────────┘    └───────────────────────┘  │    /system/diagnostics
//!                        │                                              │
//!                        │  config · observability · lifecycle          │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use console_gateway::http::HttpServer;
use console_gateway::lifecycle::{prepare_config, wait_for_signal, Shutdown};
use console_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "console-gateway")]
#[command(about = "Backend-for-frontend gateway for the query console", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = prepare_config(args.config.as_deref(), args.bind.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("console-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.diagnostics_url(),
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
