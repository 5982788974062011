//! Default backend for a reverse proxy or ingress controller.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                 DEFAULT BACKEND                  │
//!                      │                                                  │
//!   Proxy request      │  ┌────────┐    ┌───────────┐    ┌─────────────┐  │
//!   X-Code, X-Format ──┼─▶│  http  │───▶│ responder │───▶│ negotiation │  │
//!                      │  │ server │    │           │    │  (format)   │  │
//!                      │  └────────┘    └─────┬─────┘    └─────────────┘  │
//!                      │                      │                           │
//!                      │                      ▼                           │
//!                      │               ┌────────────┐    ┌─────────────┐  │
//!   Error page    ◀────┼───────────────│   cache    │───▶│    store    │◀─┼── {root}/404.html
//!                      │               │(code,type) │miss│exact→class→ │  │   {root}/5xx.json
//!                      │               └────────────┘    │  default    │  │
//!                      │                                 └─────────────┘  │
//!                      │   config · observability · lifecycle             │
//!                      └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;

use default_backend::config::CliArgs;
use default_backend::http::HttpServer;
use default_backend::lifecycle::{startup, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config = startup::initialize(&args)?;

    let listener = startup::bind_listener(&config).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_signal());

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
