use anyhow::{Context, Result};
use clap::Parser;
use huddle_server::{RelayConfig, RelayService, relay_router};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Signaling relay for meeting rooms.
#[derive(Debug, Parser)]
#[command(name = "huddle-relay", version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Outbound queue capacity per connection.
    #[arg(long, default_value_t = 64)]
    queue_capacity: usize,

    /// Exact CORS origin to allow; omit to allow any origin.
    #[arg(long)]
    allowed_origin: Option<String>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log: String,
}

impl Args {
    fn into_config(self) -> RelayConfig {
        RelayConfig {
            bind: self.bind,
            send_queue_capacity: self.queue_capacity,
            allowed_origin: self.allowed_origin,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.into_config();
    let service = RelayService::new(config.clone());
    let app = relay_router(service)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Signaling relay listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!("Failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
