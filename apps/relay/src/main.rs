use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use za_relay::{Args, Config, RelayServer, RelayState};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging, RUST_LOG wins over --verbose
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("za relay v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_args(&args);
    let client = config
        .build_client()
        .context("Failed to build outbound HTTP client")?;

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    let local_addr = listener.local_addr()?;

    println!("port {}", local_addr.port());

    RelayServer::new(RelayState::new(client))
        .run(listener)
        .await
        .context("Relay server failed")?;

    Ok(())
}
