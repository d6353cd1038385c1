//! Faucet service binary

use clap::Parser;
use prt_chain::HttpRpc;
use prt_faucet::api::router;
use prt_faucet::{ClaimService, FaucetConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Claim service CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server listen address
    #[arg(long)]
    server_addr: Option<String>,

    /// RPC URL
    #[arg(long)]
    rpc_url: Option<String>,

    /// Faucet private key (hex)
    #[arg(long)]
    private_key: Option<String>,

    /// Token contract address
    #[arg(long)]
    token_address: Option<String>,

    /// Static claim UI directory
    #[arg(long)]
    static_dir: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = if args.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PRT Faucet Service v0.1.0");

    let mut config = FaucetConfig::from_env();

    if let Some(addr) = args.server_addr {
        config.server_addr = addr;
    }
    if let Some(rpc_url) = args.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(key) = args.private_key {
        config.private_key = key;
    }
    if let Some(token) = args.token_address {
        config.token_address = token;
    }
    if let Some(dir) = args.static_dir {
        config.static_dir = dir;
    }

    info!("Configuration:");
    info!("  Server address: {}", config.server_addr);
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Token contract: {}", config.token_address);
    info!("  Claim range: {}..={} tokens", config.min_claim, config.max_claim);
    info!("  Static dir: {}", config.static_dir);

    let rpc = Arc::new(HttpRpc::new(config.rpc_url.clone()));
    let service = Arc::new(ClaimService::new(&config, rpc)?);
    info!("Claim service initialized");

    let mut app = router(service, &config.static_dir);

    if config.cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
        info!("CORS enabled");
    }

    let addr: SocketAddr = config.server_addr.parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down gracefully");
    Ok(())
}

/// Graceful shutdown signal
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
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}
