//! Marché241 Storefront Server
//!
//! Serves boutique configurations for every tenant storefront and relays
//! mobile-money payment initiations to the commerce API.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use clap::Parser;
use config::{ConfigLoader, Overrides};
use server::{build_router, run_server};
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Marché241 - Multi-boutique storefront backend
#[derive(Parser, Debug)]
#[command(name = "marche-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./marche-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Override the commerce API base URL
    #[arg(long, env = "MARCHE_API_URL")]
    api_url: Option<Url>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting marche-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = ConfigLoader::new(
        &args.config,
        Overrides {
            listen: args.listen,
            api_url: args.api_url,
        },
    );
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let listen_addr = loaded_config.server.listen;
    tracing::info!("Configuration loaded from {:?}", args.config);
    tracing::info!(
        boutiques = ?loaded_config.registry.slugs().collect::<Vec<_>>(),
        "Boutique registry ready"
    );

    // Build the commerce API client
    let commerce_client = loaded_config.commerce_api.build_client().map_err(|e| {
        tracing::error!("Failed to build commerce API client: {}", e);
        e
    })?;
    tracing::info!("Commerce API at {}", commerce_client.base_url());

    // Create application state
    let state = AppState::new(loaded_config.registry, Arc::new(commerce_client));

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;
    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
