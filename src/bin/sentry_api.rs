//! Wallet Sentry API Server
//!
//! REST API for wallet risk scanning and dashboard data.
//!
//! Usage:
//!   cargo run --bin sentry_api
//!
//! Environment:
//!   ETHERSCAN_API_KEY - Etherscan API key (required, fatal if missing)
//!   SENTRY_PORT       - Server port (default: 8080; PORT also honored)
//!   SENTRY_HOST       - Server host (default: 0.0.0.0)
//!   RUST_LOG          - Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use wallet_sentry::api::{create_router, handlers::AppState, start_cleanup_task};
use wallet_sentry::core::registry::ScanRegistry;
use wallet_sentry::{EtherscanClient, StaticThreatFeed, WalletScanner};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    print_banner();

    // Explorer credentials are required up front; a missing key must not
    // surface on the first scan request.
    let client = match EtherscanClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Configuration Error: {}", e);
            error!("Set ETHERSCAN_API_KEY before starting the server");
            std::process::exit(1);
        }
    };

    let registry = Arc::new(ScanRegistry::new());
    let scanner = Arc::new(WalletScanner::new(
        client,
        Arc::new(StaticThreatFeed::new()),
        registry.clone(),
    ));

    let state = Arc::new(AppState::new(scanner));

    start_cleanup_task();
    info!("🧹 Background cleanup task started");

    let app = create_router(state);

    let host = std::env::var("SENTRY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("SENTRY_PORT"))
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("🚀 Wallet Sentry API starting on http://{}", addr);
    info!("");
    info!("Endpoints:");
    info!("  POST /v1/scan                 - Start a wallet scan");
    info!("  GET  /v1/status/:address      - Poll scan status");
    info!("  POST /v1/validate-address     - Validate address format");
    info!("  GET  /v1/dashboard/:address   - Dashboard data for a completed scan");
    info!("  GET  /v1/stats                - Registry statistics");
    info!("  GET  /v1/health               - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("");
    info!("🛑 Shutdown signal received");
    let counts = registry.counts();
    info!("   Scans completed: {}", counts.completed);
    info!("   Scans failed: {}", counts.failed);
    info!("   Scans still in flight: {}", counts.scanning);
    info!("👋 Wallet Sentry API shutdown complete");

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ==============================================
       W A L L E T   S E N T R Y   A P I
       EVM wallet security risk scanner
    ==============================================
    "#
    );
}
