//! Wallet Sentry - Interactive CLI
//!
//! Scans EVM wallet addresses for security risks and prints the report.
//!
//! Usage:
//!   cargo run --bin wallet_sentry
//!
//! Environment:
//!   ETHERSCAN_API_KEY  - Etherscan API key (required)
//!   ETHERSCAN_API_URL  - Explorer endpoint override
//!   RUST_LOG           - Log level (default: warn)

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wallet_sentry::core::registry::ScanRegistry;
use wallet_sentry::{EtherscanClient, StaticThreatFeed, WalletScanner};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .compact()
        .init();

    println!("🔒 Wallet Sentry Security Scanner");
    println!("{}", "=".repeat(40));

    let client = match EtherscanClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Configuration Error: {}", e);
            eprintln!("Please set ETHERSCAN_API_KEY in the environment");
            std::process::exit(1);
        }
    };

    let scanner = WalletScanner::new(
        client,
        Arc::new(StaticThreatFeed::new()),
        Arc::new(ScanRegistry::new()),
    );

    let stdin = io::stdin();
    loop {
        println!("\nEnter an EVM wallet address to scan (or 'quit' to exit):");
        print!("Address: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let address = line.trim();

        if matches!(address.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("👋 Goodbye! Stay safe!");
            break;
        }

        if address.is_empty() {
            println!("❌ Please enter a valid address");
            continue;
        }

        println!("\n{}", "=".repeat(50));
        match scanner.scan(address).await {
            Ok(payload) => println!("{}", payload.security_report),
            Err(err) => println!("❌ {}", err.message),
        }
        println!("\n{}", "=".repeat(50));
    }

    Ok(())
}
