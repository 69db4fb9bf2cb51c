//! Wallet Sentry Library
//!
//! EVM wallet security scanner. Fetches an address's transaction history
//! from a block-explorer API and assesses it for:
//! - Interactions with tagged phishing / honeypot / rugpull contracts
//! - High-frequency trading patterns (bot activity)
//! - Clusters of failed transactions (scam attempts)
//!
//! Produces a formatted security report plus chart-ready dashboard
//! aggregates (timeline, risk distribution, value flow, network layout).

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod providers;

pub use config::AgentConfig;
pub use self::core::analyzer::{StaticThreatFeed, ThreatCategory, ThreatIntel, TransactionAnalyzer};
pub use self::core::classifier::{classify, recommend};
pub use self::core::dashboard::{build_dashboard, DashboardData};
pub use self::core::registry::{ScanPayload, ScanRegistry, ScanState, ScanStatus};
pub use self::core::report::format_report;
pub use self::core::scanner::{TransactionSource, WalletScanner};
pub use self::core::validator::validate_address;
pub use models::errors::{AppError, AppResult, ErrorCode};
pub use models::types::{RiskAssessment, RiskLevel, Transaction};
pub use providers::etherscan::EtherscanClient;
