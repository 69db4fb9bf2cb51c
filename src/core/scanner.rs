//! Scan Orchestration
//!
//! Composes validation, transaction fetch, analysis, classification and
//! report formatting into a single scan pipeline, and drives the
//! per-address status registry for deployments that poll asynchronously.
//!
//! A scan runs synchronously and sequentially; concurrency exists only
//! across addresses, bounded by the registry's one-in-flight-per-address
//! rule. No cancellation: a started scan runs to completion or error.

use std::future::Future;
use std::sync::Arc;

use tracing::{info, warn};

use crate::core::analyzer::{ThreatIntel, TransactionAnalyzer};
use crate::core::classifier::recommend;
use crate::core::dashboard::build_dashboard;
use crate::core::registry::{ScanPayload, ScanRegistry, ScanStatus};
use crate::core::report::format_report;
use crate::core::validator::validate_address;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::Transaction;

/// Source of transaction history for an address.
///
/// Implemented by the Etherscan provider in production and by in-memory
/// fixtures in tests. Expected to apply its own network timeout; the
/// orchestrator does not retry.
pub trait TransactionSource: Send + Sync {
    fn fetch_transactions(
        &self,
        address: &str,
    ) -> impl Future<Output = eyre::Result<Vec<Transaction>>> + Send;
}

/// Orchestrates the full wallet scan pipeline
pub struct WalletScanner<S: TransactionSource> {
    source: S,
    analyzer: TransactionAnalyzer,
    registry: Arc<ScanRegistry>,
}

impl<S: TransactionSource> WalletScanner<S> {
    pub fn new(source: S, intel: Arc<dyn ThreatIntel>, registry: Arc<ScanRegistry>) -> Self {
        Self {
            source,
            analyzer: TransactionAnalyzer::new(intel),
            registry,
        }
    }

    /// Run the scan pipeline: validate -> fetch -> analyze -> classify ->
    /// format -> aggregate. Returns the combined report + dashboard payload.
    ///
    /// An invalid address fails before any fetch is attempted. A transport
    /// failure or empty history is an expected outcome, surfaced as an
    /// explorer error, never a panic.
    pub async fn scan(&self, address: &str) -> AppResult<ScanPayload> {
        info!("🔍 Scanning wallet: {}", address);

        if !validate_address(address) {
            return Err(AppError::invalid_address(
                "Invalid EVM address format. Address must start with '0x' and be 42 characters long.",
            ));
        }

        info!("📡 Fetching transaction history...");
        let transactions = self
            .source
            .fetch_transactions(address)
            .await
            .map_err(|e| AppError::explorer_failed(format!("Error fetching transactions: {}", e)))?;

        if transactions.is_empty() {
            return Err(AppError::explorer_empty(
                "Unable to fetch transaction history. Please check the address and try again.",
            ));
        }

        info!("📊 Analyzing {} transactions...", transactions.len());
        let assessment = self.analyzer.analyze(&transactions);
        let recommendations = recommend(assessment.score, &assessment.findings);
        let security_report = format_report(
            address,
            assessment.score,
            &assessment.findings,
            &recommendations,
        );
        let dashboard = build_dashboard(&transactions, address);

        Ok(ScanPayload {
            security_report,
            dashboard,
        })
    }

    /// Start a registry-tracked scan: transitions the address to `scanning`
    /// and records the terminal state when the pipeline finishes.
    ///
    /// Returns `Err` only when the scan could not be started (a scan for
    /// the address is already in flight). Pipeline failures are recorded
    /// as `error` status with the message verbatim and do not propagate.
    pub async fn scan_and_record(&self, address: &str) -> AppResult<()> {
        self.registry.begin(address)?;
        self.run_recorded(address).await;
        Ok(())
    }

    /// Drive an already-registered scan to its terminal state.
    /// Callers must have transitioned the address to `scanning` first.
    pub async fn run_recorded(&self, address: &str) {
        match self.scan(address).await {
            Ok(payload) => self.registry.complete(address, payload),
            Err(err) => {
                warn!("Scan failed for {}: {}", address, err);
                self.registry.fail(address, err.message);
            }
        }
    }

    /// Current registry status for an address.
    pub fn status(&self, address: &str) -> ScanStatus {
        self.registry.status(address)
    }

    pub fn registry(&self) -> &Arc<ScanRegistry> {
        &self.registry
    }
}
