//! Etherscan API Client
//!
//! Fetches normal transaction history for an address via the
//! `account.txlist` action, newest-first. This is a thin I/O wrapper: a
//! non-success API status yields an empty list (logged), and transport
//! failures surface as errors. The orchestrator treats both as the
//! no-transactions path and never retries.
//!
//! API: https://api.etherscan.io/api?module=account&action=txlist

use std::time::Duration;

use eyre::{eyre, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::AgentConfig;
use crate::core::scanner::TransactionSource;
use crate::models::errors::AppResult;
use crate::models::types::Transaction;

/// Envelope around every Etherscan response. On failure `result` holds an
/// explanatory string instead of the record list, hence the raw `Value`.
#[derive(Debug, Deserialize)]
struct TxListResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: serde_json::Value,
}

/// Etherscan HTTP client
pub struct EtherscanClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl EtherscanClient {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout: config.request_timeout,
        }
    }

    /// Client configured from the environment.
    /// Fails fast when `ETHERSCAN_API_KEY` is missing.
    pub fn from_env() -> AppResult<Self> {
        let config = AgentConfig::from_env()?;
        Ok(Self::new(&config))
    }

    async fn fetch(&self, address: &str) -> Result<Vec<Transaction>> {
        let params = [
            ("module", "account"),
            ("action", "txlist"),
            ("address", address),
            ("startblock", "0"),
            ("endblock", "99999999"),
            ("sort", "desc"),
            ("apikey", self.api_key.as_str()),
        ];

        info!("🔍 Etherscan: fetching txlist for {}", address);

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| eyre!("Etherscan request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(eyre!("Etherscan API error: {}", response.status()));
        }

        let body: TxListResponse = response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse Etherscan response: {}", e))?;

        if body.status != "1" {
            warn!("⚠️ Etherscan returned status {}: {}", body.status, body.message);
            return Ok(Vec::new());
        }

        let transactions: Vec<Transaction> = serde_json::from_value(body.result)
            .map_err(|e| eyre!("Unexpected txlist payload: {}", e))?;

        info!("📊 Etherscan: {} transactions for {}", transactions.len(), address);
        Ok(transactions)
    }
}

impl TransactionSource for EtherscanClient {
    async fn fetch_transactions(&self, address: &str) -> Result<Vec<Transaction>> {
        self.fetch(address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txlist_response_parses_records() {
        let raw = r#"{
            "status": "1",
            "message": "OK",
            "result": [{
                "hash": "0xabc",
                "from": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "to": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                "value": "1000000000000000000",
                "timeStamp": "1705320000",
                "isError": "0"
            }]
        }"#;

        let body: TxListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.status, "1");

        let transactions: Vec<Transaction> = serde_json::from_value(body.result).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].time_stamp, "1705320000");
        assert!((transactions[0].value_eth() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_txlist_response_error_shape() {
        // Etherscan puts a plain string in `result` on errors
        let raw = r#"{"status":"0","message":"NOTOK","result":"Max rate limit reached"}"#;
        let body: TxListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.status, "0");
        assert!(body.result.is_string());
    }
}
