//! Type definitions for Wallet Sentry
//! Core data structures shared by the analyzer, scanner and dashboard

use serde::{Deserialize, Serialize};

/// A single transaction record as delivered by the Etherscan `txlist`
/// action. Values arrive as decimal strings denominated in wei
/// (1e18 wei = 1 ETH); `timeStamp` is Unix epoch seconds as a string.
/// The source API orders the list newest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "timeStamp", default)]
    pub time_stamp: String,
    #[serde(rename = "isError", default)]
    pub is_error: String,
}

impl Transaction {
    /// Transaction value converted from wei to ETH.
    pub fn value_eth(&self) -> f64 {
        self.value.parse::<f64>().unwrap_or(0.0) / 1e18
    }

    /// Unix timestamp in seconds; 0 when missing or unparseable.
    pub fn timestamp(&self) -> i64 {
        self.time_stamp.parse::<i64>().unwrap_or(0)
    }

    /// Whether on-chain execution failed.
    pub fn failed(&self) -> bool {
        self.is_error == "1"
    }
}

/// Output of the transaction heuristics: a bounded score plus the
/// findings that produced it, in detection order and not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Overall score (0-100, clamped)
    pub score: u8,
    /// Human-readable findings, one per detection
    pub findings: Vec<String>,
}

/// Risk level classification for a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// No suspicious activity at all
    Safe,
    /// Minor concerns
    Low,
    /// Proceed with caution
    Medium,
    /// Likely compromised or abusive history
    High,
    /// Almost certainly dangerous
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// Display label used in the text report.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "🟢 SAFE",
            RiskLevel::Low => "🟡 LOW RISK",
            RiskLevel::Medium => "🟠 MEDIUM RISK",
            RiskLevel::High => "🔴 HIGH RISK",
            RiskLevel::Critical => "🔴 CRITICAL RISK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_eth_conversion() {
        let tx = Transaction {
            value: "1500000000000000000".to_string(),
            ..Default::default()
        };
        assert!((tx.value_eth() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_value_eth_unparseable_defaults_to_zero() {
        let tx = Transaction {
            value: "not-a-number".to_string(),
            ..Default::default()
        };
        assert_eq!(tx.value_eth(), 0.0);
    }

    #[test]
    fn test_failed_flag() {
        let ok = Transaction {
            is_error: "0".to_string(),
            ..Default::default()
        };
        let failed = Transaction {
            is_error: "1".to_string(),
            ..Default::default()
        };
        assert!(!ok.failed());
        assert!(failed.failed());
    }
}
