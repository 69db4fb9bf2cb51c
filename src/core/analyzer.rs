//! Transaction Risk Analysis
//!
//! Pattern-matches a wallet's transaction history against a threat feed of
//! tagged malicious addresses, plus two behavioural heuristics (trade
//! frequency and failed-transaction clustering). Scores are additive per
//! detection and clamped to 100.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::types::{RiskAssessment, Transaction};

/// Score added once when the history exceeds [`HIGH_FREQUENCY_THRESHOLD`]
const HIGH_FREQUENCY_WEIGHT: u32 = 10;

/// Score added once when failed transactions exceed [`FAILED_TX_THRESHOLD`]
const FAILED_TX_WEIGHT: u32 = 10;

/// Transaction count above which trading looks bot-driven
const HIGH_FREQUENCY_THRESHOLD: usize = 100;

/// Failed-transaction count above which the history looks like scam probing
const FAILED_TX_THRESHOLD: usize = 10;

/// Category a destination address is tagged with in the threat feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreatCategory {
    PhishingScam,
    Honeypot,
    Rugpull,
}

impl ThreatCategory {
    /// Score contribution of one transaction to a tagged address
    pub fn weight(&self) -> u32 {
        match self {
            ThreatCategory::PhishingScam => 30,
            ThreatCategory::Honeypot => 25,
            ThreatCategory::Rugpull => 20,
        }
    }

    /// Finding suffix; recommendation gating matches on these strings.
    pub fn description(&self) -> &'static str {
        match self {
            ThreatCategory::PhishingScam => "Phishing scam detected",
            ThreatCategory::Honeypot => "Honeypot contract detected",
            ThreatCategory::Rugpull => "Rugpull contract detected",
        }
    }
}

/// Lookup capability for tagged malicious addresses.
///
/// The scoring pipeline only depends on this seam, so the static lists can
/// be swapped for a live intelligence feed without touching the heuristics.
pub trait ThreatIntel: Send + Sync {
    /// Category the address is tagged with, if any.
    fn lookup(&self, address: &str) -> Option<ThreatCategory>;
}

/// Built-in threat feed with a fixed set of known-bad addresses.
/// Production deployments would replace this with an updatable source.
pub struct StaticThreatFeed {
    tagged: HashMap<String, ThreatCategory>,
}

impl StaticThreatFeed {
    pub fn new() -> Self {
        let mut tagged = HashMap::new();

        // Known phishing addresses
        tagged.insert(
            "0x1234567890123456789012345678901234567890".to_string(),
            ThreatCategory::PhishingScam,
        );
        tagged.insert(
            "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd".to_string(),
            ThreatCategory::PhishingScam,
        );

        // Known honeypot contract
        tagged.insert(
            "0x1111111111111111111111111111111111111111".to_string(),
            ThreatCategory::Honeypot,
        );

        // Known rugpull contract
        tagged.insert(
            "0x2222222222222222222222222222222222222222".to_string(),
            ThreatCategory::Rugpull,
        );

        Self { tagged }
    }
}

impl Default for StaticThreatFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreatIntel for StaticThreatFeed {
    fn lookup(&self, address: &str) -> Option<ThreatCategory> {
        self.tagged.get(&address.to_lowercase()).copied()
    }
}

/// Applies the risk heuristics to a transaction list
pub struct TransactionAnalyzer {
    intel: Arc<dyn ThreatIntel>,
}

impl TransactionAnalyzer {
    pub fn new(intel: Arc<dyn ThreatIntel>) -> Self {
        Self { intel }
    }

    /// Analyzer backed by the built-in static feed.
    pub fn with_static_feed() -> Self {
        Self::new(Arc::new(StaticThreatFeed::new()))
    }

    /// Score a transaction history.
    ///
    /// An empty history scores 0 with no findings. Every transaction to a
    /// tagged address adds that category's weight and one finding; the
    /// frequency and failure heuristics each fire at most once. The final
    /// score is clamped to 100 (a hard ceiling, not a normalization).
    pub fn analyze(&self, transactions: &[Transaction]) -> RiskAssessment {
        let mut score: u32 = 0;
        let mut findings = Vec::new();

        if transactions.is_empty() {
            return RiskAssessment { score: 0, findings };
        }

        for tx in transactions {
            if let Some(category) = self.intel.lookup(&tx.to) {
                score += category.weight();
                findings.push(format!(
                    "⚠️ Interaction with {}... - {}",
                    short_address(&tx.to),
                    category.description()
                ));
            }
        }

        if transactions.len() > HIGH_FREQUENCY_THRESHOLD {
            score += HIGH_FREQUENCY_WEIGHT;
            findings.push(
                "⚠️ High frequency trading detected - potential bot activity".to_string(),
            );
        }

        let failed = transactions.iter().filter(|tx| tx.failed()).count();
        if failed > FAILED_TX_THRESHOLD {
            score += FAILED_TX_WEIGHT;
            findings.push(
                "⚠️ Multiple failed transactions detected - potential scam attempts".to_string(),
            );
        }

        RiskAssessment {
            score: score.min(100) as u8,
            findings,
        }
    }
}

/// First 10 characters of an address, for display.
fn short_address(address: &str) -> &str {
    if address.len() >= 10 {
        &address[..10]
    } else {
        address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHISHING: &str = "0x1234567890123456789012345678901234567890";
    const HONEYPOT: &str = "0x1111111111111111111111111111111111111111";
    const RUGPULL: &str = "0x2222222222222222222222222222222222222222";
    const CLEAN: &str = "0x9999999999999999999999999999999999999999";

    fn tx_to(to: &str, is_error: &str) -> Transaction {
        Transaction {
            to: to.to_string(),
            from: CLEAN.to_string(),
            value: "0".to_string(),
            is_error: is_error.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_history_scores_zero() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        let assessment = analyzer.analyze(&[]);
        assert_eq!(assessment.score, 0);
        assert!(assessment.findings.is_empty());
    }

    #[test]
    fn test_single_phishing_interaction() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        let assessment = analyzer.analyze(&[tx_to(PHISHING, "0")]);
        assert_eq!(assessment.score, 30);
        assert_eq!(assessment.findings.len(), 1);
        assert!(assessment.findings[0].contains("Phishing scam"));
    }

    #[test]
    fn test_repeat_interactions_not_deduplicated() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        let txs = vec![tx_to(HONEYPOT, "0"), tx_to(HONEYPOT, "0"), tx_to(HONEYPOT, "0")];
        let assessment = analyzer.analyze(&txs);
        assert_eq!(assessment.score, 75);
        assert_eq!(assessment.findings.len(), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        let mixed_case = "0xABCDEFabcdefABCDEFabcdefABCDEFabcdefABCD";
        let assessment = analyzer.analyze(&[tx_to(mixed_case, "0")]);
        assert_eq!(assessment.score, 30);
        assert!(assessment.findings[0].contains("Phishing scam"));
    }

    #[test]
    fn test_high_frequency_fires_once() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        let txs: Vec<Transaction> = (0..150).map(|_| tx_to(CLEAN, "0")).collect();
        let assessment = analyzer.analyze(&txs);
        assert_eq!(assessment.score, 10);
        assert_eq!(assessment.findings.len(), 1);
        assert!(assessment.findings[0].contains("High frequency trading"));
    }

    #[test]
    fn test_exactly_threshold_counts_do_not_fire() {
        let analyzer = TransactionAnalyzer::with_static_feed();

        // Exactly 100 transactions: no frequency finding
        let txs: Vec<Transaction> = (0..100).map(|_| tx_to(CLEAN, "0")).collect();
        assert_eq!(analyzer.analyze(&txs).score, 0);

        // Exactly 10 failures: no failure finding
        let txs: Vec<Transaction> = (0..10).map(|_| tx_to(CLEAN, "1")).collect();
        assert_eq!(analyzer.analyze(&txs).score, 0);
    }

    #[test]
    fn test_failed_transactions_fire_once() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        let txs: Vec<Transaction> = (0..11).map(|_| tx_to(CLEAN, "1")).collect();
        let assessment = analyzer.analyze(&txs);
        assert_eq!(assessment.score, 10);
        assert!(assessment.findings[0].contains("failed transactions"));
    }

    #[test]
    fn test_score_clamped_at_100() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        // 101 failed transactions to the phishing address: raw score is
        // 101*30 + 10 + 10, well past the ceiling.
        let txs: Vec<Transaction> = (0..101).map(|_| tx_to(PHISHING, "1")).collect();
        let assessment = analyzer.analyze(&txs);
        assert_eq!(assessment.score, 100);
        // One finding per match plus both heuristics
        assert_eq!(assessment.findings.len(), 103);
    }

    #[test]
    fn test_all_categories_accumulate() {
        let analyzer = TransactionAnalyzer::with_static_feed();
        let txs = vec![tx_to(PHISHING, "0"), tx_to(HONEYPOT, "0"), tx_to(RUGPULL, "0")];
        let assessment = analyzer.analyze(&txs);
        assert_eq!(assessment.score, 75);
        assert_eq!(assessment.findings.len(), 3);
    }
}
