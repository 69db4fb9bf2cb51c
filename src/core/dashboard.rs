//! Dashboard Aggregation
//!
//! Transforms a raw transaction list into chart-ready summaries:
//! - summary statistics (counts, volumes, direction flows)
//! - date-bucketed activity timeline
//! - per-transaction risk-bucket distribution
//! - monthly value-flow series
//! - simplified network layout (node positions/sizes for up to 10 addresses)
//!
//! Everything here is a pure function of its inputs: no mutation, no I/O,
//! identical output for identical input. Every sub-aggregation returns a
//! defined empty/placeholder shape when the history is empty.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::types::Transaction;

/// Maximum number of nodes in the network layout
const MAX_NETWORK_NODES: usize = 10;

/// Node size for the scanned wallet vs its counterparties
const FOCUS_NODE_SIZE: u32 = 30;
const PEER_NODE_SIZE: u32 = 20;

/// Complete dashboard payload for one address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub address: String,
    pub total_transactions: usize,
    pub summary: TransactionSummary,
    pub timeline: TimelineData,
    pub risk_distribution: RiskDistributionData,
    pub value_flow: ValueFlowData,
    pub network: NetworkData,
}

/// Headline statistics for the scanned wallet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub total_transactions: usize,
    /// Sum of all transaction values, formatted for display
    pub total_volume: String,
    pub total_incoming_eth: f64,
    pub total_outgoing_eth: f64,
    pub net_flow_eth: f64,
    pub failed_transactions: usize,
    pub success_rate: f64,
    pub unique_addresses: usize,
    /// Date of the chronologically earliest transaction
    pub first_transaction: String,
    pub last_transaction: String,
}

impl TransactionSummary {
    fn empty() -> Self {
        Self {
            total_transactions: 0,
            total_volume: "0.00 ETH".to_string(),
            total_incoming_eth: 0.0,
            total_outgoing_eth: 0.0,
            net_flow_eth: 0.0,
            failed_transactions: 0,
            success_rate: 0.0,
            unique_addresses: 0,
            first_transaction: "N/A".to_string(),
            last_transaction: "N/A".to_string(),
        }
    }
}

/// Transactions per calendar date, date-sorted parallel vectors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineData {
    pub dates: Vec<String>,
    pub counts: Vec<usize>,
}

/// Risk bucket counts for the pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskDistributionData {
    pub values: Vec<usize>,
    pub labels: Vec<String>,
}

/// Summed ETH value per calendar month, month-sorted parallel vectors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueFlowData {
    pub periods: Vec<String>,
    pub values: Vec<f64>,
}

/// Simplified network layout: one node per distinct address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkData {
    pub x: Vec<usize>,
    pub y: Vec<i64>,
    pub labels: Vec<String>,
    pub sizes: Vec<u32>,
}

/// Build the full dashboard payload for an address.
pub fn build_dashboard(transactions: &[Transaction], address: &str) -> DashboardData {
    DashboardData {
        address: address.to_string(),
        total_transactions: transactions.len(),
        summary: summarize(transactions, address),
        timeline: timeline(transactions),
        risk_distribution: risk_distribution(transactions),
        value_flow: value_flow(transactions),
        network: network_layout(transactions, address),
    }
}

/// Headline statistics. Direction is resolved against the scanned address:
/// a transfer counts as incoming when `to` is the wallet and outgoing when
/// `from` is; self-transfers count as neither.
fn summarize(transactions: &[Transaction], address: &str) -> TransactionSummary {
    if transactions.is_empty() {
        return TransactionSummary::empty();
    }

    let mut total_volume = 0.0;
    let mut incoming = 0.0;
    let mut outgoing = 0.0;
    let mut failed = 0;
    let mut unique: HashSet<String> = HashSet::new();

    for tx in transactions {
        let value = tx.value_eth();
        total_volume += value;

        if tx.failed() {
            failed += 1;
        }

        if !tx.from.is_empty() {
            unique.insert(tx.from.to_lowercase());
        }
        if !tx.to.is_empty() {
            unique.insert(tx.to.to_lowercase());
        }

        if !tx.from.eq_ignore_ascii_case(&tx.to) {
            if tx.to.eq_ignore_ascii_case(address) {
                incoming += value;
            } else if tx.from.eq_ignore_ascii_case(address) {
                outgoing += value;
            }
        }
    }

    let total = transactions.len();
    let success_rate = ((total - failed) as f64 / total as f64) * 100.0;

    // Source list is newest-first: the earliest transaction is the last element.
    let first = transactions[total - 1].timestamp();
    let last = transactions[0].timestamp();

    TransactionSummary {
        total_transactions: total,
        total_volume: format!("{:.2} ETH", total_volume),
        total_incoming_eth: round_to(incoming, 6),
        total_outgoing_eth: round_to(outgoing, 6),
        net_flow_eth: round_to(incoming - outgoing, 6),
        failed_transactions: failed,
        success_rate: round_to(success_rate, 2),
        unique_addresses: unique.len(),
        first_transaction: day_of(first),
        last_transaction: day_of(last),
    }
}

/// Transactions grouped by calendar date.
fn timeline(transactions: &[Transaction]) -> TimelineData {
    let mut date_counts: BTreeMap<String, usize> = BTreeMap::new();
    for tx in transactions {
        *date_counts.entry(day_of(tx.timestamp())).or_insert(0) += 1;
    }

    TimelineData {
        dates: date_counts.keys().cloned().collect(),
        counts: date_counts.values().copied().collect(),
    }
}

/// Per-transaction risk buckets: High when execution failed, Medium when
/// the value exceeds 1 ETH, Low otherwise.
fn risk_distribution(transactions: &[Transaction]) -> RiskDistributionData {
    if transactions.is_empty() {
        return RiskDistributionData {
            values: vec![100],
            labels: vec!["No Data".to_string()],
        };
    }

    let mut low = 0;
    let mut medium = 0;
    let mut high = 0;

    for tx in transactions {
        if tx.failed() {
            high += 1;
        } else if tx.value_eth() > 1.0 {
            medium += 1;
        } else {
            low += 1;
        }
    }

    RiskDistributionData {
        values: vec![low, medium, high],
        labels: vec![
            "Low Risk".to_string(),
            "Medium Risk".to_string(),
            "High Risk".to_string(),
        ],
    }
}

/// Summed value per calendar month.
fn value_flow(transactions: &[Transaction]) -> ValueFlowData {
    let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
    for tx in transactions {
        *monthly.entry(month_of(tx.timestamp())).or_insert(0.0) += tx.value_eth();
    }

    ValueFlowData {
        periods: monthly.keys().cloned().collect(),
        values: monthly.values().copied().collect(),
    }
}

/// Distinct addresses in first-seen order, capped at [`MAX_NETWORK_NODES`].
/// The scanned wallet gets a larger node than its counterparties.
fn network_layout(transactions: &[Transaction], address: &str) -> NetworkData {
    if transactions.is_empty() {
        return NetworkData {
            x: vec![0],
            y: vec![0],
            labels: vec!["No Data".to_string()],
            sizes: vec![PEER_NODE_SIZE],
        };
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut nodes: Vec<String> = Vec::new();
    for tx in transactions {
        for addr in [&tx.from, &tx.to] {
            if !addr.is_empty() && seen.insert(addr.to_lowercase()) {
                nodes.push(addr.clone());
            }
        }
    }
    nodes.truncate(MAX_NETWORK_NODES);

    let sizes = nodes
        .iter()
        .map(|addr| {
            if addr.eq_ignore_ascii_case(address) {
                FOCUS_NODE_SIZE
            } else {
                PEER_NODE_SIZE
            }
        })
        .collect();

    NetworkData {
        x: (0..nodes.len()).collect(),
        y: vec![0; nodes.len()],
        labels: nodes.iter().map(|addr| short_label(addr)).collect(),
        sizes,
    }
}

fn short_label(address: &str) -> String {
    if address.len() >= 10 {
        format!("{}...", &address[..10])
    } else {
        format!("{}...", address)
    }
}

fn day_of(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

fn month_of(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format("%Y-%m")
        .to_string()
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const PEER: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    fn tx(from: &str, to: &str, value_wei: &str, timestamp: i64, is_error: &str) -> Transaction {
        Transaction {
            hash: format!("0xhash{}", timestamp),
            from: from.to_string(),
            to: to.to_string(),
            value: value_wei.to_string(),
            time_stamp: timestamp.to_string(),
            is_error: is_error.to_string(),
        }
    }

    // 2024-01-15 and 2024-02-20, both midday UTC
    const TS_JAN: i64 = 1705320000;
    const TS_FEB: i64 = 1708430400;

    #[test]
    fn test_empty_input_placeholder_shapes() {
        let dashboard = build_dashboard(&[], WALLET);

        assert_eq!(dashboard.total_transactions, 0);
        assert_eq!(dashboard.timeline.dates, Vec::<String>::new());
        assert_eq!(dashboard.timeline.counts, Vec::<usize>::new());
        assert_eq!(dashboard.risk_distribution.values, vec![100]);
        assert_eq!(dashboard.risk_distribution.labels, vec!["No Data"]);
        assert!(dashboard.value_flow.periods.is_empty());
        assert_eq!(dashboard.network.x, vec![0]);
        assert_eq!(dashboard.network.labels, vec!["No Data"]);
        assert_eq!(dashboard.summary.first_transaction, "N/A");
    }

    #[test]
    fn test_idempotent() {
        let txs = vec![
            tx(PEER, WALLET, "2000000000000000000", TS_FEB, "0"),
            tx(WALLET, PEER, "500000000000000000", TS_JAN, "1"),
        ];
        let first = build_dashboard(&txs, WALLET);
        let second = build_dashboard(&txs, WALLET);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_direction_and_totals() {
        // Newest-first: 2 ETH incoming in Feb, then 0.5 ETH outgoing in Jan
        let txs = vec![
            tx(PEER, WALLET, "2000000000000000000", TS_FEB, "0"),
            tx(WALLET, PEER, "500000000000000000", TS_JAN, "0"),
        ];
        let summary = summarize(&txs, WALLET);

        assert_eq!(summary.total_transactions, 2);
        assert_eq!(summary.total_volume, "2.50 ETH");
        assert_eq!(summary.total_incoming_eth, 2.0);
        assert_eq!(summary.total_outgoing_eth, 0.5);
        assert_eq!(summary.net_flow_eth, 1.5);
        assert_eq!(summary.unique_addresses, 2);
        assert_eq!(summary.first_transaction, "2024-01-15");
        assert_eq!(summary.last_transaction, "2024-02-20");
        assert_eq!(summary.success_rate, 100.0);
    }

    #[test]
    fn test_summary_failed_and_success_rate() {
        let txs = vec![
            tx(PEER, WALLET, "0", TS_FEB, "1"),
            tx(PEER, WALLET, "0", TS_JAN, "0"),
        ];
        let summary = summarize(&txs, WALLET);
        assert_eq!(summary.failed_transactions, 1);
        assert_eq!(summary.success_rate, 50.0);
    }

    #[test]
    fn test_timeline_sorted_by_date() {
        let txs = vec![
            tx(PEER, WALLET, "0", TS_FEB, "0"),
            tx(PEER, WALLET, "0", TS_FEB, "0"),
            tx(PEER, WALLET, "0", TS_JAN, "0"),
        ];
        let data = timeline(&txs);
        assert_eq!(data.dates, vec!["2024-01-15", "2024-02-20"]);
        assert_eq!(data.counts, vec![1, 2]);
    }

    #[test]
    fn test_risk_buckets() {
        let txs = vec![
            tx(PEER, WALLET, "0", TS_JAN, "1"),                   // High: failed
            tx(PEER, WALLET, "2000000000000000000", TS_JAN, "0"), // Medium: > 1 ETH
            tx(PEER, WALLET, "1000000000000000000", TS_JAN, "0"), // Low: exactly 1 ETH
            tx(PEER, WALLET, "10", TS_JAN, "0"),                  // Low
        ];
        let data = risk_distribution(&txs);
        assert_eq!(data.values, vec![2, 1, 1]);
        assert_eq!(data.labels, vec!["Low Risk", "Medium Risk", "High Risk"]);
    }

    #[test]
    fn test_value_flow_monthly() {
        let txs = vec![
            tx(PEER, WALLET, "1000000000000000000", TS_FEB, "0"),
            tx(PEER, WALLET, "1000000000000000000", TS_JAN, "0"),
            tx(PEER, WALLET, "500000000000000000", TS_JAN, "0"),
        ];
        let data = value_flow(&txs);
        assert_eq!(data.periods, vec!["2024-01", "2024-02"]);
        assert!((data.values[0] - 1.5).abs() < 1e-9);
        assert!((data.values[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_network_layout_sizes_and_labels() {
        let txs = vec![tx(PEER, WALLET, "0", TS_JAN, "0")];
        let data = network_layout(&txs, WALLET);

        assert_eq!(data.x, vec![0, 1]);
        assert_eq!(data.y, vec![0, 0]);
        assert_eq!(data.labels, vec!["0xbbbbbbbb...", "0xaaaaaaaa..."]);
        assert_eq!(data.sizes, vec![PEER_NODE_SIZE, FOCUS_NODE_SIZE]);
    }

    #[test]
    fn test_network_truncated_to_ten_nodes() {
        let txs: Vec<Transaction> = (0..15)
            .map(|i| {
                let peer = format!("0x{:040x}", i + 1);
                tx(&peer, WALLET, "0", TS_JAN, "0")
            })
            .collect();
        let data = network_layout(&txs, WALLET);
        assert_eq!(data.x.len(), 10);
        assert_eq!(data.labels.len(), 10);
        assert_eq!(data.sizes.len(), 10);
    }
}
