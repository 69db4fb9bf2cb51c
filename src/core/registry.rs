//! Scan Status Registry
//!
//! Thread-safe per-address scan state store backed by DashMap. Each address
//! walks the machine `absent -> scanning -> {completed | error}`; terminal
//! states stay until a new scan restarts the machine. The check-and-set on
//! `scanning` happens under the entry lock of one shard, which gives the
//! at-most-one-in-flight-scan guarantee per address.
//!
//! Process-local and unbounded: a best-effort cache for polling callers,
//! not a system of record. Lost on restart by design.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

use crate::core::dashboard::DashboardData;
use crate::models::errors::{AppError, AppResult};

/// Result of a completed scan: the text report plus the dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanPayload {
    pub security_report: String,
    pub dashboard: DashboardData,
}

/// State stored per address. Replaces the original string-sentinel store
/// with tagged variants so results and error text cannot be confused.
#[derive(Debug, Clone)]
pub enum ScanState {
    Scanning,
    Completed(ScanPayload),
    Error(String),
}

/// Answer to a status query; `NotFound` is distinct from a failed scan.
#[derive(Debug, Clone)]
pub enum ScanStatus {
    NotFound,
    Scanning,
    Completed(ScanPayload),
    Error(String),
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::NotFound => "not_found",
            ScanStatus::Scanning => "scanning",
            ScanStatus::Completed(_) => "completed",
            ScanStatus::Error(_) => "error",
        }
    }
}

/// Aggregate registry counts for the stats endpoint
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RegistryCounts {
    pub scanning: usize,
    pub completed: usize,
    pub failed: usize,
}

/// In-memory scan registry, keyed by lowercase address
#[derive(Default)]
pub struct ScanRegistry {
    entries: DashMap<String, ScanState>,
}

impl ScanRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    #[inline]
    fn normalize(address: &str) -> String {
        address.to_lowercase()
    }

    /// Atomically move an address into `scanning`.
    ///
    /// Rejects with `SCAN_IN_PROGRESS` when a scan is already in flight
    /// for the address, leaving the stored state untouched. Terminal
    /// states are overwritten and the machine restarts.
    pub fn begin(&self, address: &str) -> AppResult<()> {
        match self.entries.entry(Self::normalize(address)) {
            Entry::Occupied(mut occupied) => {
                if matches!(occupied.get(), ScanState::Scanning) {
                    return Err(AppError::scan_in_progress(address));
                }
                occupied.insert(ScanState::Scanning);
                Ok(())
            }
            Entry::Vacant(vacant) => {
                vacant.insert(ScanState::Scanning);
                Ok(())
            }
        }
    }

    /// Record a successful scan result.
    pub fn complete(&self, address: &str, payload: ScanPayload) {
        debug!("Registry: {} -> completed", address);
        self.entries
            .insert(Self::normalize(address), ScanState::Completed(payload));
    }

    /// Record a failed scan with its human-readable message.
    pub fn fail(&self, address: &str, message: impl Into<String>) {
        debug!("Registry: {} -> error", address);
        self.entries
            .insert(Self::normalize(address), ScanState::Error(message.into()));
    }

    /// Current status for an address; never-seen addresses yield `NotFound`.
    pub fn status(&self, address: &str) -> ScanStatus {
        match self.entries.get(&Self::normalize(address)) {
            None => ScanStatus::NotFound,
            Some(entry) => match entry.value() {
                ScanState::Scanning => ScanStatus::Scanning,
                ScanState::Completed(payload) => ScanStatus::Completed(payload.clone()),
                ScanState::Error(message) => ScanStatus::Error(message.clone()),
            },
        }
    }

    /// State counts across all tracked addresses.
    pub fn counts(&self) -> RegistryCounts {
        let mut counts = RegistryCounts::default();
        for entry in self.entries.iter() {
            match entry.value() {
                ScanState::Scanning => counts.scanning += 1,
                ScanState::Completed(_) => counts.completed += 1,
                ScanState::Error(_) => counts.failed += 1,
            }
        }
        counts
    }

    /// Number of tracked addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dashboard::build_dashboard;
    use crate::models::errors::ErrorCode;

    const ADDRESS: &str = "0x1234567890123456789012345678901234567890";

    fn payload() -> ScanPayload {
        ScanPayload {
            security_report: "report".to_string(),
            dashboard: build_dashboard(&[], ADDRESS),
        }
    }

    #[test]
    fn test_never_seen_is_not_found() {
        let registry = ScanRegistry::new();
        assert!(matches!(registry.status(ADDRESS), ScanStatus::NotFound));
    }

    #[test]
    fn test_begin_sets_scanning() {
        let registry = ScanRegistry::new();
        registry.begin(ADDRESS).unwrap();
        assert!(matches!(registry.status(ADDRESS), ScanStatus::Scanning));
    }

    #[test]
    fn test_duplicate_scan_rejected() {
        let registry = ScanRegistry::new();
        registry.begin(ADDRESS).unwrap();

        let err = registry.begin(ADDRESS).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScanInProgress);
        // State unchanged
        assert!(matches!(registry.status(ADDRESS), ScanStatus::Scanning));
    }

    #[test]
    fn test_complete_and_restart() {
        let registry = ScanRegistry::new();
        registry.begin(ADDRESS).unwrap();
        registry.complete(ADDRESS, payload());
        assert!(matches!(registry.status(ADDRESS), ScanStatus::Completed(_)));

        // Terminal state allows a fresh scan
        registry.begin(ADDRESS).unwrap();
        assert!(matches!(registry.status(ADDRESS), ScanStatus::Scanning));
    }

    #[test]
    fn test_error_state_holds_message() {
        let registry = ScanRegistry::new();
        registry.begin(ADDRESS).unwrap();
        registry.fail(ADDRESS, "explorer unavailable");

        match registry.status(ADDRESS) {
            ScanStatus::Error(message) => assert_eq!(message, "explorer unavailable"),
            other => panic!("expected error status, got {}", other.as_str()),
        }
    }

    #[test]
    fn test_keys_normalized() {
        let registry = ScanRegistry::new();
        registry.begin(&ADDRESS.to_uppercase().replacen("0X", "0x", 1)).unwrap();
        assert!(matches!(registry.status(ADDRESS), ScanStatus::Scanning));
    }

    #[test]
    fn test_counts() {
        let registry = ScanRegistry::new();
        registry.begin("0xaaaa").unwrap();
        registry.begin("0xbbbb").unwrap();
        registry.complete("0xbbbb", payload());
        registry.begin("0xcccc").unwrap();
        registry.fail("0xcccc", "boom");

        let counts = registry.counts();
        assert_eq!(counts.scanning, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(registry.len(), 3);
    }
}
