//! API Request Handlers

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::types::*;
use crate::core::registry::ScanStatus;
use crate::core::scanner::WalletScanner;
use crate::core::validator::validate_address as validate_address_syntax;
use crate::providers::etherscan::EtherscanClient;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

/// Shared application state
pub struct AppState {
    pub scanner: Arc<WalletScanner<EtherscanClient>>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(scanner: Arc<WalletScanner<EtherscanClient>>) -> Self {
        Self {
            scanner,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn reject(status: StatusCode, error: ApiError, start: Instant) -> HandlerError {
    (status, Json(ApiResponse::error(error, elapsed_ms(start))))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        service: "Wallet Sentry".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Scan
// ============================================

/// Start a background scan for an address.
/// 400 when the address is missing or a scan is already in flight.
pub async fn start_scan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ApiResponse<ScanStartedData>>, HandlerError> {
    let start = Instant::now();
    let address = req.address.trim().to_string();

    if address.is_empty() {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            ApiError::bad_request("Address is required"),
            start,
        ));
    }

    if !validate_address_syntax(&address) {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            ApiError::bad_request(
                "Invalid EVM address format. Address must start with '0x' and be 42 characters long.",
            ),
            start,
        ));
    }

    // Atomic check-and-set; duplicates are rejected here, before any work.
    state.scanner.registry().begin(&address).map_err(|err| {
        reject(StatusCode::BAD_REQUEST, ApiError::bad_request(err.message), start)
    })?;

    info!("🚀 Scan started for {}", address);

    let scanner = state.scanner.clone();
    let task_address = address.clone();
    tokio::spawn(async move {
        scanner.run_recorded(&task_address).await;
    });

    let data = ScanStartedData {
        message: "Scan started".to_string(),
        address,
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

// ============================================
// Status
// ============================================

/// Scan status for an address; 404 when the address was never scanned.
pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<ApiResponse<StatusData>>, HandlerError> {
    let start = Instant::now();

    let status = state.scanner.status(&address);
    let data = match status {
        ScanStatus::NotFound => {
            return Err(reject(
                StatusCode::NOT_FOUND,
                ApiError::not_found("No scan recorded for this address"),
                start,
            ));
        }
        ScanStatus::Scanning => StatusData {
            status: "scanning".to_string(),
            result: None,
            error: None,
        },
        ScanStatus::Completed(payload) => StatusData {
            status: "completed".to_string(),
            result: Some(payload),
            error: None,
        },
        ScanStatus::Error(message) => StatusData {
            status: "error".to_string(),
            result: None,
            error: Some(message),
        },
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

// ============================================
// Address validation
// ============================================

pub async fn validate_address(
    Json(req): Json<ValidateRequest>,
) -> Json<ApiResponse<ValidateData>> {
    let start = Instant::now();

    let data = ValidateData {
        valid: validate_address_syntax(req.address.trim()),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Dashboard
// ============================================

/// Dashboard payload for a completed scan.
/// 404 until a scan completes; 500 when the scan ended in error.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<ApiResponse<crate::core::dashboard::DashboardData>>, HandlerError> {
    let start = Instant::now();

    match state.scanner.status(&address) {
        ScanStatus::Completed(payload) => {
            Ok(Json(ApiResponse::success(payload.dashboard, elapsed_ms(start))))
        }
        ScanStatus::Error(message) => Err(reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal(message),
            start,
        )),
        _ => Err(reject(
            StatusCode::NOT_FOUND,
            ApiError::not_found("No scan data available for this address"),
            start,
        )),
    }
}

// ============================================
// Stats
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatsData>> {
    let start = Instant::now();
    let registry = state.scanner.registry();
    let counts = registry.counts();

    let data = StatsData {
        tracked_addresses: registry.len(),
        scans_in_flight: counts.scanning,
        scans_completed: counts.completed,
        scans_failed: counts.failed,
        uptime_seconds: state.uptime_seconds(),
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}
