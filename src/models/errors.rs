//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code to keep production logs
//! searchable. Codes follow the pattern CATEGORY_SPECIFIC_ERROR:
//! - ADDRESS_xxx: address validation errors
//! - EXPLORER_xxx: block-explorer fetch errors
//! - SCAN_xxx: scan lifecycle errors
//! - CFG_xxx: configuration errors
//! - API_xxx: API surface errors

use std::fmt;

/// Application-wide error type. All public operations return this;
/// anticipated failures never cross the core boundary as panics.
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed EVM address supplied by the caller
    AddressInvalid,

    /// Block-explorer request failed (transport or HTTP error)
    ExplorerRequestFailed,
    /// Block-explorer returned no transactions for the address
    ExplorerEmptyResult,
    /// Block-explorer response could not be decoded
    ExplorerInvalidResponse,

    /// A scan is already in flight for this address
    ScanInProgress,
    /// No scan has ever been recorded for this address
    ScanNotFound,
    /// Unexpected failure inside scoring/classification/formatting
    AnalysisFault,

    /// Missing required API key at construction time
    ConfigMissingApiKey,
    /// Invalid configuration value
    ConfigInvalidValue,

    /// Invalid request format
    ApiBadRequest,
    /// Resource not found
    ApiNotFound,
    /// Internal server error
    ApiInternalError,

    /// Unknown error
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddressInvalid => "ADDRESS_INVALID",

            Self::ExplorerRequestFailed => "EXPLORER_REQUEST_FAILED",
            Self::ExplorerEmptyResult => "EXPLORER_EMPTY_RESULT",
            Self::ExplorerInvalidResponse => "EXPLORER_INVALID_RESPONSE",

            Self::ScanInProgress => "SCAN_IN_PROGRESS",
            Self::ScanNotFound => "SCAN_NOT_FOUND",
            Self::AnalysisFault => "ANALYSIS_FAULT",

            Self::ConfigMissingApiKey => "CFG_MISSING_API_KEY",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiNotFound => "API_NOT_FOUND",
            Self::ApiInternalError => "API_INTERNAL_ERROR",

            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::AddressInvalid
            | Self::ScanInProgress
            | Self::ApiBadRequest
            | Self::ConfigInvalidValue => 400,
            Self::ScanNotFound | Self::ApiNotFound => 404,
            _ => 500,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Malformed wallet address
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AddressInvalid, msg)
    }

    /// Explorer fetch failed
    pub fn explorer_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExplorerRequestFailed, msg)
    }

    /// Explorer returned an empty history
    pub fn explorer_empty(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExplorerEmptyResult, msg)
    }

    /// Duplicate scan attempted while one is in flight
    pub fn scan_in_progress(address: &str) -> Self {
        Self::new(
            ErrorCode::ScanInProgress,
            format!("Wallet {} is already being scanned", address),
        )
    }

    /// Unexpected failure during analysis
    pub fn analysis_fault(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AnalysisFault, msg)
    }

    /// Missing API key
    pub fn missing_api_key(key_name: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissingApiKey,
            format!("Missing API key: {}", key_name),
        )
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }

    /// API internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInternalError, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::Unknown, "IO error", err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::ExplorerRequestFailed, "Explorer request timeout")
        } else if err.is_connect() {
            Self::new(ErrorCode::ExplorerRequestFailed, "Explorer connection failed")
        } else {
            Self::new(ErrorCode::Unknown, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ExplorerInvalidResponse, "JSON parse error", err)
    }
}
