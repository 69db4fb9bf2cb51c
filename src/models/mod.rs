//! Data models for Wallet Sentry

pub mod errors;
pub mod types;

pub use errors::{AppError, AppResult, ErrorCode};
pub use types::{RiskAssessment, RiskLevel, Transaction};
