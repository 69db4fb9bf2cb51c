//! Core scanning logic: validation, heuristics, classification,
//! report formatting, orchestration and dashboard aggregation.

pub mod analyzer;
pub mod classifier;
pub mod dashboard;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod validator;
