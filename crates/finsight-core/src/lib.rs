//! Finsight Core Library
//!
//! Shared functionality for the finsight personal finance backend:
//! - Domain models for transaction and account snapshots
//! - Calendar-month expense aggregation
//! - Regression-based next-month spending forecast
//! - Financial health scoring and spending advice
//! - The ProfileStore capability trait host layers implement

pub mod analytics;
pub mod error;
pub mod models;
pub mod store;

pub use analytics::{
    advise, forecast, health_score, monthly_expense_totals, AnalyticsEngine, Confidence,
    ConfidenceModel, Forecaster, InsightReport, MonthKey, PredictionResult, Trend,
};
pub use error::{Error, Result};
pub use models::{AccountKind, AccountRecord, TransactionKind, TransactionRecord};
pub use store::ProfileStore;
