//! Financial Analytics Engine
//!
//! Pure computation over a user's transaction and account snapshots:
//!
//! - **Aggregator** - groups expense transactions into calendar-month buckets
//! - **Forecaster** - fits a linear trend to the buckets and predicts next
//!   month's spending with a trend label and confidence tier
//! - **Scorer** - bounded 0-100 financial health score
//! - **Advisor** - short list of prioritized spending tips
//!
//! The components are stateless and composed sequentially; [`AnalyticsEngine`]
//! runs all of them in one pass and returns an [`InsightReport`].
//!
//! ## Usage
//!
//! ```rust
//! use finsight_core::analytics::AnalyticsEngine;
//!
//! let engine = AnalyticsEngine::new();
//! let report = engine.analyze(&[], &[]).unwrap();
//! assert_eq!(report.score, 50);
//! ```

pub mod advise;
pub mod aggregate;
pub mod engine;
pub mod forecast;
pub mod score;
pub mod types;

pub use advise::advise;
pub use aggregate::{monthly_expense_totals, MonthKey};
pub use engine::AnalyticsEngine;
pub use forecast::{forecast, ConfidenceModel, Forecaster};
pub use score::health_score;
pub use types::{Confidence, InsightReport, PredictionResult, Trend};
