//! Engine orchestration - composes forecast, score, and advice

use chrono::Utc;

use crate::error::Result;
use crate::models::{AccountRecord, TransactionRecord};

use super::advise::advise;
use super::forecast::Forecaster;
use super::score::health_score;
use super::types::InsightReport;

/// Runs the full analytics pass for one user.
///
/// Stateless and deterministic given its inputs; a single engine value can
/// be shared freely across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    forecaster: Forecaster,
}

impl AnalyticsEngine {
    /// Engine with the default sample-count confidence model
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a non-default forecaster (e.g. the fit-quality
    /// confidence model)
    pub fn with_forecaster(forecaster: Forecaster) -> Self {
        Self { forecaster }
    }

    /// Produce the combined report: prediction, health score, and tips
    pub fn analyze(
        &self,
        transactions: &[TransactionRecord],
        accounts: &[AccountRecord],
    ) -> Result<InsightReport> {
        let prediction = self.forecaster.forecast(transactions)?;
        let score = health_score(transactions, accounts);
        let tips = advise(transactions, &prediction);

        tracing::debug!(
            trend = prediction.trend.as_str(),
            score,
            tip_count = tips.len(),
            "Analytics pass complete"
        );

        Ok(InsightReport {
            prediction,
            score,
            tips,
            generated_at: Utc::now(),
        })
    }
}
