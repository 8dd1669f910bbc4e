//! Next-month expense forecast via least-squares regression
//!
//! Fits a straight line to the chronological sequence of monthly expense
//! totals and extrapolates one step past the last bucket. Bucket positions
//! are sequential indices: calendar gaps between active months are NOT
//! reflected in the spacing, so two buckets one month apart and two buckets
//! five months apart both count as adjacent sample points. That is a
//! deliberate simplification of the heuristic, not an oversight.

use crate::error::Result;
use crate::models::TransactionRecord;

use super::aggregate::monthly_expense_totals;
use super::types::{Confidence, PredictionResult, Trend};

/// Slope magnitude (amount units per month) beyond which the series is
/// labeled increasing or decreasing. Absolute, not relative to data scale:
/// callers operating at a different currency magnitude see different
/// practical sensitivity.
const TREND_SLOPE_THRESHOLD: f64 = 50.0;

/// Minimum transactions before any regression is attempted
const MIN_TRANSACTIONS: usize = 3;

/// Minimum distinct monthly buckets before any regression is attempted
const MIN_BUCKETS: usize = 2;

/// How a forecast's confidence tier is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidenceModel {
    /// Tier by bucket count: 6+ high, 4-5 medium, otherwise low
    #[default]
    SampleCount,
    /// Tier by the regression's R²: >0.7 high, >0.4 medium, otherwise low
    FitQuality,
}

/// Forecaster for next-month expenses
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    confidence_model: ConfidenceModel,
}

impl Forecaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence_model(confidence_model: ConfidenceModel) -> Self {
        Self { confidence_model }
    }

    /// Predict next month's expense total from raw transaction history.
    ///
    /// Under-populated histories (fewer than 3 transactions, or fewer than
    /// 2 active months) produce the declared insufficient-data result
    /// rather than an error.
    pub fn forecast(&self, transactions: &[TransactionRecord]) -> Result<PredictionResult> {
        if transactions.len() < MIN_TRANSACTIONS {
            return Ok(PredictionResult::insufficient_data());
        }

        let buckets = monthly_expense_totals(transactions)?;
        if buckets.len() < MIN_BUCKETS {
            return Ok(PredictionResult::insufficient_data());
        }

        let totals: Vec<f64> = buckets.values().copied().collect();
        let n = totals.len();

        // Ordinary least squares over x = 0..n-1
        let x_mean = (n - 1) as f64 / 2.0;
        let y_mean = totals.iter().sum::<f64>() / n as f64;

        let mut covariance = 0.0;
        let mut x_variance = 0.0;
        for (i, &y) in totals.iter().enumerate() {
            let dx = i as f64 - x_mean;
            covariance += dx * (y - y_mean);
            x_variance += dx * dx;
        }

        // n >= 2 keeps the x spread nonzero
        let slope = covariance / x_variance;
        let intercept = y_mean - slope * x_mean;
        let predicted = (slope * n as f64 + intercept).max(0.0);

        let trend = if slope > TREND_SLOPE_THRESHOLD {
            Trend::Increasing
        } else if slope < -TREND_SLOPE_THRESHOLD {
            Trend::Decreasing
        } else {
            Trend::Stable
        };

        let confidence = match self.confidence_model {
            ConfidenceModel::SampleCount => confidence_from_samples(n),
            ConfidenceModel::FitQuality => {
                confidence_from_fit(r_squared(&totals, slope, intercept, y_mean))
            }
        };

        Ok(PredictionResult {
            predicted_amount: round2(predicted),
            confidence,
            trend,
            historical_average: round2(y_mean),
        })
    }
}

/// Forecast with the default sample-count confidence model
pub fn forecast(transactions: &[TransactionRecord]) -> Result<PredictionResult> {
    Forecaster::new().forecast(transactions)
}

fn confidence_from_samples(buckets: usize) -> Confidence {
    if buckets >= 6 {
        Confidence::High
    } else if buckets >= 4 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn confidence_from_fit(r2: f64) -> Confidence {
    if r2 > 0.7 {
        Confidence::High
    } else if r2 > 0.4 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Coefficient of determination of the fitted line
fn r_squared(totals: &[f64], slope: f64, intercept: f64, y_mean: f64) -> f64 {
    let ss_tot: f64 = totals.iter().map(|y| (y - y_mean).powi(2)).sum();
    if ss_tot == 0.0 {
        // A flat series is fit exactly by a flat line
        return 1.0;
    }
    let ss_res: f64 = totals
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let fitted = slope * i as f64 + intercept;
            (y - fitted).powi(2)
        })
        .sum();
    1.0 - ss_res / ss_tot
}

/// Round to 2 decimal places for display
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn expense(amount: f64, occurred_on: &str) -> TransactionRecord {
        TransactionRecord {
            kind: TransactionKind::Expense,
            amount,
            category: "misc".to_string(),
            occurred_on: occurred_on.to_string(),
        }
    }

    /// One expense per consecutive month starting at 2025-01, one entry
    /// per amount in the slice
    fn monthly_series(amounts: &[f64]) -> Vec<TransactionRecord> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, &a)| expense(a, &format!("2025-{:02}-15", i + 1)))
            .collect()
    }

    #[test]
    fn test_too_few_transactions_is_insufficient_data() {
        let txs = monthly_series(&[100.0, 100.0]);
        let p = forecast(&txs).unwrap();
        assert_eq!(p.trend, Trend::InsufficientData);
        assert_eq!(p.predicted_amount, 0.0);
    }

    #[test]
    fn test_single_month_is_insufficient_data_regardless_of_count() {
        // Five transactions, all in January
        let txs: Vec<_> = (0..5).map(|_| expense(50.0, "2025-01-10")).collect();
        let p = forecast(&txs).unwrap();
        assert_eq!(p.trend, Trend::InsufficientData);
        assert_eq!(p.confidence, Confidence::Low);
    }

    #[test]
    fn test_flat_six_month_series() {
        // 6 months of $100 each: stable trend, high confidence, prediction
        // equal to the historical average
        let txs = monthly_series(&[100.0; 6]);
        let p = forecast(&txs).unwrap();
        assert_eq!(p.historical_average, 100.0);
        assert_eq!(p.predicted_amount, 100.0);
        assert_eq!(p.trend, Trend::Stable);
        assert_eq!(p.confidence, Confidence::High);
    }

    #[test]
    fn test_steep_rise_is_increasing() {
        // Slope of exactly 100/month
        let txs = monthly_series(&[100.0, 200.0, 300.0, 400.0]);
        let p = forecast(&txs).unwrap();
        assert_eq!(p.trend, Trend::Increasing);
        assert_eq!(p.predicted_amount, 500.0);
        assert_eq!(p.confidence, Confidence::Medium);
    }

    #[test]
    fn test_steep_fall_is_decreasing() {
        let txs = monthly_series(&[400.0, 300.0, 200.0, 100.0]);
        let p = forecast(&txs).unwrap();
        assert_eq!(p.trend, Trend::Decreasing);
    }

    #[test]
    fn test_gentle_slope_is_stable() {
        // Slope of 30/month stays inside the +/-50 band
        let txs = monthly_series(&[100.0, 130.0, 160.0, 190.0]);
        let p = forecast(&txs).unwrap();
        assert_eq!(p.trend, Trend::Stable);
    }

    #[test]
    fn test_prediction_is_clamped_at_zero() {
        // Falling fast enough that the raw extrapolation goes negative
        let txs = monthly_series(&[600.0, 400.0, 200.0]);
        let p = forecast(&txs).unwrap();
        assert_eq!(p.predicted_amount, 0.0);
        assert_eq!(p.trend, Trend::Decreasing);
    }

    #[test]
    fn test_calendar_gaps_do_not_widen_spacing() {
        // Jan, Feb, Jul: the Jul bucket sits at index 2, adjacent to Feb
        let txs = vec![
            expense(100.0, "2025-01-15"),
            expense(200.0, "2025-02-15"),
            expense(300.0, "2025-07-15"),
        ];
        let p = forecast(&txs).unwrap();
        // Identical to three consecutive months of 100/200/300
        let consecutive = forecast(&monthly_series(&[100.0, 200.0, 300.0])).unwrap();
        assert_eq!(p.predicted_amount, consecutive.predicted_amount);
        assert_eq!(p.trend, consecutive.trend);
    }

    #[test]
    fn test_raising_one_point_never_lowers_the_slope() {
        let base = monthly_series(&[100.0, 150.0, 120.0, 180.0, 140.0, 200.0]);
        let base_pred = forecast(&base).unwrap();

        // Bump the last month upward; the extrapolation must not drop
        let mut bumped = base.clone();
        bumped[5].amount += 500.0;
        let bumped_pred = forecast(&bumped).unwrap();

        assert!(bumped_pred.predicted_amount >= base_pred.predicted_amount);
    }

    #[test]
    fn test_confidence_tiers_by_bucket_count() {
        let low = forecast(&monthly_series(&[100.0, 300.0, 200.0])).unwrap();
        assert_eq!(low.confidence, Confidence::Low);

        let medium = forecast(&monthly_series(&[100.0, 300.0, 200.0, 250.0, 150.0])).unwrap();
        assert_eq!(medium.confidence, Confidence::Medium);

        let high =
            forecast(&monthly_series(&[100.0, 300.0, 200.0, 250.0, 150.0, 220.0])).unwrap();
        assert_eq!(high.confidence, Confidence::High);
    }

    #[test]
    fn test_fit_quality_model_rates_clean_trend_high() {
        let forecaster = Forecaster::with_confidence_model(ConfidenceModel::FitQuality);

        // Perfectly linear: R² = 1 even with only 3 buckets
        let clean = forecaster
            .forecast(&monthly_series(&[100.0, 200.0, 300.0]))
            .unwrap();
        assert_eq!(clean.confidence, Confidence::High);

        // Noisy series with near-zero net slope: R² close to 0
        let noisy = forecaster
            .forecast(&monthly_series(&[100.0, 300.0, 110.0, 290.0, 105.0, 295.0]))
            .unwrap();
        assert_eq!(noisy.confidence, Confidence::Low);
    }

    #[test]
    fn test_bad_date_propagates_as_error() {
        let txs = vec![
            expense(10.0, "2025-01-15"),
            expense(10.0, "2025-02-15"),
            expense(10.0, "whenever"),
        ];
        assert!(forecast(&txs).is_err());
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let txs = monthly_series(&[100.0, 100.0, 101.0]);
        let p = forecast(&txs).unwrap();
        // 301 / 3 = 100.333...
        assert_eq!(p.historical_average, 100.33);
    }
}
