//! Spending advice generation
//!
//! Produces at most four prioritized, human-readable tips: category
//! concentration first, then savings rate, then forecast trend, then
//! generic filler until three tips exist.

use std::collections::BTreeMap;

use crate::models::{TransactionKind, TransactionRecord};

use super::types::{PredictionResult, Trend};

/// Share of total expense above which the top category earns its own tip
const CONCENTRATION_THRESHOLD: f64 = 0.30;

/// Savings-rate percentage below which the "save more" tip fires
const LOW_SAVINGS_PCT: f64 = 20.0;

/// Savings-rate percentage above which the congratulatory tip fires
const HIGH_SAVINGS_PCT: f64 = 40.0;

/// Tip shown to users with no transaction history yet
const ONBOARDING_TIP: &str =
    "Start tracking your income and expenses to receive personalized financial advice.";

/// Generic advice appended in order until three tips exist
const FILLER_TIPS: [&str; 3] = [
    "Build an emergency fund covering three to six months of expenses.",
    "Review your recurring subscriptions and cancel the ones you no longer use.",
    "Set a savings goal for the next six months and track your progress toward it.",
];

const MIN_TIPS: usize = 3;
const MAX_TIPS: usize = 4;

/// Generate prioritized spending tips for one user.
///
/// An empty transaction list short-circuits to a single onboarding tip.
pub fn advise(transactions: &[TransactionRecord], prediction: &PredictionResult) -> Vec<String> {
    if transactions.is_empty() {
        return vec![ONBOARDING_TIP.to_string()];
    }

    let mut tips = Vec::new();

    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expense: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();

    // Category concentration
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for tx in transactions {
        if tx.kind == TransactionKind::Expense {
            *by_category.entry(tx.category.as_str()).or_insert(0.0) += tx.amount;
        }
    }
    if expense > 0.0 {
        if let Some((category, total)) = by_category
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        {
            let share = total / expense;
            if share > CONCENTRATION_THRESHOLD {
                tips.push(format!(
                    "{}% of your spending goes to {}. Consider setting a budget for that category.",
                    (share * 100.0).round() as i64,
                    category
                ));
            }
        }
    }

    // Savings rate
    if income > 0.0 {
        let rate_pct = (income - expense) / income * 100.0;
        if rate_pct < LOW_SAVINGS_PCT {
            tips.push(format!(
                "You're saving {}% of your income. Aim for at least 20% each month.",
                rate_pct.round() as i64
            ));
        } else if rate_pct > HIGH_SAVINGS_PCT {
            tips.push(format!(
                "Great work saving {}% of your income. Consider investing part of it.",
                rate_pct.round() as i64
            ));
        }
    }

    // Forecast trend
    match prediction.trend {
        Trend::Increasing => tips.push(
            "Your monthly spending is trending upward. Review recent purchases to catch the drivers early."
                .to_string(),
        ),
        Trend::Decreasing => tips.push(
            "Your monthly spending is trending downward. Keep it up.".to_string(),
        ),
        Trend::Stable | Trend::InsufficientData => {}
    }

    for filler in FILLER_TIPS {
        if tips.len() >= MIN_TIPS {
            break;
        }
        tips.push(filler.to_string());
    }

    tips.truncate(MAX_TIPS);
    tips
}
