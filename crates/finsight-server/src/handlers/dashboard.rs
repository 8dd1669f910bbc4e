//! Dashboard summary handler

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::{get_user_id, AppError, AppState, StoredTransaction};
use finsight_core::{
    forecast, health_score, MonthKey, PredictionResult, ProfileStore, TransactionKind,
    TransactionRecord,
};

use super::core_error;

/// Number of recent transactions embedded in the summary
const RECENT_LIMIT: usize = 5;

/// Rolled-up view for the dashboard landing page
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expense: f64,
    /// Current-month savings rate; 0 when there is no income this month
    pub savings_rate: f64,
    pub score: u8,
    pub prediction: PredictionResult,
    pub recent_transactions: Vec<StoredTransaction>,
}

/// GET /api/dashboard - combined summary for one user
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardSummary>, AppError> {
    let user_id = get_user_id(&headers);

    let stored = state
        .store
        .list_transactions(&user_id)
        .map_err(core_error)?;
    let records: Vec<TransactionRecord> = stored.iter().map(|t| t.record.clone()).collect();
    let accounts = state
        .store
        .fetch_accounts(&user_id)
        .await
        .map_err(core_error)?;

    let today = Utc::now().date_naive();
    let current = MonthKey {
        year: today.year(),
        month: today.month(),
    };

    let mut monthly_income = 0.0;
    let mut monthly_expense = 0.0;
    for record in &records {
        let key = MonthKey::parse(&record.occurred_on).map_err(core_error)?;
        if key != current {
            continue;
        }
        match record.kind {
            TransactionKind::Income => monthly_income += record.amount,
            TransactionKind::Expense => monthly_expense += record.amount,
            TransactionKind::Transfer => {}
        }
    }

    let savings_rate = if monthly_income > 0.0 {
        (monthly_income - monthly_expense) / monthly_income
    } else {
        0.0
    };

    let score = health_score(&records, &accounts);
    let prediction = forecast(&records).map_err(core_error)?;

    let total_balance: f64 = accounts.iter().map(|a| a.balance).sum();

    // Newest first
    let recent_transactions: Vec<StoredTransaction> =
        stored.iter().rev().take(RECENT_LIMIT).cloned().collect();

    Ok(Json(DashboardSummary {
        total_balance,
        monthly_income,
        monthly_expense,
        savings_rate,
        score,
        prediction,
        recent_transactions,
    }))
}
