//! Insight handlers
//!
//! Thin wrappers over the analytics engine: fetch one user's records
//! through the store capability, run the pure computation, serialize the
//! result.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::{get_user_id, AppError, AppState};
use finsight_core::{
    advise, forecast, health_score, AnalyticsEngine, InsightReport, PredictionResult, ProfileStore,
};

use super::core_error;

/// Response body for the score endpoint
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u8,
}

/// GET /api/insights/prediction - next-month expense prediction
pub async fn get_prediction(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<PredictionResult>, AppError> {
    let user_id = get_user_id(&headers);

    let transactions = state
        .store
        .fetch_transactions(&user_id)
        .await
        .map_err(core_error)?;
    let prediction = forecast(&transactions).map_err(core_error)?;

    Ok(Json(prediction))
}

/// GET /api/insights/score - financial health score
pub async fn get_score(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ScoreResponse>, AppError> {
    let user_id = get_user_id(&headers);

    let transactions = state
        .store
        .fetch_transactions(&user_id)
        .await
        .map_err(core_error)?;
    let accounts = state
        .store
        .fetch_accounts(&user_id)
        .await
        .map_err(core_error)?;

    Ok(Json(ScoreResponse {
        score: health_score(&transactions, &accounts),
    }))
}

/// GET /api/insights/tips - prioritized spending advice
pub async fn get_tips(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, AppError> {
    let user_id = get_user_id(&headers);

    let transactions = state
        .store
        .fetch_transactions(&user_id)
        .await
        .map_err(core_error)?;
    let prediction = forecast(&transactions).map_err(core_error)?;

    Ok(Json(advise(&transactions, &prediction)))
}

/// GET /api/insights/report - last persisted combined report
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<InsightReport>, AppError> {
    let user_id = get_user_id(&headers);

    let report = state
        .store
        .load_report(&user_id)
        .await
        .map_err(core_error)?
        .ok_or_else(|| AppError::not_found("No report generated yet"))?;

    Ok(Json(report))
}

/// POST /api/insights/refresh - run the engine now and persist the result
pub async fn refresh_insights(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<InsightReport>, AppError> {
    let user_id = get_user_id(&headers);

    let transactions = state
        .store
        .fetch_transactions(&user_id)
        .await
        .map_err(core_error)?;
    let accounts = state
        .store
        .fetch_accounts(&user_id)
        .await
        .map_err(core_error)?;

    let report = AnalyticsEngine::new()
        .analyze(&transactions, &accounts)
        .map_err(core_error)?;

    state
        .store
        .save_report(&user_id, &report)
        .await
        .map_err(core_error)?;

    tracing::info!(user = %user_id, score = report.score, "Insight report refreshed");

    Ok(Json(report))
}
