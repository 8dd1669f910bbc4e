//! Transaction handlers
//!
//! Record validation happens here, at the write boundary: amounts must be
//! non-negative finite numbers and dates must resolve to a calendar month,
//! so the analytics engine downstream only ever sees well-formed input.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::{
    get_user_id, AppError, AppState, StoredTransaction, SuccessResponse, TransactionUpdate,
};
use finsight_core::{MonthKey, TransactionKind, TransactionRecord};

use super::core_error;

/// Request body for creating a transaction
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub occurred_on: String,
}

fn validate_amount(amount: f64) -> Result<(), AppError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::bad_request(
            "Amount must be a non-negative number",
        ));
    }
    Ok(())
}

fn validate_date(occurred_on: &str) -> Result<(), AppError> {
    MonthKey::parse(occurred_on)
        .map(|_| ())
        .map_err(|_| AppError::bad_request("Date must be YYYY-MM-DD or YYYY-MM"))
}

/// GET /api/transactions - list the user's transactions
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<StoredTransaction>>, AppError> {
    let user_id = get_user_id(&headers);
    let transactions = state
        .store
        .list_transactions(&user_id)
        .map_err(core_error)?;
    Ok(Json(transactions))
}

/// POST /api/transactions - record a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateTransactionRequest>,
) -> Result<Json<StoredTransaction>, AppError> {
    let user_id = get_user_id(&headers);

    validate_amount(body.amount)?;
    validate_date(&body.occurred_on)?;

    let tx = state
        .store
        .insert_transaction(
            &user_id,
            TransactionRecord {
                kind: body.kind,
                amount: body.amount,
                category: body.category,
                occurred_on: body.occurred_on,
            },
        )
        .map_err(core_error)?;

    Ok(Json(tx))
}

/// GET /api/transactions/:id - fetch one transaction
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<StoredTransaction>, AppError> {
    let user_id = get_user_id(&headers);

    let tx = state
        .store
        .get_transaction(&user_id, id)
        .map_err(core_error)?
        .ok_or_else(|| AppError::not_found("Transaction not found"))?;

    Ok(Json(tx))
}

/// PUT /api/transactions/:id - update a transaction
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<TransactionUpdate>,
) -> Result<Json<StoredTransaction>, AppError> {
    let user_id = get_user_id(&headers);

    if let Some(amount) = body.amount {
        validate_amount(amount)?;
    }
    if let Some(ref occurred_on) = body.occurred_on {
        validate_date(occurred_on)?;
    }

    let tx = state
        .store
        .update_transaction(&user_id, id, body)
        .map_err(core_error)?;

    Ok(Json(tx))
}

/// DELETE /api/transactions/:id - delete a transaction
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, AppError> {
    let user_id = get_user_id(&headers);

    state
        .store
        .delete_transaction(&user_id, id)
        .map_err(core_error)?;

    Ok(Json(SuccessResponse { success: true }))
}
