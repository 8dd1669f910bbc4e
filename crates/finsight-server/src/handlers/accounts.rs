//! Account handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::{get_user_id, AccountUpdate, AppError, AppState, StoredAccount, SuccessResponse};
use finsight_core::{AccountKind, AccountRecord};

use super::core_error;

/// Request body for creating an account
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub kind: AccountKind,
    pub balance: f64,
}

/// GET /api/accounts - list the user's accounts
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<StoredAccount>>, AppError> {
    let user_id = get_user_id(&headers);
    let accounts = state.store.list_accounts(&user_id).map_err(core_error)?;
    Ok(Json(accounts))
}

/// POST /api/accounts - create an account
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateAccountRequest>,
) -> Result<Json<StoredAccount>, AppError> {
    let user_id = get_user_id(&headers);

    if body.name.trim().is_empty() {
        return Err(AppError::bad_request("Account name must not be empty"));
    }
    if !body.balance.is_finite() {
        return Err(AppError::bad_request("Balance must be a finite number"));
    }

    let account = state
        .store
        .insert_account(
            &user_id,
            AccountRecord {
                name: body.name,
                kind: body.kind,
                balance: body.balance,
            },
        )
        .map_err(core_error)?;

    Ok(Json(account))
}

/// GET /api/accounts/:id - fetch one account
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<StoredAccount>, AppError> {
    let user_id = get_user_id(&headers);

    let account = state
        .store
        .get_account(&user_id, id)
        .map_err(core_error)?
        .ok_or_else(|| AppError::not_found("Account not found"))?;

    Ok(Json(account))
}

/// PUT /api/accounts/:id - update an account
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<AccountUpdate>,
) -> Result<Json<StoredAccount>, AppError> {
    let user_id = get_user_id(&headers);

    if let Some(balance) = body.balance {
        if !balance.is_finite() {
            return Err(AppError::bad_request("Balance must be a finite number"));
        }
    }

    let account = state
        .store
        .update_account(&user_id, id, body)
        .map_err(core_error)?;

    Ok(Json(account))
}

/// DELETE /api/accounts/:id - delete an account
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, AppError> {
    let user_id = get_user_id(&headers);

    state
        .store
        .delete_account(&user_id, id)
        .map_err(core_error)?;

    Ok(Json(SuccessResponse { success: true }))
}
