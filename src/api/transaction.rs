use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::AppState;
use crate::api::{HandlerError, reject};
use crate::blockchain::ethereum::Transaction;

#[derive(Debug, Serialize)]
pub struct InternalTransactionOutput {
    pub hash: String,
    pub transaction: Option<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct ExecutionStatusOutput {
    pub hash: String,
    pub is_error: bool,
    pub err_description: String,
}

/// Handler for GET /transaction/{hash}/internal.
pub async fn get_internal_transaction_handler(
    Path(hash): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InternalTransactionOutput>, HandlerError> {
    let response = state
        .client
        .get_transaction_by_hash(&hash)
        .await
        .map_err(|e| reject("Failed to fetch internal transactions", e))?;

    Ok(Json(InternalTransactionOutput {
        hash,
        transaction: response.transaction,
    }))
}

/// Handler for GET /transaction/{hash}/status.
pub async fn get_execution_status_handler(
    Path(hash): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ExecutionStatusOutput>, HandlerError> {
    let response = state
        .client
        .get_contract_execution_status(&hash)
        .await
        .map_err(|e| reject("Failed to fetch execution status", e))?;

    Ok(Json(ExecutionStatusOutput {
        hash,
        is_error: response.is_error,
        err_description: response.err_description,
    }))
}
