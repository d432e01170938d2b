use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::AppState;
use crate::api::{HandlerError, reject};
use crate::blockchain::models::AbiEntry;

#[derive(Debug, Serialize)]
pub struct AbiOutput {
    pub address: String,
    pub abi: Vec<AbiEntry>,
}

/// Handler for GET /contract/{address}/abi.
pub async fn get_abi_handler(
    Path(address): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AbiOutput>, HandlerError> {
    let response = state
        .client
        .get_contract_abi(&address)
        .await
        .map_err(|e| reject("Failed to fetch contract ABI", e))?;

    Ok(Json(AbiOutput {
        address,
        abi: response.abi,
    }))
}
