use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::api::{HandlerError, reject};

#[derive(Debug, Deserialize)]
pub struct TokenBalancePath {
    pub contract: String,
    pub account: String,
}

#[derive(Debug, Serialize)]
pub struct TokenSupplyOutput {
    pub contract: String,
    pub total_supply: f64,
}

#[derive(Debug, Serialize)]
pub struct TokenBalanceOutput {
    pub contract: String,
    pub account: String,
    pub balance: f64,
}

/// Handler for GET /token/{contract}/supply.
pub async fn get_token_supply_handler(
    Path(contract): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TokenSupplyOutput>, HandlerError> {
    let response = state
        .client
        .get_token_supply_by_address(&contract)
        .await
        .map_err(|e| reject("Failed to fetch token supply", e))?;

    Ok(Json(TokenSupplyOutput {
        contract,
        total_supply: response.total_supply,
    }))
}

/// Handler for GET /token/{contract}/balance/{account}.
pub async fn get_token_balance_handler(
    Path(path): Path<TokenBalancePath>,
    State(state): State<AppState>,
) -> Result<Json<TokenBalanceOutput>, HandlerError> {
    let response = state
        .client
        .get_token_balance_by_address(&path.contract, &path.account)
        .await
        .map_err(|e| reject("Failed to fetch token balance", e))?;

    Ok(Json(TokenBalanceOutput {
        contract: path.contract,
        account: path.account,
        balance: response.balance,
    }))
}
