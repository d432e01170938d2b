use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::AppState;
use crate::api::{HandlerError, reject};
use crate::blockchain::ethereum::Transaction;
use crate::blockchain::models::{EtherscanResponse, MinedBlock, MinedBlocksParams, TxListParams};

// --- Request and Response Models ---

#[derive(Debug, Serialize)]
pub struct BalanceOutput {
    pub address: String,
    /// Wei.
    pub balance: f64,
}

#[derive(Debug, Deserialize)]
pub struct MultiBalanceQuery {
    /// Comma-separated addresses.
    pub addresses: String,
}

#[derive(Debug, Serialize)]
pub struct MultiBalanceOutput {
    pub balances: HashMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct TransactionsOutput {
    pub address: String,
    pub message: String,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct MinedBlocksOutput {
    pub address: String,
    pub blocks: Vec<MinedBlock>,
}

// --- Handlers ---

/// Handler for GET /account/{address}/balance.
pub async fn get_balance_handler(
    Path(address): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BalanceOutput>, HandlerError> {
    let response = state
        .client
        .get_single_balance(&address)
        .await
        .map_err(|e| reject("Failed to fetch balance", e))?;

    Ok(Json(BalanceOutput {
        address,
        balance: response.balance,
    }))
}

/// Handler for GET /account/balances?addresses=0x..,0x..
pub async fn get_multi_balance_handler(
    Query(query): Query<MultiBalanceQuery>,
    State(state): State<AppState>,
) -> Result<Json<MultiBalanceOutput>, HandlerError> {
    let addresses: Vec<&str> = query
        .addresses
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect();

    let response = state
        .client
        .get_multi_balance(addresses.as_slice())
        .await
        .map_err(|e| reject("Failed to fetch balances", e))?;

    Ok(Json(MultiBalanceOutput {
        balances: response.balances,
    }))
}

/// Handler for GET /account/{address}/transactions.
pub async fn get_transactions_handler(
    Path(address): Path<String>,
    Query(params): Query<TxListParams>,
    State(state): State<AppState>,
) -> Result<Json<TransactionsOutput>, HandlerError> {
    info!("Received request for transactions of address '{}'", address);

    let response = state
        .client
        .get_transactions_by_address(&address, params)
        .await
        .map_err(|e| reject("Failed to fetch transactions", e))?;

    Ok(Json(TransactionsOutput {
        address,
        message: response.message().to_string(),
        transactions: response.transactions,
    }))
}

/// Handler for GET /account/{address}/blocks.
pub async fn get_mined_blocks_handler(
    Path(address): Path<String>,
    Query(params): Query<MinedBlocksParams>,
    State(state): State<AppState>,
) -> Result<Json<MinedBlocksOutput>, HandlerError> {
    let response = state
        .client
        .get_blocks_mined_by_address(&address, params)
        .await
        .map_err(|e| reject("Failed to fetch mined blocks", e))?;

    Ok(Json(MinedBlocksOutput {
        address,
        blocks: response.blocks,
    }))
}
