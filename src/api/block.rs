use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::AppState;
use crate::api::{HandlerError, reject};
use crate::blockchain::models::UncleReward;

#[derive(Debug, Serialize)]
pub struct BlockRewardsOutput {
    pub block_number: u64,
    pub time_stamp: i64,
    pub block_miner: String,
    pub block_reward: f64,
    pub uncles: Vec<UncleReward>,
    pub uncle_inclusion_reward: f64,
}

/// Handler for GET /block/{number}/rewards.
pub async fn get_block_rewards_handler(
    Path(number): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<BlockRewardsOutput>, HandlerError> {
    let response = state
        .client
        .get_block_and_uncle_rewards_by_block_number(number)
        .await
        .map_err(|e| reject("Failed to fetch block rewards", e))?;

    Ok(Json(BlockRewardsOutput {
        block_number: response.block_number,
        time_stamp: response.time_stamp,
        block_miner: response.block_miner,
        block_reward: response.block_reward,
        uncles: response.uncles,
        uncle_inclusion_reward: response.uncle_inclusion_reward,
    }))
}
