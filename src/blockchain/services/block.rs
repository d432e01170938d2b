// src/blockchain/services/block.rs

use tracing::info;

use crate::blockchain::client::EtherscanClient;
use crate::blockchain::error::Result;
use crate::blockchain::models::BlockRewardsResponse;
use crate::blockchain::services::query;

pub async fn get_block_rewards(
    client: &EtherscanClient,
    block_number: u64,
) -> Result<BlockRewardsResponse> {
    info!("Fetching block and uncle rewards for block: {}", block_number);

    let mut params = query("block", "getblockreward");
    params.push(("blockno", block_number.to_string()));

    client.get(&params).await
}
