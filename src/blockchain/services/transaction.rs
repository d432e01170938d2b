// src/blockchain/services/transaction.rs

use tracing::info;

use crate::blockchain::client::EtherscanClient;
use crate::blockchain::error::Result;
use crate::blockchain::models::ContractStatusResponse;
use crate::blockchain::services::query;
use crate::blockchain::validation::validate_tx_hash;

/// Whether a contract call reverted, and why.
pub async fn get_contract_execution_status(
    client: &EtherscanClient,
    hash: &str,
) -> Result<ContractStatusResponse> {
    validate_tx_hash(hash)?;
    info!("Fetching contract execution status for hash: {}", hash);

    let mut params = query("transaction", "getstatus");
    params.push(("txhash", hash.to_string()));

    client.get(&params).await
}
