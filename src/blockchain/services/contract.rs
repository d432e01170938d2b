// src/blockchain/services/contract.rs

use tracing::info;

use crate::blockchain::client::EtherscanClient;
use crate::blockchain::error::Result;
use crate::blockchain::models::ContractAbiResponse;
use crate::blockchain::services::query;
use crate::blockchain::validation::validate_address;

pub async fn get_contract_abi(
    client: &EtherscanClient,
    address: &str,
) -> Result<ContractAbiResponse> {
    validate_address(address)?;
    info!("Fetching contract ABI for address: {}", address);

    let mut params = query("contract", "getabi");
    params.push(("address", address.to_string()));

    client.get(&params).await
}
