// src/blockchain/services/token.rs

use tracing::info;

use crate::blockchain::client::EtherscanClient;
use crate::blockchain::error::Result;
use crate::blockchain::models::{TokenAccountBalanceResponse, TokenSupplyResponse};
use crate::blockchain::services::query;
use crate::blockchain::validation::validate_address;

pub async fn get_token_supply_by_address(
    client: &EtherscanClient,
    contract_address: &str,
) -> Result<TokenSupplyResponse> {
    validate_address(contract_address)?;
    info!("Fetching total supply of token: {}", contract_address);

    let mut params = query("stats", "tokensupply");
    params.push(("contractaddress", contract_address.to_string()));

    client.get(&params).await
}

pub async fn get_token_balance_by_address(
    client: &EtherscanClient,
    contract_address: &str,
    account_address: &str,
) -> Result<TokenAccountBalanceResponse> {
    validate_address(contract_address)?;
    validate_address(account_address)?;
    info!(
        "Fetching balance of token {} for account {}",
        contract_address, account_address
    );

    let mut params = query("account", "tokenbalance");
    params.push(("contractaddress", contract_address.to_string()));
    params.push(("address", account_address.to_string()));
    params.push(("tag", "latest".to_string()));

    client.get(&params).await
}
