// src/blockchain/services/account.rs

use tracing::info;

use crate::blockchain::client::EtherscanClient;
use crate::blockchain::error::Result;
use crate::blockchain::models::{
    BlocksMinedByAddressResponse, MinedBlocksParams, MultiAddressBalanceResponse,
    SingleAddressBalanceResponse, TransactionsByAddressResponse, TransactionsByHashResponse,
    TxListParams,
};
use crate::blockchain::services::{Query, query};
use crate::blockchain::validation::{
    validate_address, validate_address_list, validate_paging, validate_tx_hash,
};

fn push_paging(params: &mut Query, page: Option<u32>, offset: Option<u32>) {
    if let Some(page) = page {
        params.push(("page", page.to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset", offset.to_string()));
    }
}

pub async fn get_single_balance(
    client: &EtherscanClient,
    address: &str,
) -> Result<SingleAddressBalanceResponse> {
    validate_address(address)?;
    info!("Fetching ether balance for address: {}", address);

    let mut params = query("account", "balance");
    params.push(("address", address.to_string()));
    params.push(("tag", "latest".to_string()));

    client.get(&params).await
}

pub async fn get_multi_balance<S: AsRef<str>>(
    client: &EtherscanClient,
    addresses: &[S],
) -> Result<MultiAddressBalanceResponse> {
    let joined = validate_address_list(addresses)?;
    info!("Fetching ether balances for {} addresses", addresses.len());

    let mut params = query("account", "balancemulti");
    params.push(("address", joined));
    params.push(("tag", "latest".to_string()));

    client.get(&params).await
}

pub async fn get_transactions_by_address(
    client: &EtherscanClient,
    address: &str,
    tx_params: TxListParams,
) -> Result<TransactionsByAddressResponse> {
    validate_address(address)?;
    validate_paging(tx_params.page, tx_params.offset)?;
    info!(
        "Fetching transactions for address: {} (blocks {}..={})",
        address, tx_params.start_block, tx_params.end_block
    );

    let mut params = query("account", "txlist");
    params.push(("address", address.to_string()));
    params.push(("startblock", tx_params.start_block.to_string()));
    params.push(("endblock", tx_params.end_block.to_string()));
    push_paging(&mut params, tx_params.page, tx_params.offset);
    params.push(("sort", tx_params.sort.as_str().to_string()));

    client.get(&params).await
}

pub async fn get_transaction_by_hash(
    client: &EtherscanClient,
    hash: &str,
) -> Result<TransactionsByHashResponse> {
    validate_tx_hash(hash)?;
    info!("Fetching internal transactions for hash: {}", hash);

    let mut params = query("account", "txlistinternal");
    params.push(("txhash", hash.to_string()));

    client.get(&params).await
}

pub async fn get_blocks_mined_by_address(
    client: &EtherscanClient,
    address: &str,
    block_params: MinedBlocksParams,
) -> Result<BlocksMinedByAddressResponse> {
    validate_address(address)?;
    validate_paging(block_params.page, block_params.offset)?;
    info!(
        "Fetching {} mined by address: {}",
        block_params.block_type.as_str(),
        address
    );

    let mut params = query("account", "getminedblocks");
    params.push(("address", address.to_string()));
    params.push(("blocktype", block_params.block_type.as_str().to_string()));
    push_paging(&mut params, block_params.page, block_params.offset);

    client.get(&params).await
}
