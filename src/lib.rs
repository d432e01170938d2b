// src/lib.rs

use axum::{Router, routing::get};

pub mod api;
pub mod blockchain;
pub mod config;

pub use blockchain::client::EtherscanClient;
pub use blockchain::error::EtherscanError;
pub use blockchain::ethereum::{Address, Transaction, TransactionContainer};
pub use blockchain::models::EtherscanResponse;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: config::AppConfig,
    pub client: EtherscanClient,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Result<Self, EtherscanError> {
        let client = EtherscanClient::from_config(&config)?;
        Ok(Self { config, client })
    }
}

/// The gateway routes over one shared client.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health_handler))
        .route("/account/balances", get(api::account::get_multi_balance_handler))
        .route(
            "/account/{address}/balance",
            get(api::account::get_balance_handler),
        )
        .route(
            "/account/{address}/transactions",
            get(api::account::get_transactions_handler),
        )
        .route(
            "/account/{address}/blocks",
            get(api::account::get_mined_blocks_handler),
        )
        .route(
            "/transaction/{hash}/internal",
            get(api::transaction::get_internal_transaction_handler),
        )
        .route(
            "/transaction/{hash}/status",
            get(api::transaction::get_execution_status_handler),
        )
        .route("/contract/{address}/abi", get(api::contract::get_abi_handler))
        .route(
            "/token/{contract}/supply",
            get(api::token::get_token_supply_handler),
        )
        .route(
            "/token/{contract}/balance/{account}",
            get(api::token::get_token_balance_handler),
        )
        .route(
            "/block/{number}/rewards",
            get(api::block::get_block_rewards_handler),
        )
        .with_state(state)
}
