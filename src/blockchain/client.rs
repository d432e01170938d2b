// src/blockchain/client.rs

use crate::blockchain::error::{EtherscanError, Result};
use crate::blockchain::models::{
    BlockRewardsResponse, BlocksMinedByAddressResponse, ContractAbiResponse,
    ContractStatusResponse, Envelope, EtherscanResponse, MinedBlocksParams,
    MultiAddressBalanceResponse, SingleAddressBalanceResponse, TokenAccountBalanceResponse,
    TokenSupplyResponse, TransactionsByAddressResponse, TransactionsByHashResponse, TxListParams,
};
use crate::blockchain::services::account as account_service;
use crate::blockchain::services::block as block_service;
use crate::blockchain::services::contract as contract_service;
use crate::blockchain::services::token as token_service;
use crate::blockchain::services::transaction as transaction_service;
use crate::blockchain::services::Query;
use crate::config::AppConfig;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::Value;
use std::fmt::Formatter;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/api";
/// Etherscan's placeholder key; accepted at the lowest rate limit.
pub const DEFAULT_API_KEY: &str = "YourApiKeyToken";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// --- ClientBuilder ---

#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<EtherscanClient> {
        if self.api_key.is_empty() || !self.api_key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(EtherscanError::Initialization(
                "API key must be a non-empty alphanumeric string".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(EtherscanError::Initialization(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let base_url = Url::parse(&self.base_url).map_err(|e| {
            EtherscanError::Initialization(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(EtherscanError::Initialization(format!(
                "base URL must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        let http = ReqwestClient::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                EtherscanError::Initialization(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(EtherscanClient {
            http,
            base_url,
            api_key: self.api_key,
        })
    }
}

// --- EtherscanClient Implementation ---

#[derive(Clone)]
pub struct EtherscanClient {
    http: ReqwestClient,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtherscanClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl EtherscanClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client against the mainnet API with default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::builder()
            .api_key(config.etherscan_api_key.clone())
            .base_url(config.etherscan_api_url.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Issues the GET for `query` and wraps the envelope into `T`.
    ///
    /// The API key is appended here so it never shows up in logged queries.
    pub(crate) async fn get<T: EtherscanResponse>(&self, query: &Query) -> Result<T> {
        debug!("Sending etherscan request to {}: {:?}", self.base_url, query);

        let res = self
            .http
            .get(self.base_url.clone())
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!("Etherscan answered with HTTP {}", status);
            return Err(EtherscanError::Status {
                status: status.as_u16(),
            });
        }

        let body = res.text().await?;
        let raw: Value = serde_json::from_str(&body)?;
        debug!("Received etherscan response: {}", raw);

        let envelope = Envelope::from_value(status.as_u16(), raw).inspect_err(|e| {
            warn!("Etherscan envelope rejected: {}", e);
        })?;
        T::from_envelope(envelope)
    }

    // --- Account ---

    pub async fn get_single_balance(&self, address: &str) -> Result<SingleAddressBalanceResponse> {
        account_service::get_single_balance(self, address).await
    }

    /// Balances of up to 20 addresses in one call.
    pub async fn get_multi_balance<S: AsRef<str>>(
        &self,
        addresses: &[S],
    ) -> Result<MultiAddressBalanceResponse> {
        account_service::get_multi_balance(self, addresses).await
    }

    /// Normal transactions sent from or to `address`.
    pub async fn get_transactions_by_address(
        &self,
        address: &str,
        params: TxListParams,
    ) -> Result<TransactionsByAddressResponse> {
        account_service::get_transactions_by_address(self, address, params).await
    }

    /// Internal transactions produced by the transaction `hash`.
    pub async fn get_transaction_by_hash(&self, hash: &str) -> Result<TransactionsByHashResponse> {
        account_service::get_transaction_by_hash(self, hash).await
    }

    pub async fn get_blocks_mined_by_address(
        &self,
        address: &str,
        params: MinedBlocksParams,
    ) -> Result<BlocksMinedByAddressResponse> {
        account_service::get_blocks_mined_by_address(self, address, params).await
    }

    // --- Contract ---

    /// ABI of a verified contract.
    pub async fn get_contract_abi(&self, address: &str) -> Result<ContractAbiResponse> {
        contract_service::get_contract_abi(self, address).await
    }

    // --- Transaction ---

    pub async fn get_contract_execution_status(
        &self,
        hash: &str,
    ) -> Result<ContractStatusResponse> {
        transaction_service::get_contract_execution_status(self, hash).await
    }

    // --- Token ---

    pub async fn get_token_supply_by_address(
        &self,
        contract_address: &str,
    ) -> Result<TokenSupplyResponse> {
        token_service::get_token_supply_by_address(self, contract_address).await
    }

    pub async fn get_token_balance_by_address(
        &self,
        contract_address: &str,
        account_address: &str,
    ) -> Result<TokenAccountBalanceResponse> {
        token_service::get_token_balance_by_address(self, contract_address, account_address).await
    }

    // --- Block ---

    pub async fn get_block_and_uncle_rewards_by_block_number(
        &self,
        block_number: u64,
    ) -> Result<BlockRewardsResponse> {
        block_service::get_block_rewards(self, block_number).await
    }
}
