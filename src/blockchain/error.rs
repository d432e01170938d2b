// src/blockchain/error.rs

use thiserror::Error;

/// Every way a call through [`EtherscanClient`](crate::blockchain::client::EtherscanClient)
/// can fail.
///
/// `Initialization`, `Address` and `Transaction` are raised while validating
/// inputs, before any request leaves the process. The remaining kinds come
/// from the transport or from the API envelope.
#[derive(Error, Debug)]
pub enum EtherscanError {
    #[error("client initialization failed: {0}")]
    Initialization(String),
    #[error("invalid address input: {0}")]
    Address(String),
    #[error("invalid transaction input: {0}")]
    Transaction(String),
    #[error("request to etherscan failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("etherscan returned HTTP status {status}")]
    Status { status: u16 },
    #[error("failed to decode etherscan response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed etherscan envelope: {0}")]
    Envelope(String),
    #[error("etherscan rejected the request: {message} ({result})")]
    Api { message: String, result: String },
}

impl EtherscanError {
    /// True for the kinds raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Initialization(_) | Self::Address(_) | Self::Transaction(_)
        )
    }
}

pub type Result<T, E = EtherscanError> = std::result::Result<T, E>;
