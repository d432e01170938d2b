// src/api/mod.rs

pub mod account;
pub mod block;
pub mod contract;
pub mod health;
pub mod token;
pub mod transaction;

use axum::http::StatusCode;
use tracing::error;

use crate::blockchain::error::EtherscanError;

pub type HandlerError = (StatusCode, String);

/// Maps a client failure onto the gateway's HTTP status.
///
/// Bad caller input is a 400; anything that went wrong talking to Etherscan
/// is a 502.
pub fn reject(context: &str, e: EtherscanError) -> HandlerError {
    if e.is_validation() {
        return (StatusCode::BAD_REQUEST, format!("{}: {}", context, e));
    }
    error!("{}: {:?}", context, e);
    (StatusCode::BAD_GATEWAY, format!("{}: {}", context, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let (status, body) = reject(
            "Failed to fetch balance",
            EtherscanError::Address("bad".to_string()),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Failed to fetch balance"));
    }

    #[test]
    fn upstream_errors_are_bad_gateway() {
        let (status, _) = reject(
            "Failed to fetch balance",
            EtherscanError::Status { status: 503 },
        );
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
