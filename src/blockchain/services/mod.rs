// src/blockchain/services/mod.rs

pub mod account;
pub mod block;
pub mod contract;
pub mod token;
pub mod transaction;

/// Query-string pairs of one Etherscan call, without the API key.
pub type Query = Vec<(&'static str, String)>;

/// Starts a query for `module` / `action`.
pub(crate) fn query(module: &str, action: &str) -> Query {
    vec![
        ("module", module.to_string()),
        ("action", action.to_string()),
    ]
}
