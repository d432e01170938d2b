// src/blockchain/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::blockchain::error::{EtherscanError, Result};

/// Etherscan rejects `balancemulti` calls with more than 20 addresses.
pub const MAX_MULTI_BALANCE_ADDRESSES: usize = 20;

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("static address pattern"));

static TX_HASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{64}$").expect("static hash pattern"));

pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

pub fn is_valid_tx_hash(hash: &str) -> bool {
    TX_HASH_RE.is_match(hash)
}

/// Checks a single `0x`-prefixed, 20-byte hex address.
pub fn validate_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(EtherscanError::Address("address cannot be empty".to_string()));
    }
    if !is_valid_address(address) {
        return Err(EtherscanError::Address(format!(
            "'{}' is not a 0x-prefixed 40 character hex address",
            address
        )));
    }
    Ok(())
}

/// Checks the list handed to `balancemulti` and returns the comma-joined form.
pub fn validate_address_list<S: AsRef<str>>(addresses: &[S]) -> Result<String> {
    if addresses.is_empty() {
        return Err(EtherscanError::Address(
            "at least one address is required".to_string(),
        ));
    }
    if addresses.len() > MAX_MULTI_BALANCE_ADDRESSES {
        return Err(EtherscanError::Address(format!(
            "at most {} addresses are allowed per request, got {}",
            MAX_MULTI_BALANCE_ADDRESSES,
            addresses.len()
        )));
    }
    for address in addresses {
        validate_address(address.as_ref())?;
    }

    Ok(addresses
        .iter()
        .map(|a| a.as_ref())
        .collect::<Vec<&str>>()
        .join(","))
}

pub fn validate_tx_hash(hash: &str) -> Result<()> {
    if !is_valid_tx_hash(hash) {
        return Err(EtherscanError::Transaction(format!(
            "'{}' is not a 0x-prefixed 64 character hex hash",
            hash
        )));
    }
    Ok(())
}

/// Etherscan ignores `offset` unless a `page` is also supplied.
pub fn validate_paging(page: Option<u32>, offset: Option<u32>) -> Result<()> {
    if offset.is_some() && page.is_none() {
        return Err(EtherscanError::Transaction(
            "an offset requires a page number".to_string(),
        ));
    }
    Ok(())
}
