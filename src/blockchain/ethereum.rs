// src/blockchain/ethereum.rs

//! Domain objects layered over the client: an account with its balance and
//! history, and the transactions in that history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Index;
use tracing::info;

use crate::blockchain::client::EtherscanClient;
use crate::blockchain::error::{EtherscanError, Result};
use crate::blockchain::models::{TxListParams, de};
use crate::blockchain::validation;

// --- Transaction ---

/// A normal or internal transaction record with its numeric fields decoded.
///
/// Internal transactions carry fewer fields than normal ones; anything the
/// record leaves out reads as zero or an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, deserialize_with = "de::number")]
    pub block_number: u64,
    #[serde(default, deserialize_with = "de::number")]
    pub time_stamp: i64,
    #[serde(default, deserialize_with = "de::string")]
    pub hash: String,
    #[serde(default, deserialize_with = "de::string")]
    pub nonce: String,
    #[serde(default, deserialize_with = "de::string")]
    pub block_hash: String,
    #[serde(default, deserialize_with = "de::number")]
    pub transaction_index: u64,
    #[serde(default, deserialize_with = "de::string")]
    pub from: String,
    #[serde(default, deserialize_with = "de::string")]
    pub to: String,
    /// Wei.
    #[serde(default, deserialize_with = "de::number")]
    pub value: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub gas: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub gas_price: f64,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_error: bool,
    #[serde(default, deserialize_with = "de::string")]
    pub input: String,
    #[serde(default, deserialize_with = "de::string")]
    pub contract_address: String,
    #[serde(default, deserialize_with = "de::number")]
    pub cumulative_gas_used: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub gas_used: f64,
    #[serde(default, deserialize_with = "de::string")]
    pub confirmations: String,
    /// `call`, `create`, ... on internal transactions.
    #[serde(rename = "type", default, deserialize_with = "de::string")]
    pub tx_type: String,
    #[serde(default, deserialize_with = "de::string")]
    pub err_code: String,
    #[serde(skip)]
    data: Value,
}

impl Transaction {
    /// Builds a transaction from one record of a `txlist`/`txlistinternal` result.
    pub fn from_value(data: Value) -> Result<Self> {
        if !data.is_object() {
            return Err(EtherscanError::Initialization(format!(
                "transaction data must be a JSON object, got {}",
                data
            )));
        }
        let mut transaction: Transaction = serde_json::from_value(data.clone())?;
        transaction.data = data;
        Ok(transaction)
    }

    /// The record exactly as the API returned it.
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn datetime_executed(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_stamp, 0)
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.is_empty() && !self.contract_address.is_empty()
    }
}

// --- TransactionContainer ---

/// An ordered, indexable collection of transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionContainer {
    transactions: Vec<Transaction>,
}

impl TransactionContainer {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Builds the container from raw records, failing on the first non-object.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        records
            .into_iter()
            .map(Transaction::from_value)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }
}

impl Index<usize> for TransactionContainer {
    type Output = Transaction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.transactions[index]
    }
}

impl IntoIterator for TransactionContainer {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransactionContainer {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

impl FromIterator<Transaction> for TransactionContainer {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// --- Address ---

/// An account on chain with its balance and normal transaction history.
#[derive(Debug, Clone)]
pub struct Address {
    client: EtherscanClient,
    address: String,
    balance: f64,
    transactions: TransactionContainer,
}

impl Address {
    /// Validates `address` and loads its balance and transactions.
    pub async fn fetch(client: &EtherscanClient, address: &str) -> Result<Self> {
        if !validation::is_valid_address(address) {
            return Err(EtherscanError::Initialization(format!(
                "'{}' is not a valid account address",
                address
            )));
        }

        let mut account = Self {
            client: client.clone(),
            address: address.to_string(),
            balance: 0.0,
            transactions: TransactionContainer::default(),
        };
        account.refresh().await?;
        Ok(account)
    }

    /// Re-queries balance and history.
    pub async fn refresh(&mut self) -> Result<()> {
        info!("Loading account state for address: {}", self.address);

        let balance = self.client.get_single_balance(&self.address).await?;
        let history = self
            .client
            .get_transactions_by_address(&self.address, TxListParams::default())
            .await?;

        self.balance = balance.balance;
        self.transactions = TransactionContainer::new(history.transactions);
        Ok(())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Balance in wei as of the last fetch.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn transactions(&self) -> &TransactionContainer {
        &self.transactions
    }
}
