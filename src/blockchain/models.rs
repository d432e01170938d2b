// src/blockchain/models.rs
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::blockchain::error::{EtherscanError, Result};
use crate::blockchain::ethereum::Transaction;

// --- Envelope ---

/// The `{status, message, result}` object every Etherscan endpoint returns,
/// together with the HTTP status it arrived with.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub status_code: u16,
    pub status: String,
    pub message: String,
    pub raw: Value,
}

impl Envelope {
    pub const STATUS_OK: &'static str = "1";

    /// Checks the envelope shape and the API-level status flag.
    ///
    /// A `"0"` status carrying an empty result list is how the API reports
    /// "No transactions found"; it is accepted as a successful empty answer.
    pub fn from_value(status_code: u16, raw: Value) -> Result<Self> {
        let object = raw
            .as_object()
            .ok_or_else(|| EtherscanError::Envelope("response is not a JSON object".to_string()))?;

        let status = object
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| EtherscanError::Envelope("missing 'status' field".to_string()))?
            .to_string();
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| EtherscanError::Envelope("missing 'message' field".to_string()))?
            .to_string();
        let result = object
            .get("result")
            .ok_or_else(|| EtherscanError::Envelope("missing 'result' field".to_string()))?;

        if status != Self::STATUS_OK {
            let no_records = result.as_array().is_some_and(Vec::is_empty);
            if !no_records {
                let result = match result {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                return Err(EtherscanError::Api { message, result });
            }
        }

        Ok(Self {
            status_code,
            status,
            message,
            raw,
        })
    }

    pub fn result(&self) -> &Value {
        &self.raw["result"]
    }

    fn result_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.result().clone())?)
    }

    fn result_amount(&self, field: &str) -> Result<f64> {
        let text = self.result().as_str().ok_or_else(|| {
            EtherscanError::Envelope(format!("expected {} as a numeric string", field))
        })?;
        parse_amount(text, field)
    }

    fn result_records(&self) -> Result<&Vec<Value>> {
        self.result()
            .as_array()
            .ok_or_else(|| EtherscanError::Envelope("expected 'result' to be a list".to_string()))
    }
}

fn parse_amount(text: &str, field: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        EtherscanError::Envelope(format!("{} '{}' is not a number", field, text))
    })
}

/// Shared surface of every typed response.
pub trait EtherscanResponse: Sized {
    fn from_envelope(envelope: Envelope) -> Result<Self>;

    fn envelope(&self) -> &Envelope;

    fn response_status_code(&self) -> u16 {
        self.envelope().status_code
    }

    fn status(&self) -> &str {
        &self.envelope().status
    }

    fn message(&self) -> &str {
        &self.envelope().message
    }

    /// The untouched JSON body.
    fn etherscan_response(&self) -> &Value {
        &self.envelope().raw
    }
}

macro_rules! envelope_accessor {
    () => {
        fn envelope(&self) -> &Envelope {
            &self.envelope
        }
    };
}

// --- Request Models ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

impl Sort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        }
    }
}

/// Optional arguments of the `txlist` action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TxListParams {
    #[serde(rename = "startblock")]
    pub start_block: u64,
    #[serde(rename = "endblock")]
    pub end_block: u64,
    pub page: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Sort,
}

impl TxListParams {
    pub const LATEST_BLOCK: u64 = 99_999_999;
}

impl Default for TxListParams {
    fn default() -> Self {
        Self {
            start_block: 0,
            end_block: Self::LATEST_BLOCK,
            page: None,
            offset: None,
            sort: Sort::Asc,
        }
    }
}

/// Whether `getminedblocks` lists canonical blocks or uncles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Blocks,
    Uncles,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Blocks => "blocks",
            BlockType::Uncles => "uncles",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MinedBlocksParams {
    #[serde(rename = "blocktype")]
    pub block_type: BlockType,
    pub page: Option<u32>,
    pub offset: Option<u32>,
}

// --- Account Models ---

#[derive(Debug, Clone, Serialize)]
pub struct SingleAddressBalanceResponse {
    pub envelope: Envelope,
    pub balance: f64,
}

impl EtherscanResponse for SingleAddressBalanceResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let balance = envelope.result_amount("balance")?;
        Ok(Self { envelope, balance })
    }

    envelope_accessor!();
}

#[derive(Debug, Deserialize)]
struct AccountBalance {
    account: String,
    balance: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultiAddressBalanceResponse {
    pub envelope: Envelope,
    /// Account address -> balance in wei.
    pub balances: HashMap<String, f64>,
}

impl EtherscanResponse for MultiAddressBalanceResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let entries: Vec<AccountBalance> = envelope.result_as()?;
        let balances = entries
            .into_iter()
            .map(|entry| {
                let balance = parse_amount(&entry.balance, "balance")?;
                Ok((entry.account, balance))
            })
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { envelope, balances })
    }

    envelope_accessor!();
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsByAddressResponse {
    pub envelope: Envelope,
    pub transactions: Vec<Transaction>,
}

impl EtherscanResponse for TransactionsByAddressResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let transactions = envelope
            .result_records()?
            .iter()
            .cloned()
            .map(Transaction::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            envelope,
            transactions,
        })
    }

    envelope_accessor!();
}

/// Internal transactions spawned by a single transaction hash.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsByHashResponse {
    pub envelope: Envelope,
    pub transaction: Option<Transaction>,
}

impl EtherscanResponse for TransactionsByHashResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let transaction = envelope
            .result_records()?
            .first()
            .cloned()
            .map(Transaction::from_value)
            .transpose()?;
        Ok(Self {
            envelope,
            transaction,
        })
    }

    envelope_accessor!();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinedBlock {
    #[serde(deserialize_with = "de::number")]
    pub block_number: u64,
    #[serde(deserialize_with = "de::number")]
    pub time_stamp: i64,
    #[serde(deserialize_with = "de::number")]
    pub block_reward: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlocksMinedByAddressResponse {
    pub envelope: Envelope,
    pub blocks: Vec<MinedBlock>,
}

impl EtherscanResponse for BlocksMinedByAddressResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let blocks = envelope.result_as()?;
        Ok(Self { envelope, blocks })
    }

    envelope_accessor!();
}

// --- Contract Models ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<AbiParam>,
}

/// One function, event, constructor or fallback entry of a contract ABI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    #[serde(rename = "type", default = "AbiEntry::default_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
}

impl AbiEntry {
    fn default_kind() -> String {
        "function".to_string()
    }
}

/// The ABI arrives as a JSON document encoded inside the `result` string.
#[derive(Debug, Clone, Serialize)]
pub struct ContractAbiResponse {
    pub envelope: Envelope,
    pub abi: Vec<AbiEntry>,
}

impl ContractAbiResponse {
    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.abi.iter().filter(|entry| entry.kind == "function")
    }
}

impl EtherscanResponse for ContractAbiResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let encoded = envelope.result().as_str().ok_or_else(|| {
            EtherscanError::Envelope("expected the ABI as a JSON string".to_string())
        })?;
        let abi = serde_json::from_str(encoded)?;
        Ok(Self { envelope, abi })
    }

    envelope_accessor!();
}

// --- Transaction Models ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecutionStatus {
    #[serde(default, deserialize_with = "de::flag")]
    is_error: bool,
    #[serde(default, deserialize_with = "de::string")]
    err_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractStatusResponse {
    pub envelope: Envelope,
    pub is_error: bool,
    pub err_description: String,
}

impl EtherscanResponse for ContractStatusResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let status: ExecutionStatus = envelope.result_as()?;
        Ok(Self {
            envelope,
            is_error: status.is_error,
            err_description: status.err_description,
        })
    }

    envelope_accessor!();
}

// --- Token Models ---

#[derive(Debug, Clone, Serialize)]
pub struct TokenSupplyResponse {
    pub envelope: Envelope,
    pub total_supply: f64,
}

impl EtherscanResponse for TokenSupplyResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let total_supply = envelope.result_amount("total supply")?;
        Ok(Self {
            envelope,
            total_supply,
        })
    }

    envelope_accessor!();
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenAccountBalanceResponse {
    pub envelope: Envelope,
    pub balance: f64,
}

impl EtherscanResponse for TokenAccountBalanceResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let balance = envelope.result_amount("token balance")?;
        Ok(Self { envelope, balance })
    }

    envelope_accessor!();
}

// --- Block Models ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncleReward {
    #[serde(deserialize_with = "de::string")]
    pub miner: String,
    #[serde(deserialize_with = "de::number")]
    pub uncle_position: u32,
    #[serde(rename = "blockreward", deserialize_with = "de::number")]
    pub block_reward: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockRewards {
    #[serde(deserialize_with = "de::number")]
    block_number: u64,
    #[serde(deserialize_with = "de::number")]
    time_stamp: i64,
    #[serde(deserialize_with = "de::string")]
    block_miner: String,
    #[serde(deserialize_with = "de::number")]
    block_reward: f64,
    #[serde(default)]
    uncles: Vec<UncleReward>,
    #[serde(default, deserialize_with = "de::number")]
    uncle_inclusion_reward: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockRewardsResponse {
    pub envelope: Envelope,
    pub block_number: u64,
    pub time_stamp: i64,
    pub block_miner: String,
    pub block_reward: f64,
    pub uncles: Vec<UncleReward>,
    pub uncle_inclusion_reward: f64,
}

impl EtherscanResponse for BlockRewardsResponse {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let rewards: BlockRewards = envelope.result_as()?;
        Ok(Self {
            envelope,
            block_number: rewards.block_number,
            time_stamp: rewards.time_stamp,
            block_miner: rewards.block_miner,
            block_reward: rewards.block_reward,
            uncles: rewards.uncles,
            uncle_inclusion_reward: rewards.uncle_inclusion_reward,
        })
    }

    envelope_accessor!();
}

/// Deserializers for the API's habit of sending every number as a string.
pub(crate) mod de {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::fmt::Display;
    use std::str::FromStr;

    /// Numeric string or JSON number. Empty strings and nulls become the default.
    pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Default,
        T::Err: Display,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(T::default()),
            Value::String(s) if s.trim().is_empty() => Ok(T::default()),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", s, e))),
            Value::Number(n) => n
                .to_string()
                .parse()
                .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", n, e))),
            other => Err(D::Error::custom(format!("expected a number, got {}", other))),
        }
    }

    /// The `"0"` / `"1"` flags used for `isError`.
    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            Value::String(s) => match s.as_str() {
                "" | "0" => Ok(false),
                "1" => Ok(true),
                other => Err(D::Error::custom(format!("invalid flag '{}'", other))),
            },
            Value::Number(n) => Ok(n.as_u64().is_some_and(|v| v != 0)),
            other => Err(D::Error::custom(format!("expected a flag, got {}", other))),
        }
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}
