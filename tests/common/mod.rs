//! In-process stand-in for the Etherscan API.
//!
//! Serves the documented payloads for each `module`/`action` pair on an
//! ephemeral port and counts the requests it receives.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use etherscan_rs::EtherscanClient;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const BALANCE_ADDRESS: &str = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";
pub const EMPTY_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
pub const MINER_ADDRESS: &str = "0x9dd134d14d1e65f84b706d6f205cd5b1cd03a46b";
pub const DAO_ADDRESS: &str = "0xBB9bc244D798123fDe783fCc1C72d3Bb8C189413";
pub const TOKEN_CONTRACT: &str = "0x57d90b64a1a57749b0f932f1a3395792e12e7055";
pub const TOKEN_HOLDER: &str = "0xe04f27eb70e025b78871a2ad7eabe85e61212761";
pub const INTERNAL_TX_HASH: &str =
    "0x40eb908387324f2b575b4879cd9d7188f69c8fc9d87c901b9e2daaea4b442170";
pub const FAILED_TX_HASH: &str =
    "0x15f8e5ea1079d9a0bb04a4c58ae5fe7654b5b2b4463375ff7ffb490aa0032f3a";
pub const MULTI_ADDRESSES: [&str; 3] = [
    "0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a",
    "0x63a9975ba31b0b9626b34300f7f627147df1f526",
    "0x198ef1ec325a96cc354c7266a038be8b5c558f67",
];
pub const BAD_API_KEY: &str = "RevokedKey";

#[derive(Clone, Default)]
struct MockState {
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<HashMap<String, String>>>,
}

pub struct MockEtherscan {
    addr: std::net::SocketAddr,
    state: MockState,
}

impl MockEtherscan {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/api", get(api_handler))
            .route("/broken", get(broken_handler))
            .route("/garbage", get(garbage_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock etherscan");
        let addr = listener.local_addr().expect("mock address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock etherscan died");
        });

        Self { addr, state }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> EtherscanClient {
        self.client_with_key("TestKey123")
    }

    pub fn client_with_key(&self, key: &str) -> EtherscanClient {
        EtherscanClient::builder()
            .api_key(key)
            .base_url(self.url("/api"))
            .build()
            .expect("mock client")
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.state.last_query.lock().unwrap().clone()
    }
}

async fn broken_handler(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
}

async fn garbage_handler(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::OK, "<html>rate limited</html>").into_response()
}

async fn api_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = params.clone();

    if params.get("apikey").map(String::as_str) == Some(BAD_API_KEY) {
        return Json(json!({"status": "0", "message": "NOTOK", "result": "Invalid API Key"}))
            .into_response();
    }

    let module = params.get("module").map(String::as_str).unwrap_or_default();
    let action = params.get("action").map(String::as_str).unwrap_or_default();
    let address = params.get("address").map(String::as_str).unwrap_or_default();

    let body = match (module, action) {
        ("account", "balance") => ok(json!("745997604382925139479303")),
        ("account", "balancemulti") => ok(multi_balance_result()),
        ("account", "txlist") if address == EMPTY_ADDRESS => {
            json!({"status": "0", "message": "No transactions found", "result": []})
        }
        ("account", "txlist") => ok(json!([normal_transaction(), normal_transaction()])),
        ("account", "txlistinternal") => ok(json!([internal_transaction()])),
        ("account", "getminedblocks") => ok(json!([{
            "blockNumber": "3462296",
            "timeStamp": "1491118514",
            "blockReward": "5194770940000000000"
        }])),
        ("account", "tokenbalance") => ok(json!("135499")),
        ("contract", "getabi") => ok(json!(dao_abi().to_string())),
        ("transaction", "getstatus") => ok(json!({
            "isError": "1",
            "errDescription": "Bad jump destination"
        })),
        ("stats", "tokensupply") => ok(json!("21265524714464")),
        ("block", "getblockreward") => ok(block_rewards_result()),
        _ => json!({"status": "0", "message": "NOTOK", "result": "Error! Missing Or invalid Module name"}),
    };

    Json(body).into_response()
}

fn ok(result: Value) -> Value {
    json!({"status": "1", "message": "OK", "result": result})
}

pub fn multi_balance_result() -> Value {
    json!([
        {"account": "0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a", "balance": "40807168564070000000000"},
        {"account": "0x63a9975ba31b0b9626b34300f7f627147df1f526", "balance": "332567136222827062478"},
        {"account": "0x198ef1ec325a96cc354c7266a038be8b5c558f67", "balance": "12005264493462223951724"}
    ])
}

pub fn normal_transaction() -> Value {
    json!({
        "blockNumber": "80240",
        "timeStamp": "1439482422",
        "hash": "0x72f2508c262763d5ae0e51d71c0d50c881cc75c872152716b04256fe07797dcd",
        "nonce": "2",
        "blockHash": "0xb9367a1bc9094d6275ab50f4a58ce13186e35a46de68f5053487a578abf00361",
        "transactionIndex": "0",
        "from": "0xc5a96db085dda36ffbe390f455315d30d6d3dc52",
        "to": "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
        "value": "0",
        "gas": "377583",
        "gasPrice": "500000000000",
        "isError": "0",
        "input": "0xf00d4b5d00000000000000000000000005096a47749d8bfab0a90c1bb7a95115dbe4cea60000000000000000000000005ed8cee6b63b1c6afce3ad7c92f4fd7e1b8fad9f",
        "contractAddress": "",
        "cumulativeGasUsed": "122207",
        "gasUsed": "122207",
        "confirmations": "3929454"
    })
}

pub fn internal_transaction() -> Value {
    json!({
        "contractAddress": "",
        "from": "0x2cac6e4b11d6b58f6d3c1c9d5fe8faa89f60e5a2",
        "timeStamp": "1466489498",
        "gas": "2300",
        "errCode": "",
        "value": "7106740000000000",
        "blockNumber": "1743059",
        "to": "0x66a1c3eaf0f1ffc28d209c0763ed0ca614f3b002",
        "input": "",
        "type": "call",
        "isError": "0",
        "gasUsed": "0"
    })
}

pub fn dao_abi() -> Value {
    let param = |name: &str, kind: &str| json!({"name": name, "type": kind});
    json!([{
        "constant": true,
        "inputs": [param("", "uint256")],
        "name": "proposals",
        "outputs": [
            param("recipient", "address"),
            param("amount", "uint256"),
            param("description", "string"),
            param("votingDeadline", "uint256"),
            param("open", "bool"),
            param("proposalPassed", "bool"),
            param("proposalHash", "bytes32"),
            param("proposalDeposit", "uint256"),
            param("newCurator", "bool"),
            param("yea", "uint256"),
            param("nay", "uint256"),
            param("creator", "address")
        ],
        "type": "function"
    }])
}

pub fn block_rewards_result() -> Value {
    json!({
        "blockNumber": "2165403",
        "timeStamp": "1472533979",
        "blockMiner": "0x13a06d3dfe21e0db5c016c03ea7d2509f7f8d1e3",
        "blockReward": "5314181600000000000",
        "uncles": [
            {"miner": "0xbcdfc35b86bedf72f0cda046a3c16829a2ef41d1", "unclePosition": "0", "blockreward": "3750000000000000000"},
            {"miner": "0x0d0c9855c722ff0c78f21e43aa275a5b8ea60dce", "unclePosition": "1", "blockreward": "3750000000000000000"}
        ],
        "uncleInclusionReward": "312500000000000000"
    })
}
