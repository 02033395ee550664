//! Shared test fixtures for the PolyGraph integration tests.
//!
//! Provides a `MockTransport` that records every request body and replays
//! canned subgraph responses, plus sample snapshot and swap payloads.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use polygraph::{Polygraph, PolygraphError, Result, Transport};
use serde_json::{json, Value};

pub type Requests = Arc<Mutex<Vec<(String, Value)>>>;

/// Replays the first canned response whose key appears in the query text.
pub struct MockTransport {
    responses: Vec<(String, Value)>,
    requests: Requests,
    fail: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Answer any query mentioning `entity` with `response`.
    pub fn respond(mut self, entity: &str, response: Value) -> Self {
        self.responses.push((entity.to_string(), response));
        self
    }

    /// Fail every request as if the endpoint were unreachable.
    pub fn failing() -> Self {
        let mut mock = Self::new();
        mock.fail = true;
        mock
    }

    pub fn requests(&self) -> Requests {
        self.requests.clone()
    }
}

impl Transport for MockTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        if self.fail {
            return Err(PolygraphError::GraphQl("connection refused".into()));
        }
        let query = body["query"].as_str().unwrap_or("");
        self.responses
            .iter()
            .find(|(key, _)| query.contains(&format!("{}(", key)) || query.contains(&format!("{} {{", key)))
            .map(|(_, v)| v.clone())
            .ok_or_else(|| PolygraphError::GraphQl(format!("no canned response for {}", query)))
    }
}

/// Build an SDK over `mock` with the default subgraph registry.
pub fn sdk_with(mock: MockTransport) -> Polygraph {
    Polygraph::builder().transport(mock).build().unwrap()
}

/// Three days of usage metrics. Counts are strings, as BigInt fields are
/// returned by the subgraph.
pub fn snapshot_response() -> Value {
    json!({
        "data": {
            "usageMetricsDailySnapshots": [
                {
                    "id": "19000",
                    "timestamp": "1641600000",
                    "dailyDepositCount": 12,
                    "dailyWithdrawCount": 7,
                    "dailySwapCount": 140,
                    "dailyTransactionCount": 159,
                    "dailyActiveUsers": 88
                },
                {
                    "id": "19001",
                    "timestamp": "1641686400",
                    "dailyDepositCount": 15,
                    "dailyWithdrawCount": 4,
                    "dailySwapCount": 131,
                    "dailyTransactionCount": 150,
                    "dailyActiveUsers": 91
                },
                {
                    "id": "19002",
                    "timestamp": "1641772800",
                    "dailyDepositCount": 9,
                    "dailyWithdrawCount": 11,
                    "dailySwapCount": 162,
                    "dailyTransactionCount": 182,
                    "dailyActiveUsers": 104
                }
            ]
        }
    })
}

pub fn swap_json(hash: &str, timestamp: i64, amount_in: &str, amount_out: &str) -> Value {
    json!({
        "hash": hash,
        "protocol": { "name": "Uniswap V3", "network": "MATIC" },
        "timestamp": timestamp.to_string(),
        "tokenIn": { "symbol": "WETH" },
        "amountInUSD": amount_in,
        "tokenOut": { "symbol": "USDC" },
        "amountOutUSD": amount_out
    })
}

pub fn swaps_response(rows: Vec<Value>) -> Value {
    json!({ "data": { "swaps": rows } })
}

/// Four swaps, newest first, all above $100.
pub fn sample_swaps_response() -> Value {
    swaps_response(vec![
        swap_json("0xaaa", 1_700_000_300, "2500.5", "2498.1"),
        swap_json("0xbbb", 1_700_000_200, "1234567.891", "1234000"),
        swap_json("0xccc", 1_700_000_100, "150", "149.99"),
        swap_json("0xddd", 1_700_000_000, "100", "99.5"),
    ])
}
