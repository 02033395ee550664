use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SwapRecord — Raw swap event as projected from the subgraph
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRecord {
    pub hash: String,
    pub protocol_name: String,
    pub protocol_network: String,
    pub timestamp: i64,
    pub token_in_symbol: String,
    #[serde(rename = "amountInUSD")]
    pub amount_in_usd: f64,
    pub token_out_symbol: String,
    #[serde(rename = "amountOutUSD")]
    pub amount_out_usd: f64,
}

// ---------------------------------------------------------------------------
// SwapRow — Display row for the recent swaps table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRow {
    pub time: String,
    pub dex: String,
    pub network: String,
    pub swap: String,
    pub txn: String,
}
