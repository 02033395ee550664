//! Recent swap feed from the `swaps` entity.
//!
//! The upstream query asks for the newest swaps at or above a USD threshold.
//! The result is reshaped into the display columns of the swaps table:
//! `time`, `dex`, `network`, `swap` and `txn`.

use serde_json::Value;

use crate::client::SubgraphClient;
use crate::config;
use crate::error::{PolygraphError, Result};
use crate::format::{format_clock, format_usd};
use crate::frame::{as_f64, as_i64, Frame};
use crate::models::{SubgraphRef, SwapRecord, SwapRow};
use crate::query_builder::{GraphQuery, OrderDirection};

pub const ENTITY: &str = "swaps";

/// Columns of the display frame, in order.
pub const DISPLAY_COLUMNS: [&str; 5] = ["time", "dex", "network", "swap", "txn"];

const FIELDS: [&str; 8] = [
    "hash",
    "protocol.name",
    "protocol.network",
    "timestamp",
    "tokenIn.symbol",
    "amountInUSD",
    "tokenOut.symbol",
    "amountOutUSD",
];

// ---------------------------------------------------------------------------
// SwapQuery
// ---------------------------------------------------------------------------

/// Query interface for the latest swaps of one subgraph.
pub struct SwapQuery<'a> {
    client: &'a SubgraphClient,
    subgraph: &'a SubgraphRef,
}

impl<'a> SwapQuery<'a> {
    pub fn new(client: &'a SubgraphClient, subgraph: &'a SubgraphRef) -> Self {
        Self { client, subgraph }
    }

    /// The query sent for swaps with `amountInUSD >= min_usd`.
    pub fn feed_query(min_usd: u64) -> GraphQuery {
        let mut query = GraphQuery::new(ENTITY);
        query
            .select(&FIELDS)
            .where_gte("amountInUSD", &min_usd.to_string())
            .order_by("timestamp")
            .order_direction(OrderDirection::Desc)
            .first(config::SWAP_FEED_LIMIT);
        query
    }

    /// Raw swap records, newest first as ordered by the subgraph.
    ///
    /// Rows under `min_usd` are dropped and at most ten are kept.
    pub fn raw(&self, min_usd: u64) -> Result<Vec<SwapRecord>> {
        let mut frame = self.client.query(self.subgraph, &Self::feed_query(min_usd))?;
        frame.strip_prefix("swaps_");
        let amount = frame.column_index("amountInUSD")?;
        frame.retain(|row| as_f64(&row[amount]).unwrap_or(0.0) >= min_usd as f64);
        frame.truncate(config::SWAP_FEED_LIMIT);
        to_records(&frame)
    }

    /// Display rows, in the order of [`latest`](Self::latest).
    pub fn records(&self, min_usd: u64) -> Result<Vec<SwapRow>> {
        from_frame(&self.latest(min_usd)?)
    }

    /// Display frame with the columns in [`DISPLAY_COLUMNS`], stably
    /// re-sorted by `time` descending.
    pub fn latest(&self, min_usd: u64) -> Result<Frame> {
        let rows: Vec<SwapRow> = self.raw(min_usd)?.iter().map(display_row).collect();
        let mut frame = to_frame(&rows);
        frame.sort_desc_by("time")?;
        Ok(frame)
    }
}

/// Build the display row for one swap.
pub fn display_row(swap: &SwapRecord) -> SwapRow {
    let amount_in = format_usd(swap.amount_in_usd);
    let amount_out = format_usd(swap.amount_out_usd);
    SwapRow {
        time: format_clock(swap.timestamp),
        dex: swap.protocol_name.clone(),
        network: swap.protocol_network.clone(),
        swap: format!(
            "${} {} → ${} {}",
            amount_in, swap.token_in_symbol, amount_out, swap.token_out_symbol
        ),
        txn: explorer_link(&swap.hash),
    }
}

/// Markdown link to the swap's transaction on the block explorer.
pub fn explorer_link(hash: &str) -> String {
    format!("[🔗]({}/{})", config::EXPLORER_TX_BASE, hash)
}

pub fn to_frame(rows: &[SwapRow]) -> Frame {
    let mut frame = Frame::new(DISPLAY_COLUMNS.iter().map(|c| c.to_string()).collect());
    for row in rows {
        frame.push_row(vec![
            Value::String(row.time.clone()),
            Value::String(row.dex.clone()),
            Value::String(row.network.clone()),
            Value::String(row.swap.clone()),
            Value::String(row.txn.clone()),
        ]);
    }
    frame
}

/// Read display rows back out of a frame with [`DISPLAY_COLUMNS`].
pub fn from_frame(frame: &Frame) -> Result<Vec<SwapRow>> {
    let column = |name: &str| frame.str_column(name);
    let time = column("time")?;
    let dex = column("dex")?;
    let network = column("network")?;
    let swap = column("swap")?;
    let txn = column("txn")?;
    Ok((0..frame.len())
        .map(|i| SwapRow {
            time: time[i].clone(),
            dex: dex[i].clone(),
            network: network[i].clone(),
            swap: swap[i].clone(),
            txn: txn[i].clone(),
        })
        .collect())
}

/// Convert an unprefixed swaps frame into typed records.
pub fn to_records(frame: &Frame) -> Result<Vec<SwapRecord>> {
    let text = |row: usize, col: &str| -> Result<String> {
        Ok(match frame.cell(row, col)? {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    };

    (0..frame.len())
        .map(|i| {
            let hash = text(i, "hash")?;
            let timestamp = as_i64(frame.cell(i, "timestamp")?).ok_or_else(|| {
                PolygraphError::GraphQl(format!("swap {} has no timestamp", hash))
            })?;
            Ok(SwapRecord {
                protocol_name: text(i, "protocol_name")?,
                protocol_network: text(i, "protocol_network")?,
                timestamp,
                token_in_symbol: text(i, "tokenIn_symbol")?,
                amount_in_usd: as_f64(frame.cell(i, "amountInUSD")?).unwrap_or(0.0),
                token_out_symbol: text(i, "tokenOut_symbol")?,
                amount_out_usd: as_f64(frame.cell(i, "amountOutUSD")?).unwrap_or(0.0),
                hash,
            })
        })
        .collect()
}
