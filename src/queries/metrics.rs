//! Daily usage metrics from the `usageMetricsDailySnapshots` entity.

use crate::client::SubgraphClient;
use crate::config;
use crate::error::{PolygraphError, Result};
use crate::frame::{as_f64, as_i64, Frame};
use crate::models::{DailySnapshot, SubgraphRef};
use crate::query_builder::GraphQuery;

pub const ENTITY: &str = "usageMetricsDailySnapshots";

/// Flattened column names of a snapshot frame.
pub mod columns {
    pub const ID: &str = "usageMetricsDailySnapshots_id";
    pub const TIMESTAMP: &str = "usageMetricsDailySnapshots_timestamp";
    pub const DEPOSITS: &str = "usageMetricsDailySnapshots_dailyDepositCount";
    pub const WITHDRAWS: &str = "usageMetricsDailySnapshots_dailyWithdrawCount";
    pub const SWAPS: &str = "usageMetricsDailySnapshots_dailySwapCount";
    pub const TRANSACTIONS: &str = "usageMetricsDailySnapshots_dailyTransactionCount";
    pub const ACTIVE_USERS: &str = "usageMetricsDailySnapshots_dailyActiveUsers";
}

const FIELDS: [&str; 7] = [
    "id",
    "timestamp",
    "dailyDepositCount",
    "dailyWithdrawCount",
    "dailySwapCount",
    "dailyTransactionCount",
    "dailyActiveUsers",
];

// ---------------------------------------------------------------------------
// MetricsQuery
// ---------------------------------------------------------------------------

/// Query interface for daily usage snapshots of one subgraph.
pub struct MetricsQuery<'a> {
    client: &'a SubgraphClient,
    subgraph: &'a SubgraphRef,
}

impl<'a> MetricsQuery<'a> {
    pub fn new(client: &'a SubgraphClient, subgraph: &'a SubgraphRef) -> Self {
        Self { client, subgraph }
    }

    /// The query sent for snapshots strictly newer than `since`.
    pub fn snapshot_query(since: i64) -> GraphQuery {
        let mut query = GraphQuery::new(ENTITY);
        query
            .select(&FIELDS)
            .where_gt("timestamp", &since.to_string())
            .first(config::SNAPSHOT_LIMIT);
        query
    }

    /// Fetch up to 1000 daily snapshots with `timestamp > since`.
    ///
    /// Rows beyond the first 1000 are not paged in.
    pub fn daily_snapshots(&self, since: i64) -> Result<Frame> {
        self.client
            .query(self.subgraph, &Self::snapshot_query(since))
    }

    /// Same rows as [`daily_snapshots`](Self::daily_snapshots), typed.
    pub fn records(&self, since: i64) -> Result<Vec<DailySnapshot>> {
        let frame = self.daily_snapshots(since)?;
        to_records(&frame)
    }
}

/// Convert a snapshot frame into typed records.
pub fn to_records(frame: &Frame) -> Result<Vec<DailySnapshot>> {
    let count = |row: usize, col: &str| -> Result<f64> {
        Ok(as_f64(frame.cell(row, col)?).unwrap_or(0.0))
    };

    (0..frame.len())
        .map(|i| {
            let id = frame.cell(i, columns::ID)?;
            let timestamp = as_i64(frame.cell(i, columns::TIMESTAMP)?).ok_or_else(|| {
                PolygraphError::GraphQl(format!("snapshot {} has no timestamp", id))
            })?;
            Ok(DailySnapshot {
                id: id.as_str().map(|s| s.to_string()).unwrap_or_else(|| id.to_string()),
                timestamp,
                daily_deposit_count: count(i, columns::DEPOSITS)?,
                daily_withdraw_count: count(i, columns::WITHDRAWS)?,
                daily_swap_count: count(i, columns::SWAPS)?,
                daily_transaction_count: count(i, columns::TRANSACTIONS)?,
                daily_active_users: count(i, columns::ACTIVE_USERS)?,
            })
        })
        .collect()
}
