use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailySnapshot — One day of protocol usage counts
// ---------------------------------------------------------------------------

/// `id` is the day number since the Unix epoch, as returned by the subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    pub id: String,
    pub timestamp: i64,
    pub daily_deposit_count: f64,
    pub daily_withdraw_count: f64,
    pub daily_swap_count: f64,
    pub daily_transaction_count: f64,
    pub daily_active_users: f64,
}
