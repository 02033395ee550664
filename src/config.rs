use crate::models::SubgraphRef;

/// Snapshots with a timestamp at or before this cutoff are never requested.
pub const INITIAL_TIMESTAMP: i64 = 1601322741;

/// Upper bound the hosted service places on `first`.
pub const SNAPSHOT_LIMIT: usize = 1000;

/// Number of swaps shown in the recent swaps table.
pub const SWAP_FEED_LIMIT: usize = 10;

/// Slider options for the minimum swap size in USD.
pub const USD_THRESHOLDS: [u64; 4] = [100, 1_000, 10_000, 100_000];
pub const DEFAULT_USD_THRESHOLD: u64 = 100;

/// Seconds between automatic refreshes. Zero disables the timer.
pub const REFRESH_INTERVAL_SECS: u64 = 0;

/// Block explorer prefix; the transaction hash is appended as a path segment.
pub const EXPLORER_TX_BASE: &str = "https://polygonscan.com/tx";

/// Network selected when the page first loads.
pub const DEFAULT_NETWORK: &str = "balancer-v2-polygon";

/// Built-in registry of subgraph endpoints, keyed by network name.
///
/// Every network exposes `usageMetricsDailySnapshots` and `swaps` with the
/// same field names, so one set of queries serves all of them.
pub fn subgraphs() -> Vec<SubgraphRef> {
    vec![
        SubgraphRef::new(
            "balancer-v2-polygon",
            "https://api.thegraph.com/subgraphs/name/dorgtech/balancer-v2-polygon",
        ),
        SubgraphRef::new(
            "uniswap-v3-polygon",
            "https://api.thegraph.com/subgraphs/name/steegecs/uniswap-v3-polygon",
        ),
        SubgraphRef::new(
            "quick-swap-polygon",
            "https://api.thegraph.com/subgraphs/name/messari/quickswap-polygon",
        ),
        SubgraphRef::new(
            "sushi-swap-polygon",
            "https://api.thegraph.com/subgraphs/name/messari/sushiswap-polygon",
        ),
    ]
}

/// Order in which networks are offered in the selector.
pub fn network_options() -> [&'static str; 4] {
    [
        "balancer-v2-polygon",
        "uniswap-v3-polygon",
        "sushi-swap-polygon",
        "quick-swap-polygon",
    ]
}
