//! Query modules for subgraph entities.
//!
//! Each module provides a query struct that borrows a
//! [`SubgraphClient`](crate::client::SubgraphClient) and a
//! [`SubgraphRef`](crate::models::SubgraphRef) and returns [`Frame`](crate::frame::Frame)s
//! or typed records.

pub mod metrics;
pub mod swaps;

pub use metrics::MetricsQuery;
pub use swaps::SwapQuery;
