//! PolyGraph: decentralized-exchange activity from subgraph APIs.
//!
//! Queries hosted subgraphs for daily usage metrics and recent swaps,
//! flattens the responses into [`Frame`]s, and builds ECharts option
//! documents and markdown tables for the dashboard. Every call re-fetches;
//! nothing is cached.
//!
//! # Quick start
//!
//! ```no_run
//! use polygraph::Polygraph;
//!
//! let sdk = Polygraph::builder().build().unwrap();
//! let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
//!
//! // Daily snapshots since the default cutoff, rendered as a chart
//! let frame = sdk.metrics(subgraph).daily_snapshots(polygraph::config::INITIAL_TIMESTAMP).unwrap();
//! let chart = polygraph::charts::transactions_chart(&frame).unwrap();
//!
//! // Ten latest swaps of at least $1,000
//! let swaps = sdk.swaps(subgraph).latest(1_000).unwrap();
//! println!("{}", swaps.to_markdown());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod charts;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod frame;
pub mod models;
pub mod queries;
pub mod query_builder;

#[cfg(feature = "async")]
pub use async_client::AsyncPolygraph;
pub use client::{HttpTransport, SubgraphClient, Transport};
pub use dashboard::{Dashboard, Render, Selection, Transition};
pub use error::{PolygraphError, Result};
pub use frame::Frame;
pub use models::SubgraphRef;
pub use query_builder::{GraphQuery, OrderDirection};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PolygraphBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Polygraph`] instance.
///
/// Use [`Polygraph::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PolygraphBuilder::build).
#[derive(Default)]
pub struct PolygraphBuilder {
    timeout: Option<Duration>,
    subgraphs: Option<Vec<SubgraphRef>>,
    transport: Option<Box<dyn Transport>>,
}

impl PolygraphBuilder {
    /// Set an HTTP request timeout. By default requests never time out.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the built-in registry of subgraph endpoints.
    pub fn subgraphs(mut self, subgraphs: Vec<SubgraphRef>) -> Self {
        self.subgraphs = Some(subgraphs);
        self
    }

    /// Use a custom transport instead of the blocking HTTP client.
    ///
    /// When set, [`timeout`](Self::timeout) has no effect.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn build(self) -> Result<Polygraph> {
        let transport = match self.transport {
            Some(t) => t,
            None => Box::new(HttpTransport::new(self.timeout)?),
        };
        Ok(Polygraph {
            client: SubgraphClient::new(transport),
            subgraphs: self.subgraphs.unwrap_or_else(config::subgraphs),
        })
    }
}

// ---------------------------------------------------------------------------
// Polygraph
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Owns the [`SubgraphClient`] and the subgraph registry, and hands out
/// lightweight borrowing query interfaces per subgraph.
pub struct Polygraph {
    client: SubgraphClient,
    subgraphs: Vec<SubgraphRef>,
}

impl Polygraph {
    pub fn builder() -> PolygraphBuilder {
        PolygraphBuilder::default()
    }

    /// Look up a registered subgraph by name.
    pub fn subgraph(&self, name: &str) -> Result<&SubgraphRef> {
        self.subgraphs
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| PolygraphError::NotFound(format!("Unknown network: {}", name)))
    }

    pub fn subgraphs(&self) -> &[SubgraphRef] {
        &self.subgraphs
    }

    /// Daily usage metrics for `subgraph`.
    pub fn metrics<'a>(&'a self, subgraph: &'a SubgraphRef) -> queries::MetricsQuery<'a> {
        queries::MetricsQuery::new(&self.client, subgraph)
    }

    /// Latest swaps for `subgraph`.
    pub fn swaps<'a>(&'a self, subgraph: &'a SubgraphRef) -> queries::SwapQuery<'a> {
        queries::SwapQuery::new(&self.client, subgraph)
    }
}

impl fmt::Display for Polygraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.subgraphs.iter().map(|s| s.name.as_str()).collect();
        write!(f, "Polygraph(subgraphs=[{}])", names.join(", "))
    }
}
