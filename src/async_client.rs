//! Async wrapper around [`Polygraph`] for use in Tokio runtimes.
//!
//! Every call runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`]. The inner SDK sits behind a [`Mutex`], so
//! refresh cycles issued through one `AsyncPolygraph` never overlap.
//!
//! # Example
//!
//! ```no_run
//! use polygraph::AsyncPolygraph;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncPolygraph::builder().build().await.unwrap();
//!
//!     let swaps = sdk.run(|s| {
//!         let subgraph = s.subgraph("sushi-swap-polygon")?;
//!         s.swaps(subgraph).latest(10_000)
//!     }).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{PolygraphError, Result};
use crate::models::SubgraphRef;
use crate::Polygraph;

// ---------------------------------------------------------------------------
// AsyncPolygraphBuilder
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AsyncPolygraphBuilder {
    timeout: Option<Duration>,
    subgraphs: Option<Vec<SubgraphRef>>,
}

impl AsyncPolygraphBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn subgraphs(mut self, subgraphs: Vec<SubgraphRef>) -> Self {
        self.subgraphs = Some(subgraphs);
        self
    }

    /// Build on the blocking pool; the blocking HTTP client must not be
    /// created on an async worker thread.
    pub async fn build(self) -> Result<AsyncPolygraph> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Polygraph::builder();
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(subgraphs) = self.subgraphs {
                builder = builder.subgraphs(subgraphs);
            }
            Ok(AsyncPolygraph::from_sdk(builder.build()?))
        })
        .await
        .map_err(|e| PolygraphError::Internal(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPolygraph
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AsyncPolygraph {
    inner: Arc<Mutex<Polygraph>>,
}

impl AsyncPolygraph {
    pub fn builder() -> AsyncPolygraphBuilder {
        AsyncPolygraphBuilder::default()
    }

    /// Wrap an already-built SDK (e.g. one with a custom transport).
    pub fn from_sdk(sdk: Polygraph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sdk)),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Polygraph) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| PolygraphError::Internal("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| PolygraphError::Internal(format!("Task join error: {e}")))?
    }
}
