use polygraph::AsyncPolygraph;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Runs blocking subgraph queries on the blocking pool, one at a time,
    /// so refresh cycles are serialized.
    pub sdk: AsyncPolygraph,
}

impl AppState {
    pub fn new(sdk: AsyncPolygraph) -> Self {
        Self { sdk }
    }
}
