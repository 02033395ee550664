pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Address the dashboard listens on.
pub const BIND_ADDR: &str = "127.0.0.1:8501";

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::page::index))
        .route("/api/options", get(routes::options::get_options))
        .route("/api/view", get(routes::view::get_view))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
