use std::sync::Arc;

use polygraph::AsyncPolygraph;
use polygraph_dashboard::{app, logging, AppState, BIND_ADDR};

#[tokio::main]
async fn main() {
    logging::init_tracing();

    let sdk = match AsyncPolygraph::builder().build().await {
        Ok(sdk) => sdk,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize subgraph client");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(sdk));

    let listener = match tokio::net::TcpListener::bind(BIND_ADDR).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, addr = BIND_ADDR, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on http://{BIND_ADDR}");
    if let Err(e) = axum::serve(listener, app(state)).await {
        tracing::error!(error = %e, "server stopped");
    }
}
