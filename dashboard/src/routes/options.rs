use axum::response::Json;
use polygraph::{config, Selection};
use serde_json::{json, Value};

/// GET /api/options
///
/// Selector choices, the default selection and the refresh interval.
pub async fn get_options() -> Json<Value> {
    Json(json!({
        "networks": config::network_options(),
        "thresholds": config::USD_THRESHOLDS,
        "default": Selection::default(),
        "refresh_interval_secs": config::REFRESH_INTERVAL_SECS,
    }))
}
