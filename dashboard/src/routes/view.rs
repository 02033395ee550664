use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use polygraph::{Dashboard, Render, Selection};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// The page's requested selection plus the one it last rendered. Each page
/// owns its selection; the server keeps none between requests.
#[derive(Debug, Deserialize)]
pub struct ViewParams {
    pub network: Option<String>,
    pub min_usd: Option<u64>,
    pub prev_network: Option<String>,
    pub prev_min_usd: Option<u64>,
}

impl ViewParams {
    /// `(previous, requested)`. Omitted previous fields fall back to the
    /// default selection, omitted requested fields to the previous ones.
    pub fn selections(self) -> (Selection, Selection) {
        let default = Selection::default();
        let previous = Selection {
            network: self.prev_network.unwrap_or(default.network),
            min_usd: self.prev_min_usd.unwrap_or(default.min_usd),
        };
        let requested = Selection {
            network: self.network.unwrap_or_else(|| previous.network.clone()),
            min_usd: self.min_usd.unwrap_or(previous.min_usd),
        };
        (previous, requested)
    }
}

/// GET /api/view?network=uniswap-v3-polygon&min_usd=1000&prev_network=balancer-v2-polygon&prev_min_usd=1000
///
/// Run one refresh cycle for the transition from the previous selection to
/// the requested one. Unchanged selections are a timer tick.
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Render>, AppError> {
    let (previous, requested) = params.selections();
    let render = state
        .sdk
        .run(move |s| {
            previous.validate(s)?;
            Dashboard::new(previous).submit(s, &requested)
        })
        .await?;

    Ok(Json(render))
}
