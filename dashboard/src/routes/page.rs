use axum::response::Html;

const PAGE: &str = include_str!("../page.html");

/// GET /
///
/// The single-page UI. All data is loaded from `/api/options` and
/// `/api/view` by the page script.
pub async fn index() -> Html<&'static str> {
    Html(PAGE)
}
