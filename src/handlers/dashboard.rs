use axum::response::Html;
use tracing::instrument;

const DASHBOARD_PAGE: &str = include_str!("../../static/dashboard.html");

/// Serves the interactive dashboard page.
///
/// The page only holds the controls and chart slots; it fetches
/// `/api/v1/layout` and `/api/v1/figures` whenever a control changes.
#[instrument]
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}
