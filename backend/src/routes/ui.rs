use axum::response::Html;

/// Client page for browsing, searching and uploading images
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serves the client page
#[allow(clippy::unused_async)]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
