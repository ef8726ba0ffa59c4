/// API documentation routes
pub mod docs;
mod health;
/// Catalog listing and search handlers
pub mod images;
mod ui;
/// Presigned upload handler
pub mod upload;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .route("/", axum::routing::get(ui::index))
        .api_route("/health", get(health::handler))
        .api_route("/api/images", get(images::list_images))
        .api_route("/api/search", get(images::search_images))
        .api_route("/api/upload", post(upload::create_upload_url))
}
