use std::sync::Arc;

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    catalog::{CatalogImage, ImageCatalog},
    types::{ApiQuery, AppError},
};

/// Query parameters of the search endpoint
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Label to search for, matched case-insensitively against whole labels.
    /// When repeated, the first value wins.
    #[serde(default)]
    pub q: String,
}

/// Lists every image in the catalog
///
/// Performs a full scan of the catalog table and mints a one-hour view URL for
/// each entry. Entries are sorted by S3 key so the grid order is stable.
///
/// # Errors
///
/// - `500 INTERNAL_SERVER_ERROR` - The scan failed or any view URL could not be minted
#[instrument(skip(catalog))]
pub async fn list_images(
    Extension(catalog): Extension<Arc<ImageCatalog>>,
) -> Result<Json<Vec<CatalogImage>>, AppError> {
    let images = catalog.list_images().await.map_err(|err| {
        AppError::internal(&err, "fetch_images_failed", "Failed to fetch images")
    })?;

    Ok(Json(images))
}

/// Searches the catalog by label
///
/// Returns the images whose label set contains the lowercased query. The order
/// is whatever the table scan yields. No match is an empty array, not an error.
///
/// # Errors
///
/// - `400 BAD_REQUEST` - The `q` query parameter is missing or empty
/// - `500 INTERNAL_SERVER_ERROR` - The scan failed or any view URL could not be minted
#[instrument(skip(catalog))]
pub async fn search_images(
    Extension(catalog): Extension<Arc<ImageCatalog>>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<Vec<CatalogImage>>, AppError> {
    let query = params.q;
    if query.is_empty() {
        return Err(AppError::bad_request(
            "missing_query",
            "Search query 'q' is required",
        ));
    }

    let images = catalog
        .search_images(&query)
        .await
        .map_err(|err| AppError::internal(&err, "search_failed", "Search failed"))?;

    Ok(Json(images))
}
