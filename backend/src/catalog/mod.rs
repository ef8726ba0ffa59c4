//! Catalog listing and label search
//!
//! Joins catalog rows from `DynamoDB` with freshly minted S3 view URLs.

use std::sync::Arc;

use catalog_storage::catalog::{CatalogEntry, CatalogStorage, CatalogStorageError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::image_storage::{BucketError, ImageStorage};

/// A catalog entry together with a short-lived URL to view it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogImage {
    /// S3 object key, unique per image
    pub s3_key: String,
    /// Presigned GET URL for the image
    pub url: String,
    /// Labels attached by the tagging pipeline, empty if not tagged yet
    pub labels: Vec<String>,
}

/// Errors raised while building catalog responses
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog table failed
    #[error(transparent)]
    Storage(#[from] CatalogStorageError),

    /// Minting a view URL failed
    #[error(transparent)]
    Bucket(#[from] BucketError),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read side of the image catalog
pub struct ImageCatalog {
    catalog_storage: Arc<CatalogStorage>,
    image_storage: Arc<ImageStorage>,
}

impl ImageCatalog {
    /// Creates a new catalog over the given table and bucket
    #[must_use]
    pub const fn new(catalog_storage: Arc<CatalogStorage>, image_storage: Arc<ImageStorage>) -> Self {
        Self {
            catalog_storage,
            image_storage,
        }
    }

    /// Lists every image in the catalog, ordered by S3 key.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the scan fails or any single view URL cannot be minted
    pub async fn list_images(&self) -> CatalogResult<Vec<CatalogImage>> {
        let entries = self.catalog_storage.scan_all().await?;

        let mut images = self.attach_view_urls(entries).await?;
        sort_by_s3_key(&mut images);

        info!(count = images.len(), "Listed catalog images");
        Ok(images)
    }

    /// Lists the images whose label set contains `query` (case-insensitive).
    ///
    /// Results come back in scan order, which is not stable across calls.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the scan fails or any single view URL cannot be minted
    pub async fn search_images(&self, query: &str) -> CatalogResult<Vec<CatalogImage>> {
        let label = normalize_label(query);
        let entries = self.catalog_storage.scan_by_label(&label).await?;

        let images = self.attach_view_urls(entries).await?;

        info!(label, count = images.len(), "Searched catalog images");
        Ok(images)
    }

    /// Mints one view URL per entry, in order. The first failure aborts the batch.
    async fn attach_view_urls(&self, entries: Vec<CatalogEntry>) -> CatalogResult<Vec<CatalogImage>> {
        let mut images = Vec::with_capacity(entries.len());

        for entry in entries {
            let url = self.image_storage.presigned_get_url(&entry.s3_key).await?;
            images.push(CatalogImage {
                s3_key: entry.s3_key,
                url,
                labels: entry.labels,
            });
        }

        Ok(images)
    }
}

/// Labels are stored lowercase
fn normalize_label(query: &str) -> String {
    query.to_lowercase()
}

fn sort_by_s3_key(images: &mut [CatalogImage]) {
    images.sort_by(|a, b| a.s3_key.cmp(&b.s3_key));
}
