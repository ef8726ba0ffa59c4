//! Catalog table storage module for `DynamoDB` operations
//!
//! Rows are written by the out-of-band tagging pipeline; this module only reads them.

mod error;

use std::sync::Arc;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
pub use error::{CatalogStorageError, CatalogStorageResult};
use serde::{Deserialize, Serialize};
use serde_dynamo::from_items;
use strum::Display;
use tracing::debug;

/// A single catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Primary key - S3 object key of the image
    pub s3_key: String,
    /// Lowercase labels attached by the tagging pipeline (string set).
    /// Rows that have not been tagged yet carry no attribute at all.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// `DynamoDB` attribute names for the catalog table
#[derive(Debug, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CatalogAttribute {
    /// Primary key - S3 object key
    S3Key,
    /// String set of labels
    Labels,
}

/// Storage client for catalog table reads
pub struct CatalogStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl CatalogStorage {
    /// Creates a new storage instance
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for catalog entries
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Returns every entry in the catalog table.
    ///
    /// This is a full table scan. It reads every page until the table is exhausted,
    /// so the cost grows linearly with the catalog size.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStorageError` if the `DynamoDB` scan fails or a row cannot be decoded
    pub async fn scan_all(&self) -> CatalogStorageResult<Vec<CatalogEntry>> {
        let items = self
            .dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await?;

        debug!(count = items.len(), "Scanned catalog table");

        Ok(from_items(items)?)
    }

    /// Returns the entries whose label set contains `label`.
    ///
    /// The match is an exact set-membership test evaluated by `DynamoDB` during a
    /// full scan; callers are expected to pass an already normalized label.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStorageError` if the `DynamoDB` scan fails or a row cannot be decoded
    pub async fn scan_by_label(&self, label: &str) -> CatalogStorageResult<Vec<CatalogEntry>> {
        let items = self
            .dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("contains(#labels, :label)")
            .expression_attribute_names("#labels", CatalogAttribute::Labels.to_string())
            .expression_attribute_values(":label", AttributeValue::S(label.to_string()))
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await?;

        debug!(label, count = items.len(), "Scanned catalog table by label");

        Ok(from_items(items)?)
    }
}
