//! Error types for catalog storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use thiserror::Error;

/// Result type alias for catalog storage operations
pub type CatalogStorageResult<T> = Result<T, CatalogStorageError>;

/// Storage error types for catalog operations
#[derive(Debug, Error)]
pub enum CatalogStorageError {
    /// Failed to scan the catalog table
    #[error("Failed to scan catalog table: {0:?}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to parse a catalog entry from a `DynamoDB` item
    #[error("Failed to parse catalog entry: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for CatalogStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
