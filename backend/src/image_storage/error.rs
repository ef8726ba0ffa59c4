//! Error types for bucket operations

use thiserror::Error;

/// Result type for bucket operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur during bucket operations
#[derive(Error, Debug)]
pub enum BucketError {
    /// Presigning the request failed
    #[error("Failed to presign {operation} request for {key}: {message}")]
    PresignError {
        /// S3 operation being presigned
        operation: &'static str,
        /// Object key the URL was requested for
        key: String,
        /// Underlying SDK error
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
