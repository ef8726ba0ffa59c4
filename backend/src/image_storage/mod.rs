//! S3-based image storage operations
//!
//! Images never pass through this service: clients upload and download them
//! directly against S3 using the presigned URLs minted here.

mod error;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{presigning::PresigningConfig, Client as S3Client};
use tracing::debug;

pub use error::{BucketError, BucketResult};

/// Number of random bytes prefixed to uploaded filenames
const KEY_PREFIX_BYTES: usize = 8;

/// Image storage client for S3 operations
pub struct ImageStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    upload_url_expiry_secs: u64,
    view_url_expiry_secs: u64,
}

impl ImageStorage {
    /// Creates a new image storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket name for image storage
    /// * `upload_url_expiry_secs` - Lifetime of presigned PUT URLs in seconds
    /// * `view_url_expiry_secs` - Lifetime of presigned GET URLs in seconds
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: String,
        upload_url_expiry_secs: u64,
        view_url_expiry_secs: u64,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            upload_url_expiry_secs,
            view_url_expiry_secs,
        }
    }

    /// Builds a fresh object key for an upload: `<16 hex chars>-<filename>`.
    ///
    /// The filename is kept verbatim. Uniqueness relies on the 64-bit random
    /// prefix; there is no existence check against the bucket.
    #[must_use]
    pub fn generate_object_key(filename: &str) -> String {
        let prefix: [u8; KEY_PREFIX_BYTES] = rand::random();
        format!("{}-{filename}", hex::encode(prefix))
    }

    fn presigning_config(expiry_secs: u64) -> BucketResult<PresigningConfig> {
        PresigningConfig::expires_in(Duration::from_secs(expiry_secs)).map_err(|e| {
            BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
        })
    }

    /// Generates a presigned URL for uploading an object
    ///
    /// The signature covers `Content-Type`, so the client must send the same
    /// header value on its PUT.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// Returns `BucketError::PresignError` if presigned URL generation fails
    pub async fn presigned_put_url(&self, s3_key: &str, content_type: &str) -> BucketResult<String> {
        let presigned_config = Self::presigning_config(self.upload_url_expiry_secs)?;

        let presigned_request = self
            .s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(s3_key)
            .content_type(content_type)
            .presigned(presigned_config)
            .await
            .map_err(|e| BucketError::PresignError {
                operation: "PutObject",
                key: s3_key.to_string(),
                message: e.to_string(),
            })?;

        debug!(s3_key, "Presigned upload URL");

        Ok(presigned_request.uri().to_string())
    }

    /// Generates a presigned URL for viewing an object
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// Returns `BucketError::PresignError` if presigned URL generation fails
    pub async fn presigned_get_url(&self, s3_key: &str) -> BucketResult<String> {
        let presigned_config = Self::presigning_config(self.view_url_expiry_secs)?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(s3_key)
            .presigned(presigned_config)
            .await
            .map_err(|e| BucketError::PresignError {
                operation: "GetObject",
                key: s3_key.to_string(),
                message: e.to_string(),
            })?;

        Ok(presigned_request.uri().to_string())
    }
}
