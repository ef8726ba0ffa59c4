use std::sync::Arc;

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    image_storage::ImageStorage,
    types::{ApiJson, AppError},
};

/// Upload request body
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Original filename, kept verbatim in the object key
    pub filename: String,
    /// MIME type the client will send with the upload
    pub content_type: String,
}

/// Upload credential returned to the client
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UploadResponse {
    /// Presigned URL to PUT the image to, valid for 60 seconds
    pub url: String,
    /// S3 key the image will be stored under
    pub key: String,
}

/// Creates a presigned URL for uploading an image to S3
///
/// Generates a fresh object key of the form `<16 hex chars>-<filename>` and
/// signs a PUT for it. Nothing is written server-side; the catalog row appears
/// once the tagging pipeline has processed the uploaded object.
///
/// The client must send a `Content-Type` header equal to `contentType` with
/// its PUT, since the header is part of the signature.
///
/// # Errors
///
/// - `400 BAD_REQUEST` - The body is not valid JSON for an upload request
/// - `500 INTERNAL_SERVER_ERROR` - The presigned URL could not be generated
#[instrument(skip(image_storage, payload))]
pub async fn create_upload_url(
    Extension(image_storage): Extension<Arc<ImageStorage>>,
    ApiJson(payload): ApiJson<UploadRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    let key = ImageStorage::generate_object_key(&payload.filename);

    let url = image_storage
        .presigned_put_url(&key, &payload.content_type)
        .await
        .map_err(|err| {
            AppError::internal(&err, "presign_failed", "Error generating signed URL")
        })?;

    tracing::info!(key, "Issued upload URL");

    Ok(Json(UploadResponse { url, key }))
}
