//! Image catalog backend
//!
//! Issues presigned S3 upload URLs and serves the label catalog kept in `DynamoDB`.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Catalog listing and label search
pub mod catalog;

/// S3 presigning for uploads and views
pub mod image_storage;

/// HTTP routes
pub mod routes;

/// Server startup
pub mod server;

/// Configuration, errors and extractors
pub mod types;
