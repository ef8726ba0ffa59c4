//! Catalog storage for the image catalog
//!
//! This crate owns access to the `DynamoDB` table that maps S3 object keys to the
//! label sets written by the tagging pipeline.

pub mod catalog;
