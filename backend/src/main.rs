use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;

use catalog_storage::catalog::CatalogStorage;
use image_catalog::{
    catalog::ImageCatalog, image_storage::ImageStorage, server, types::Environment,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON logs for staging/production, human-readable logs for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development { .. } => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    info!("Starting Image Catalog in {:?} environment", environment);

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let image_storage = Arc::new(ImageStorage::new(
        s3_client,
        environment.s3_bucket(),
        environment.upload_url_expiry_secs(),
        environment.view_url_expiry_secs(),
    ));

    info!("✅ Initialized image storage");

    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
    let catalog_storage = Arc::new(CatalogStorage::new(
        dynamodb_client,
        environment.catalog_table_name(),
    ));
    let image_catalog = Arc::new(ImageCatalog::new(catalog_storage, image_storage.clone()));

    info!("✅ Initialized catalog storage");

    server::start(environment, image_storage, image_catalog).await
}
