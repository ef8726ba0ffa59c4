use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Extension, Router};
use catalog_storage::catalog::CatalogStorage;
use image_catalog::{
    catalog::ImageCatalog, image_storage::ImageStorage, routes, types::Environment,
};
use tower::ServiceExt;

use super::dynamodb_setup::DynamoDbTestSetup;
use super::s3_utils::create_test_bucket;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup against LocalStack, with a fresh bucket and catalog table
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
    pub s3_client: Arc<S3Client>,
    pub bucket_name: String,
    pub image_storage: Arc<ImageStorage>,
    pub dynamodb_client: Arc<DynamoDbClient>,
    pub dynamodb: DynamoDbTestSetup,
}

impl TestSetup {
    pub async fn new() -> Self {
        setup_test_env();

        let environment = Environment::Development {
            upload_expiry_override: None,
            view_expiry_override: None,
        };

        let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
        let bucket_name = create_test_bucket(&s3_client).await;

        let image_storage = Arc::new(ImageStorage::new(
            s3_client.clone(),
            bucket_name.clone(),
            environment.upload_url_expiry_secs(),
            environment.view_url_expiry_secs(),
        ));

        let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
        let dynamodb = DynamoDbTestSetup::new(dynamodb_client.clone()).await;

        let router = Self::build_router(
            &environment,
            &image_storage,
            &dynamodb_client,
            dynamodb.catalog_table_name.clone(),
        );

        Self {
            router,
            environment,
            s3_client,
            bucket_name,
            image_storage,
            dynamodb_client,
            dynamodb,
        }
    }

    fn build_router(
        environment: &Environment,
        image_storage: &Arc<ImageStorage>,
        dynamodb_client: &Arc<DynamoDbClient>,
        catalog_table_name: String,
    ) -> Router {
        let catalog_storage = Arc::new(CatalogStorage::new(
            dynamodb_client.clone(),
            catalog_table_name,
        ));
        let image_catalog = Arc::new(ImageCatalog::new(catalog_storage, image_storage.clone()));

        routes::handler()
            .layer(Extension(environment.clone()))
            .layer(Extension(image_storage.clone()))
            .layer(Extension(image_catalog))
            .into()
    }

    /// Router whose catalog points at a table that does not exist
    pub fn router_with_missing_table(&self) -> Router {
        Self::build_router(
            &self.environment,
            &self.image_storage,
            &self.dynamodb_client,
            format!("missing-table-{}", uuid::Uuid::new_v4()),
        )
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_raw_post_request(
        &self,
        route: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let mut builder = Request::builder().uri(route).method("POST");
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let request = builder.body(Body::from(body))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        Self::get(self.router.clone(), route).await
    }

    pub async fn get(router: Router, route: &str) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = router.oneshot(request).await?;
        Ok(response)
    }
}
