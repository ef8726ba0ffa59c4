//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};

/// Lifetime of a presigned upload (PUT) URL
const UPLOAD_URL_EXPIRY_SECS: u64 = 60;

/// Lifetime of a presigned view (GET) URL
const VIEW_URL_EXPIRY_SECS: u64 = 60 * 60;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development {
        /// Optional override for the upload URL expiry in seconds
        upload_expiry_override: Option<u64>,
        /// Optional override for the view URL expiry in seconds
        view_expiry_override: Option<u64>,
    },
}

fn parse_secs(var: &str) -> Option<u64> {
    env::var(var).ok().and_then(|val| val.parse::<u64>().ok())
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development {
                upload_expiry_override: parse_secs("UPLOAD_URL_EXPIRY_SECS"),
                view_expiry_override: parse_secs("VIEW_URL_EXPIRY_SECS"),
            },
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the S3 bucket name holding the images
    ///
    /// # Panics
    ///
    /// Panics if the `AWS_S3_BUCKET_NAME` environment variable is not set outside development
    #[must_use]
    pub fn s3_bucket(&self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("AWS_S3_BUCKET_NAME")
                .expect("AWS_S3_BUCKET_NAME environment variable is not set"),
            Self::Development { .. } => {
                env::var("AWS_S3_BUCKET_NAME").unwrap_or_else(|_| "image-catalog".to_string())
            }
        }
    }

    /// Returns the `DynamoDB` table name holding catalog entries
    ///
    /// # Panics
    ///
    /// Panics if the `DYNAMODB_TABLE_NAME` environment variable is not set outside development
    #[must_use]
    pub fn catalog_table_name(&self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("DYNAMODB_TABLE_NAME")
                .expect("DYNAMODB_TABLE_NAME environment variable is not set"),
            Self::Development { .. } => {
                env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "image-catalog".to_string())
            }
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development { .. } | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development { .. } => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // Override "force path style" to true for compatibility with LocalStack
        // https://github.com/awslabs/aws-sdk-rust/discussions/874
        if matches!(self, Self::Development { .. }) {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }

    /// Presigned upload URL expiry time in seconds
    #[must_use]
    pub fn upload_url_expiry_secs(&self) -> u64 {
        match self {
            Self::Production | Self::Staging => UPLOAD_URL_EXPIRY_SECS,
            Self::Development {
                upload_expiry_override,
                ..
            } => upload_expiry_override.unwrap_or(UPLOAD_URL_EXPIRY_SECS),
        }
    }

    /// Presigned view URL expiry time in seconds
    #[must_use]
    pub fn view_url_expiry_secs(&self) -> u64 {
        match self {
            Self::Production | Self::Staging => VIEW_URL_EXPIRY_SECS,
            Self::Development {
                view_expiry_override,
                ..
            } => view_expiry_override.unwrap_or(VIEW_URL_EXPIRY_SECS),
        }
    }
}
