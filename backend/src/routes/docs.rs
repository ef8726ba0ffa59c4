use aide::{
    axum::ApiRouter,
    openapi::{Info, OpenApi},
    scalar::Scalar,
};
use axum::http::StatusCode;
use axum::{response::IntoResponse, routing::get, Extension, Json};

use crate::types::Environment;

const DOCS_TITLE: &str = "Image Catalog API";

/// Empty OpenAPI document carrying the service metadata; routes are added by `finish_api`
#[must_use]
pub fn openapi() -> OpenApi {
    OpenApi {
        info: Info {
            title: DOCS_TITLE.to_string(),
            description: Some(
                "Presigned uploads to S3 and label search over the DynamoDB image catalog"
                    .to_string(),
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Info::default()
        },
        ..OpenApi::default()
    }
}

/// Routes for the Scalar UI at `/docs` and the schema at `/openapi.json`
pub fn handler() -> ApiRouter {
    let scalar = Scalar::new("/openapi.json").with_title(DOCS_TITLE);

    ApiRouter::new()
        .route("/docs", scalar.axum_route())
        .route("/openapi.json", get(openapi_schema))
}

/// Serves the generated schema outside production only
#[allow(clippy::unused_async)]
async fn openapi_schema(
    Extension(environment): Extension<Environment>,
    Extension(openapi): Extension<OpenApi>,
) -> impl IntoResponse {
    if !environment.show_api_docs() {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(openapi).into_response()
}
