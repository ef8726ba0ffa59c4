//! Custom extractors for request parsing

use std::collections::HashSet;

use aide::operation::OperationInput;
use aide::OperationOutput;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use schemars::JsonSchema;
use serde::de::{value::MapDeserializer, Deserialize};

use crate::types::error::AppError;

/// JSON extractor that reports malformed payloads through the API error envelope
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned + JsonSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| match err {
                JsonRejection::MissingJsonContentType(_) => AppError::bad_request(
                    "invalid_content_type",
                    "Missing Content-Type: application/json header",
                ),
                _ => AppError::bad_request("invalid_json", "Invalid JSON payload"),
            })?;

        Ok(Self(payload))
    }
}

impl<T> OperationInput for ApiJson<T>
where
    T: JsonSchema,
{
    fn operation_input(ctx: &mut aide::generate::GenContext, operation: &mut aide::openapi::Operation) {
        // Same wire format as Json<T>
        Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AppError::inferred_responses(ctx, operation)
    }
}

/// Query-string extractor that keeps the first value of a repeated parameter
/// and reports malformed queries through the API error envelope.
///
/// Values are handed to `T` as strings, so its fields must deserialize from a
/// string (`String`, or `String` with `#[serde(default)]` for optional ones).
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: serde::de::DeserializeOwned + JsonSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("invalid_query", "Invalid query string"))?;

        let mut seen = HashSet::new();
        let first_values = pairs
            .into_iter()
            .filter(|(key, _)| seen.insert(key.clone()));

        let payload = T::deserialize(MapDeserializer::<_, serde::de::value::Error>::new(
            first_values,
        ))
        .map_err(|err| {
            tracing::debug!("Query parameters rejected: {err}");
            AppError::bad_request("invalid_query", "Invalid query string")
        })?;

        Ok(Self(payload))
    }
}

impl<T> OperationInput for ApiQuery<T>
where
    T: JsonSchema,
{
    fn operation_input(ctx: &mut aide::generate::GenContext, operation: &mut aide::openapi::Operation) {
        // Same wire format as Query<T>
        Query::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AppError::inferred_responses(ctx, operation)
    }
}
