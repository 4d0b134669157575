//! Custom Axum extractors
//!
//! Both reject with [`ApiError`] so malformed input always gets the JSON
//! error body instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::models::{RecordId, ValidationError};
use super::error::ApiError;

/// Extract and validate a numeric record id from path
pub struct ValidId(pub RecordId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self(RecordId::parse(&raw)?))
    }
}

/// JSON request body.
///
/// Parsed regardless of the Content-Type header; any decode failure is a 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: e.body_text(),
            })
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: e.to_string(),
            })
        })?;

        Ok(Self(value))
    }
}
