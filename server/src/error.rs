//! HTTP error mapping for the todo API.
//!
//! # Design
//! Every failure leaves the server as `{"detail": "..."}` with a fixed
//! status. Body and path failures (bad JSON, missing fields, wrong types,
//! non-integer ids) are funnelled through `AppJson` / `AppPath` so they
//! surface as 422 with the same body shape instead of axum's plain-text
//! defaults. A syntactically valid id that can never be a key is a 404.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, FromRequest, FromRequestParts, Request},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::store::StoreError;

pub const NOT_FOUND_DETAIL: &str = "Todo not found";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", NOT_FOUND_DETAIL)]
    NotFound,

    /// The request failed schema validation before reaching the store.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// JSON request body with failures mapped to `ApiError`.
///
/// Unlike `axum::Json`, a request without a `Content-Type` header is still
/// decoded as JSON. An explicit non-JSON content type is rejected.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            if !is_json_content_type(content_type) {
                return Err(ApiError::Validation(
                    "Expected request with `Content-Type: application/json`".to_string(),
                ));
            }
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        serde_json::from_slice(&bytes)
            .map(AppJson)
            .map_err(|err| ApiError::Validation(format!("invalid JSON body: {err}")))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

/// Maps a path id onto a store key. Negative ids are valid integers that
/// no record can carry.
pub fn store_key(id: i64) -> Result<u64, ApiError> {
    u64::try_from(id).map_err(|_| ApiError::NotFound)
}

/// `axum::extract::Path` with rejections mapped to `ApiError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
