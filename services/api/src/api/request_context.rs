//! Request-scoped context and body extraction.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::Json;
use checklist_id::RequestId;
use serde::de::DeserializeOwned;
use tower_http::request_id::{self, MakeRequestId};

use crate::api::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Mints a [`RequestId`] for requests that arrive without `x-request-id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(
        &mut self,
        _request: &axum::http::Request<B>,
    ) -> Option<request_id::RequestId> {
        HeaderValue::from_str(&RequestId::new().to_string())
            .ok()
            .map(request_id::RequestId::new)
    }
}

fn request_id_from(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| RequestId::new().to_string())
}

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    /// Attach this request's id to an error.
    pub fn reject(&self, err: impl Into<ApiError>) -> ApiError {
        err.into().with_request_id(self.request_id.clone())
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            request_id: request_id_from(&parts.headers),
        })
    }
}

/// JSON body extractor whose rejections render as problem details.
///
/// Malformed JSON, a missing or wrong content type, and missing or ill-typed
/// fields are all reported as 400 `invalid_body`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = request_id_from(req.headers());
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(request_id = %request_id, error = %rejection, "Rejected body");
                let err = ApiError::bad_request("invalid_body", rejection.body_text());
                Err(err.with_request_id(request_id))
            }
        }
    }
}

/// Path parameter extractor whose rejections render as problem details.
///
/// Segments that do not decode (invalid percent-encoding, non UTF-8 bytes)
/// are reported as 400 `invalid_path`.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                let request_id = request_id_from(&parts.headers);
                tracing::debug!(request_id = %request_id, error = %rejection, "Rejected path");
                let err = ApiError::bad_request("invalid_path", rejection.body_text());
                Err(err.with_request_id(request_id))
            }
        }
    }
}
