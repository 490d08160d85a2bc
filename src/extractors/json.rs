//! JSON body extractor that maps axum's rejection into `AppError`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a malformed or mistyped body yields a 400 envelope
/// and a body over the route's `DefaultBodyLimit` a 413 envelope.
#[derive(Clone, Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    return Err(AppError::PayloadTooLarge);
                }
                Err(AppError::BadRequest(format!("invalid request body: {}", rejection.body_text())))
            }
        }
    }
}
