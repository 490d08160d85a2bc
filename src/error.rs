//! Typed errors and HTTP mapping.

use crate::response::{ErrorEnvelope, MSG_PAYLOAD_TOO_LARGE, MSG_SERVER_ERROR};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{}", MSG_PAYLOAD_TOO_LARGE)]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Storage details go to the log only.
        let message = match &self {
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                MSG_SERVER_ERROR.to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}
