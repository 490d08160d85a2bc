//! Standard response envelope: `{ error, message, data? }`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const MSG_FOUND: &str = "Data found";
pub const MSG_NO_RESULTS: &str = "No results found";
pub const MSG_NOT_FOUND: &str = "Book not found";
pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INVALID_ID: &str = "Invalid book id";
pub const MSG_CREATED: &str = "Book added successfully";
pub const MSG_UPDATED: &str = "Book updated successfully";
pub const MSG_DELETED: &str = "Book deleted successfully";
pub const MSG_PAYLOAD_TOO_LARGE: &str = "Request body too large";
pub const MSG_SERVER_ERROR: &str = "Server Error";

#[derive(Serialize)]
pub struct Envelope<T> {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Error responses never carry `data`.
#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub error: bool,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorEnvelope {
            error: true,
            message: message.into(),
        }
    }
}

pub fn success<T: Serialize>(status: StatusCode, message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        status,
        Json(Envelope {
            error: false,
            message: message.to_string(),
            data: Some(data),
        }),
    )
}

pub fn success_ok<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    success(StatusCode::OK, message, data)
}

pub fn success_created<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    success(StatusCode::CREATED, message, data)
}

/// Success without a payload (DELETE).
pub fn success_message(message: &str) -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            error: false,
            message: message.to_string(),
            data: None,
        }),
    )
}
