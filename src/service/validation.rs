//! Request validation before any storage access.

use crate::error::AppError;
use crate::model::BookInput;
use crate::response::{MSG_FIELDS_REQUIRED, MSG_INVALID_ID};

pub struct RequestValidator;

impl RequestValidator {
    /// Create requires title, author, publish_date and publisher, each non-empty.
    pub fn validate_create(body: &BookInput) -> Result<(), AppError> {
        if !body.is_complete() {
            return Err(AppError::BadRequest(MSG_FIELDS_REQUIRED.into()));
        }
        Ok(())
    }

    pub fn parse_id(id_str: &str) -> Result<i32, AppError> {
        id_str
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(MSG_INVALID_ID.into()))
    }
}
