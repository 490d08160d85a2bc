//! Book handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiQuery};
use crate::model::{BookFilter, BookInput};
use crate::response::{
    success_created, success_message, success_ok, MSG_CREATED, MSG_DELETED, MSG_FOUND, MSG_NOT_FOUND,
    MSG_NO_RESULTS, MSG_UPDATED,
};
use crate::service::{BookService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

fn not_found() -> AppError {
    AppError::NotFound(MSG_NOT_FOUND.into())
}

/// GET /books?title=&author=&publisher=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<BookFilter>,
) -> Result<impl IntoResponse, AppError> {
    let rows = BookService::list(&state.pool, &filter).await?;
    let message = if rows.is_empty() { MSG_NO_RESULTS } else { MSG_FOUND };
    Ok(success_ok(message, rows))
}

/// GET /books/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let row = BookService::read(&state.pool, id).await?.ok_or_else(not_found)?;
    Ok(success_ok(MSG_FOUND, row))
}

/// POST /books
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BookInput>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_create(&body)?;
    let row = BookService::create(&state.pool, &body).await?;
    Ok(success_created(MSG_CREATED, row))
}

/// PUT /books/:id. Full replace: fields missing from the body are stored as NULL.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ApiJson(body): ApiJson<BookInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let row = BookService::update(&state.pool, id, &body).await?.ok_or_else(not_found)?;
    Ok(success_ok(MSG_UPDATED, row))
}

/// DELETE /books/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    if !BookService::delete(&state.pool, id).await? {
        return Err(not_found());
    }
    tracing::info!(id, "book deleted");
    Ok(success_message(MSG_DELETED))
}
