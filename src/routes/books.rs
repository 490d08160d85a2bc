//! Books CRUD routes and the assembled application router.

use crate::handlers::books::{create, delete as delete_handler, list, read, update};
use crate::routes::common_routes_with_ready;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::cors::CorsLayer;

/// Upper bound on request body size; `ApiJson` reports overflow as 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn books_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list).post(create))
        .route("/books/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}

/// Books routes plus health/ready/version, with CORS and a body limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(books_routes(state))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
}
