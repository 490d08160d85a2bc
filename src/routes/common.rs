//! Operational routes: liveness, readiness (database ping), version.

use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl StatusBody {
    fn with_database(ok: bool) -> (StatusCode, Json<Self>) {
        let (code, status, database) = if ok {
            (StatusCode::OK, "ok", "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        };
        (
            code,
            Json(StatusBody {
                status,
                database: Some(database),
            }),
        )
    }
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    let ping = store::ping(&state.pool).await;
    if let Err(e) = &ping {
        tracing::warn!(error = %e, "readiness check failed");
    }
    StatusBody::with_database(ping.is_ok())
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
