//! Health & readiness handlers.
//!
//! - GET /healthz -> simple liveness ("ok")
//! - GET /readyz  -> readiness that confirms the collection lock is acquirable

use crate::services::movie_service::MovieStore;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// `GET /healthz`
///
/// Very small liveness probe — always returns 200 OK with a plain JSON body.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

/// `GET /readyz`
///
/// Takes a read lock on the collection and reports the record count. With no
/// external dependencies this is the only readiness signal the service has.
pub async fn readyz(State(store): State<MovieStore>) -> impl IntoResponse {
    let movies = store.len().await;
    (
        StatusCode::OK,
        Json(ReadyResponse {
            status: "ok".into(),
            movies,
        }),
    )
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    movies: usize,
}
