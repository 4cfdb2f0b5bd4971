//! HTTP handlers for the `/movies` resource.
//!
//! Mutating handlers validate the request body before touching the
//! collection and delegate all collection access to [`MovieStore`].

use crate::{
    errors::AppError,
    models::movie::Movie,
    services::movie_service::MovieStore,
    validation::{validate_movie, validate_partial_movie},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

/// GET `/movies` — the full collection.
pub async fn list_movies(State(store): State<MovieStore>) -> Json<Vec<Movie>> {
    Json(store.list().await)
}

/// GET `/movies/{id}` — fetch one record by id.
pub async fn get_movie(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let movie = store.get(&id).await?;
    Ok(Json(movie))
}

/// GET `/movies/genre/{genre}` — case-insensitive genre filter.
///
/// An empty list is a valid answer; only a missing genre segment is a 404.
pub async fn movies_by_genre(
    State(store): State<MovieStore>,
    Path(genre): Path<String>,
) -> Result<Json<Vec<Movie>>, AppError> {
    if genre.trim().is_empty() {
        return Err(AppError::not_found("Genre not found"));
    }
    Ok(Json(store.by_genre(&genre).await))
}

/// POST `/movies` — full-validate the body, then append with a fresh id.
pub async fn create_movie(
    State(store): State<MovieStore>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let candidate = validate_movie(&body).map_err(AppError::Validation)?;
    let movie = store.create(candidate).await;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// DELETE `/movies/{id}` — remove one record by id.
pub async fn delete_movie(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    store.delete(&id).await?;
    Ok(Json(json!({ "message": "Movie deleted" })))
}

/// PATCH `/movies/{id}` — partial-validate the body, then shallow-merge.
///
/// Validation runs before the id lookup, so a malformed body is a 400 even
/// when the id does not exist.
pub async fn update_movie(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Movie>, AppError> {
    let patch = validate_partial_movie(&body).map_err(AppError::Validation)?;
    let movie = store.update(&id, patch).await?;
    Ok(Json(movie))
}
