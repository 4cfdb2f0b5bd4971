//! Defines routes for the movie catalog API.
//!
//! ## Structure
//! - **Collection endpoints**
//!   - `GET    /movies` — list all records
//!   - `POST   /movies` — create a record (full validation)
//!
//! - **Record endpoints**
//!   - `GET    /movies/{id}` — fetch one record
//!   - `DELETE /movies/{id}` — delete one record
//!   - `PATCH  /movies/{id}` — partial update (partial validation)
//!
//! - **Filter endpoint**
//!   - `GET    /movies/genre/{genre}` — case-insensitive genre filter
//!
//! Every route sits behind the origin guard: requests that declare an
//! `Origin` outside the configured allow-list are rejected with 403 before
//! any handler runs. Requests without an `Origin` header (same-origin or
//! non-browser clients) always pass.

use crate::{
    errors::AppError,
    handlers::{
        health_handlers::{healthz, readyz},
        movie_handlers::{
            create_movie, delete_movie, get_movie, list_movies, movies_by_genre, update_movie,
        },
    },
    services::movie_service::MovieStore,
};
use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, header, request::Parts},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the router for the whole HTTP surface.
///
/// The router carries shared state ([`MovieStore`]) to all handlers. The
/// `CorsLayer` answers preflight and emits the CORS response headers for
/// allow-listed origins; the outermost origin guard turns disallowed origins
/// away entirely.
pub fn routes(allowed_origins: Vec<String>) -> Router<MovieStore> {
    let origins: Arc<[String]> = allowed_origins.into();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate({
            let origins = origins.clone();
            move |origin: &HeaderValue, _request_parts: &Parts| {
                origin
                    .to_str()
                    .is_ok_and(|origin| origins.iter().any(|allowed| allowed == origin))
            }
        }))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Collection and record routes
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).delete(delete_movie).patch(update_movie),
        )
        .route("/movies/genre/{genre}", get(movies_by_genre))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            let origins = origins.clone();
            async move { enforce_origin(&origins, req, next).await }
        }))
}

/// Reject requests whose declared origin is not on the allow-list.
async fn enforce_origin(origins: &[String], req: Request, next: Next) -> Response {
    match req.headers().get(header::ORIGIN) {
        None => next.run(req).await,
        Some(origin) => {
            let allowed = origin
                .to_str()
                .is_ok_and(|origin| origins.iter().any(|a| a == origin));
            if allowed {
                next.run(req).await
            } else {
                AppError::forbidden("Origin not allowed").into_response()
            }
        }
    }
}
