//! MovieStore — the in-memory movie collection and its operations.
//!
//! The collection lives only for the process lifetime: it is seeded once at
//! startup and never written back anywhere. A single `RwLock` guards the
//! record vector, so each mutating operation holds the write lock for its
//! whole critical section and no torn write can occur under the
//! multi-threaded runtime. Order is insertion order; updates never reorder.

use crate::models::movie::{Movie, MoviePatch, NewMovie};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie `{0}` not found")]
    MovieNotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Cloneable handle to the shared in-memory collection.
#[derive(Clone, Default)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MovieStore {
    /// Create a store seeded with an initial set of records.
    pub fn new(seed: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(seed)),
        }
    }

    /// Full collection in insertion order.
    pub async fn list(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    /// Look a record up by id. Ids are unique, so first match wins.
    ///
    /// A path segment that does not even parse as a UUID cannot name a stored
    /// record and is reported the same way as an absent id.
    pub async fn get(&self, id: &str) -> StoreResult<Movie> {
        let id = parse_id(id)?;
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or_else(|| StoreError::MovieNotFound(id.to_string()))
    }

    /// All records whose genre set contains a case-insensitive exact match
    /// for `genre`. May be empty.
    pub async fn by_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .filter(|movie| movie.genre.iter().any(|g| g.matches(genre)))
            .cloned()
            .collect()
    }

    /// Assign a fresh id to a validated candidate and append it.
    pub async fn create(&self, new: NewMovie) -> Movie {
        let movie = Movie::create(new);
        debug!("created movie {} ({})", movie.id, movie.title);
        self.movies.write().await.push(movie.clone());
        movie
    }

    /// Shallow-merge a validated patch over the record with the given id.
    pub async fn update(&self, id: &str, patch: MoviePatch) -> StoreResult<Movie> {
        let id = parse_id(id)?;
        let mut movies = self.movies.write().await;
        let movie = movies
            .iter_mut()
            .find(|movie| movie.id == id)
            .ok_or_else(|| StoreError::MovieNotFound(id.to_string()))?;
        movie.apply(patch);
        debug!("updated movie {}", id);
        Ok(movie.clone())
    }

    /// Remove the record with the given id.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;
        let mut movies = self.movies.write().await;
        let index = movies
            .iter()
            .position(|movie| movie.id == id)
            .ok_or_else(|| StoreError::MovieNotFound(id.to_string()))?;
        movies.remove(index);
        debug!("deleted movie {}", id);
        Ok(())
    }
}

fn parse_id(id: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| StoreError::MovieNotFound(id.to_string()))
}
