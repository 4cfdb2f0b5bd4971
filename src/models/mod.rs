//! Core data models for the movie catalog service.
//!
//! The catalog holds plain in-memory records; everything here serializes
//! naturally as JSON via `serde`.

pub mod movie;
