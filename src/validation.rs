//! Request-body validation for movie records.
//!
//! Two pure entry points mirror the write paths: [`validate_movie`] checks a
//! complete candidate record (POST) and [`validate_partial_movie`] checks a
//! sparse patch (PATCH). Both share the same per-field checkers, run every
//! one of them, and report all violations together instead of stopping at
//! the first.

use crate::models::movie::{Genre, MoviePatch, NewMovie};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

pub const YEAR_MIN: i64 = 1900;
pub const YEAR_MAX: i64 = 2022;
pub const RATE_MIN: f64 = 0.0;
pub const RATE_MAX: f64 = 10.0;
pub const DEFAULT_RATE: f64 = 3.0;

/// A single violated constraint, keyed by the offending field.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a complete candidate record.
///
/// All fields are required except `rate`, which defaults to 3 when absent.
pub fn validate_movie(input: &Value) -> Result<NewMovie, Vec<FieldError>> {
    let obj = as_object(input)?;
    let mut errors = Vec::new();

    let title = required(obj, "title", check_string, &mut errors);
    let year = required(obj, "year", check_year, &mut errors);
    let director = required(obj, "director", check_string, &mut errors);
    let duration = required(obj, "duration", check_duration, &mut errors);
    let poster = required(obj, "poster", check_poster, &mut errors);
    let genre = required(obj, "genre", check_genre, &mut errors);
    let rate = match obj.get("rate") {
        Some(value) => collect(check_rate("rate", value), &mut errors),
        None => Some(DEFAULT_RATE),
    };

    match (title, year, director, duration, rate, poster, genre) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rate),
            Some(poster),
            Some(genre),
        ) if errors.is_empty() => Ok(NewMovie {
            title,
            year,
            director,
            duration,
            rate,
            poster,
            genre,
        }),
        _ => Err(errors),
    }
}

/// Validate a sparse patch.
///
/// Absent fields stay unset; present fields must satisfy the same
/// constraints as in a full record.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, Vec<FieldError>> {
    let obj = as_object(input)?;
    let mut errors = Vec::new();

    let patch = MoviePatch {
        title: optional(obj, "title", check_string, &mut errors),
        year: optional(obj, "year", check_year, &mut errors),
        director: optional(obj, "director", check_string, &mut errors),
        duration: optional(obj, "duration", check_duration, &mut errors),
        rate: optional(obj, "rate", check_rate, &mut errors),
        poster: optional(obj, "poster", check_poster, &mut errors),
        genre: optional(obj, "genre", check_genre, &mut errors),
    };

    if errors.is_empty() { Ok(patch) } else { Err(errors) }
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, Vec<FieldError>> {
    input
        .as_object()
        .ok_or_else(|| vec![FieldError::new("body", "request body must be a JSON object")])
}

fn required<T>(
    obj: &Map<String, Value>,
    field: &str,
    check: fn(&str, &Value) -> Result<T, FieldError>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match obj.get(field) {
        Some(value) => collect(check(field, value), errors),
        None => {
            errors.push(FieldError::new(field, format!("{field} is required")));
            None
        }
    }
}

fn optional<T>(
    obj: &Map<String, Value>,
    field: &str,
    check: fn(&str, &Value) -> Result<T, FieldError>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    obj.get(field).and_then(|value| collect(check(field, value), errors))
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn check_string(field: &str, value: &Value) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FieldError::new(field, format!("{field} must be a string")))
}

fn check_year(field: &str, value: &Value) -> Result<i64, FieldError> {
    let year = value
        .as_i64()
        .ok_or_else(|| FieldError::new(field, "year must be an integer"))?;
    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Ok(year)
    } else {
        Err(FieldError::new(
            field,
            format!("year must be between {YEAR_MIN} and {YEAR_MAX}"),
        ))
    }
}

fn check_duration(field: &str, value: &Value) -> Result<i64, FieldError> {
    let duration = value
        .as_i64()
        .ok_or_else(|| FieldError::new(field, "duration must be an integer"))?;
    if duration > 0 {
        Ok(duration)
    } else {
        Err(FieldError::new(field, "duration must be a positive integer"))
    }
}

fn check_rate(field: &str, value: &Value) -> Result<f64, FieldError> {
    let rate = value
        .as_f64()
        .ok_or_else(|| FieldError::new(field, "rate must be a number"))?;
    if (RATE_MIN..=RATE_MAX).contains(&rate) {
        Ok(rate)
    } else {
        Err(FieldError::new(
            field,
            format!("rate must be between {RATE_MIN} and {RATE_MAX}"),
        ))
    }
}

fn check_poster(field: &str, value: &Value) -> Result<String, FieldError> {
    let poster = value
        .as_str()
        .ok_or_else(|| FieldError::new(field, "poster must be a string"))?;
    Url::parse(poster).map_err(|_| FieldError::new(field, "poster must be a valid URL"))?;
    Ok(poster.to_string())
}

fn check_genre(field: &str, value: &Value) -> Result<Vec<Genre>, FieldError> {
    let entries = value
        .as_array()
        .ok_or_else(|| FieldError::new(field, "genre must be an array of genre names"))?;
    let mut genres = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry
            .as_str()
            .ok_or_else(|| FieldError::new(field, "genre entries must be strings"))?;
        let genre = Genre::from_name(name)
            .ok_or_else(|| FieldError::new(field, format!("`{name}` is not a recognized genre")))?;
        genres.push(genre);
    }
    Ok(genres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "title": "X",
            "year": 2020,
            "director": "D",
            "duration": 100,
            "poster": "https://a.com/p.jpg",
            "genre": ["Drama"]
        })
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn accepts_complete_payload_and_defaults_rate() {
        let movie = validate_movie(&full_payload()).unwrap();
        assert_eq!(movie.title, "X");
        assert_eq!(movie.year, 2020);
        assert_eq!(movie.rate, DEFAULT_RATE);
        assert_eq!(movie.genre, vec![Genre::Drama]);
    }

    #[test]
    fn keeps_explicit_rate() {
        let mut payload = full_payload();
        payload["rate"] = json!(8.5);
        let movie = validate_movie(&payload).unwrap();
        assert_eq!(movie.rate, 8.5);
    }

    #[test]
    fn missing_title_is_reported() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("title");
        let errors = validate_movie(&payload).unwrap_err();
        assert!(fields(&errors).contains(&"title"), "errors: {errors:?}");
    }

    #[test]
    fn all_violations_are_reported_together() {
        let payload = json!({
            "year": 1800,
            "director": "D",
            "duration": 100,
            "poster": "https://a.com/p.jpg",
            "genre": ["Polka"]
        });
        let errors = validate_movie(&payload).unwrap_err();
        let fields = fields(&errors);
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"year"));
        assert!(fields.contains(&"genre"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_non_integer_year() {
        let mut payload = full_payload();
        payload["year"] = json!("2000");
        let errors = validate_movie(&payload).unwrap_err();
        assert_eq!(errors[0].field, "year");
        assert_eq!(errors[0].message, "year must be an integer");
    }

    #[test]
    fn rejects_year_out_of_range() {
        let mut payload = full_payload();
        payload["year"] = json!(2023);
        let errors = validate_movie(&payload).unwrap_err();
        assert_eq!(errors[0].field, "year");
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut payload = full_payload();
        payload["duration"] = json!(0);
        let errors = validate_movie(&payload).unwrap_err();
        assert_eq!(errors[0].field, "duration");
    }

    #[test]
    fn rejects_malformed_poster_url() {
        let mut payload = full_payload();
        payload["poster"] = json!("not a url");
        let errors = validate_movie(&payload).unwrap_err();
        assert_eq!(errors[0].field, "poster");
        assert_eq!(errors[0].message, "poster must be a valid URL");
    }

    #[test]
    fn rejects_unknown_genre() {
        let mut payload = full_payload();
        payload["genre"] = json!(["Drama", "Polka"]);
        let errors = validate_movie(&payload).unwrap_err();
        assert_eq!(errors[0].field, "genre");
        assert!(errors[0].message.contains("Polka"));
    }

    #[test]
    fn rejects_rate_out_of_range() {
        let mut payload = full_payload();
        payload["rate"] = json!(42);
        let errors = validate_movie(&payload).unwrap_err();
        assert_eq!(errors[0].field, "rate");
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = validate_movie(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors[0].field, "body");
    }

    #[test]
    fn partial_accepts_sparse_patch() {
        let patch = validate_partial_movie(&json!({ "year": 2001 })).unwrap();
        assert_eq!(patch.year, Some(2001));
        assert_eq!(patch.title, None);
        assert_eq!(patch.genre, None);
    }

    #[test]
    fn partial_accepts_empty_object() {
        let patch = validate_partial_movie(&json!({})).unwrap();
        assert_eq!(patch, MoviePatch::default());
    }

    #[test]
    fn partial_rejects_invalid_present_field() {
        let errors = validate_partial_movie(&json!({ "rate": 42 })).unwrap_err();
        assert_eq!(errors[0].field, "rate");
    }

    #[test]
    fn partial_rejects_null_field() {
        let errors = validate_partial_movie(&json!({ "title": null })).unwrap_err();
        assert_eq!(errors[0].field, "title");
    }
}
