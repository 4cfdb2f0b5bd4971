//! The movie record and its closed genre set.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single movie in the catalog.
///
/// Records enter the collection through [`Movie::create`], which assigns the
/// server-side id; the id never changes afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Movie {
    /// Unique identifier, generated server-side on create.
    pub id: Uuid,

    /// Display title.
    pub title: String,

    /// Release year (1900–2022).
    pub year: i64,

    /// Director credit.
    pub director: String,

    /// Runtime in minutes.
    pub duration: i64,

    /// Viewer rating on a 0–10 scale.
    pub rate: f64,

    /// URL of the poster image.
    pub poster: String,

    /// Genres this movie belongs to.
    pub genre: Vec<Genre>,
}

/// The closed set of recognized genres.
///
/// Wire names match the variant names except `Sci-Fi`, which keeps its
/// hyphen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Action,
    Adventure,
    Drama,
    Fantasy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
    Romance,
    Animation,
    Biography,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Drama,
        Genre::Fantasy,
        Genre::SciFi,
        Genre::Crime,
        Genre::Romance,
        Genre::Animation,
        Genre::Biography,
    ];

    /// Canonical name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::SciFi => "Sci-Fi",
            Genre::Crime => "Crime",
            Genre::Romance => "Romance",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
        }
    }

    /// Exact-match lookup used during validation.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.as_str() == name)
    }

    /// Case-insensitive comparison used by the genre filter.
    pub fn matches(self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

/// A validated candidate record: everything except the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: i64,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A validated sparse update; only present fields are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl Movie {
    /// Promote a validated candidate to a stored record with a fresh id.
    pub fn create(new: NewMovie) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            rate: new.rate,
            poster: new.poster,
            genre: new.genre,
        }
    }

    /// Shallow-merge the provided fields over this record.
    ///
    /// The merged whole is not re-validated; each present field was already
    /// checked on its own during partial validation.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }
}
