//! The strict movie shape exposed to the rest of the system.

use serde::{Deserialize, Serialize};

/// One catalog entry, exactly as the provider describes it.
///
/// `summary` and `synopsis` may be omitted or null for a real movie,
/// and some entries arrive without a `genres` list, which decodes as
/// empty.  Every other field is required, and a payload missing one is
/// treated as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub url: String,
    pub imdb_code: String,
    pub title: String,
    pub title_english: String,
    pub title_long: String,
    pub slug: String,
    pub year: i32,
    pub rating: f64,
    pub runtime: f64,
    #[serde(default)]
    pub genres: Vec<String>,
    pub summary: Option<String>,
    pub description_full: String,
    pub synopsis: Option<String>,
    pub yt_trailer_code: String,
    pub language: String,
    pub background_image: String,
    pub background_image_original: String,
    pub small_cover_image: String,
    pub medium_cover_image: String,
    pub large_cover_image: String,
}
