//! Catalog records. Field names follow the camelCase JSON shape of the data file.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub release_year: u16,
    pub genre: Vec<String>,
    /// Maturity rating label, e.g. "TV-MA"
    pub rating: String,
    /// Human duration label, e.g. "2h 15m"
    pub duration: String,
    pub thumbnail_url: String,
    pub backdrop_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub is_original: bool,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl Movie {
    pub fn has_scenes(&self) -> bool {
        !self.scenes.is_empty()
    }

    pub fn genres_label(&self) -> String {
        self.genre.join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: u32,
    pub movie_id: u32,
    /// `HH:MM:SS`
    pub timestamp: String,
    pub description: String,
    pub screenshot_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub movies: Vec<Movie>,
}

/// On-disk category: movies are referenced by id and resolved at load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpec {
    pub id: u32,
    pub name: String,
    pub movie_ids: Vec<u32>,
}

/// Shape of `data/catalog.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub featured_id: u32,
    pub movies: Vec<Movie>,
    pub categories: Vec<CategorySpec>,
}
