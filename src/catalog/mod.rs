//! Static in-memory catalog of movies, categories and scenes.
//!
//! The catalog is embedded at compile time, parsed once and validated eagerly:
//! every scene and category must reference a movie that exists.

mod model;

pub use model::{CatalogFile, Category, CategorySpec, Movie, Scene};

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Name of the category rendered first with larger cards.
pub const ORIGINALS_CATEGORY: &str = "Cinestream Originals";

struct CatalogData {
    movies: Vec<Movie>,
    index: HashMap<u32, usize>,
    scenes: Vec<Scene>,
    categories: Vec<Category>,
    featured: usize,
}

/// Read-only catalog. Cloning is cheap.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogData>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("movies", &self.inner.movies.len())
            .field("scenes", &self.inner.scenes.len())
            .field("categories", &self.inner.categories.len())
            .finish()
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Catalog {
    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let index: HashMap<u32, usize> = file
            .movies
            .iter()
            .enumerate()
            .map(|(pos, movie)| (movie.id, pos))
            .collect();

        let scenes: Vec<Scene> = file
            .movies
            .iter()
            .flat_map(|movie| movie.scenes.iter().cloned())
            .collect();
        if let Some(scene) = scenes.iter().find(|s| !index.contains_key(&s.movie_id)) {
            return Err(CatalogError::DanglingScene {
                scene_id: scene.id,
                movie_id: scene.movie_id,
            });
        }

        let mut categories = Vec::with_capacity(file.categories.len());
        for entry in &file.categories {
            let mut movies = Vec::with_capacity(entry.movie_ids.len());
            for movie_id in &entry.movie_ids {
                let pos = index
                    .get(movie_id)
                    .ok_or(CatalogError::UnknownCategoryMovie {
                        category_id: entry.id,
                        movie_id: *movie_id,
                    })?;
                movies.push(file.movies[*pos].clone());
            }
            categories.push(Category {
                id: entry.id,
                name: entry.name.clone(),
                movies,
            });
        }

        let featured = *index
            .get(&file.featured_id)
            .ok_or(CatalogError::UnknownFeatured(file.featured_id))?;

        tracing::debug!(
            "Catalog loaded: {} movies, {} scenes, {} categories",
            file.movies.len(),
            scenes.len(),
            categories.len()
        );

        Ok(Self {
            inner: Arc::new(CatalogData {
                movies: file.movies,
                index,
                scenes,
                categories,
                featured,
            }),
        })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.inner.movies
    }

    pub fn movie(&self, id: u32) -> Option<&Movie> {
        self.inner.index.get(&id).map(|pos| &self.inner.movies[*pos])
    }

    /// All scenes across all movies, in catalog order.
    pub fn scenes(&self) -> &[Scene] {
        &self.inner.scenes
    }

    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }

    /// First category listing the movie (used for "More Like This").
    pub fn category_containing(&self, movie_id: u32) -> Option<&Category> {
        self.inner
            .categories
            .iter()
            .find(|cat| cat.movies.iter().any(|m| m.id == movie_id))
    }

    /// Hero banner title.
    pub fn featured(&self) -> &Movie {
        &self.inner.movies[self.inner.featured]
    }

    /// Categories split into (originals, everything else), each in catalog order.
    pub fn rows(&self) -> (Vec<&Category>, Vec<&Category>) {
        self.inner
            .categories
            .iter()
            .partition(|cat| cat.name == ORIGINALS_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, scenes: Vec<Scene>) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            description: String::new(),
            release_year: 2020,
            genre: vec!["Drama".into()],
            rating: "PG".into(),
            duration: "1h 30m".into(),
            thumbnail_url: String::new(),
            backdrop_url: String::new(),
            trailer_url: None,
            is_original: false,
            scenes,
        }
    }

    fn scene(id: u32, movie_id: u32) -> Scene {
        Scene {
            id,
            movie_id,
            timestamp: "00:10:00".into(),
            description: String::new(),
            screenshot_url: String::new(),
        }
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin().expect("builtin catalog should validate");
        assert!(!catalog.movies().is_empty());
        assert!(!catalog.scenes().is_empty());
        for scene in catalog.scenes() {
            assert!(catalog.movie(scene.movie_id).is_some());
            assert!(crate::playback::parse_timestamp(&scene.timestamp).is_ok());
        }
        let (originals, rest) = catalog.rows();
        assert_eq!(originals.len(), 1);
        assert!(!rest.is_empty());
    }

    #[test]
    fn rejects_scene_with_unknown_movie() {
        let file = CatalogFile {
            featured_id: 1,
            movies: vec![movie(1, vec![scene(10, 1), scene(11, 99)])],
            categories: vec![],
        };
        assert_eq!(
            Catalog::from_file(file).unwrap_err(),
            CatalogError::DanglingScene {
                scene_id: 11,
                movie_id: 99
            }
        );
    }

    #[test]
    fn rejects_unknown_category_movie_and_featured() {
        let file = CatalogFile {
            featured_id: 1,
            movies: vec![movie(1, vec![])],
            categories: vec![CategorySpec {
                id: 5,
                name: "Trending".into(),
                movie_ids: vec![1, 2],
            }],
        };
        assert!(matches!(
            Catalog::from_file(file),
            Err(CatalogError::UnknownCategoryMovie {
                category_id: 5,
                movie_id: 2
            })
        ));

        let file = CatalogFile {
            featured_id: 7,
            movies: vec![movie(1, vec![])],
            categories: vec![],
        };
        assert_eq!(
            Catalog::from_file(file).unwrap_err(),
            CatalogError::UnknownFeatured(7)
        );
    }

    #[test]
    fn category_containing_returns_first_match() {
        let file = CatalogFile {
            featured_id: 2,
            movies: vec![movie(1, vec![]), movie(2, vec![])],
            categories: vec![
                CategorySpec {
                    id: 1,
                    name: "A".into(),
                    movie_ids: vec![1],
                },
                CategorySpec {
                    id: 2,
                    name: "B".into(),
                    movie_ids: vec![2, 1],
                },
            ],
        };
        let catalog = Catalog::from_file(file).unwrap();
        assert_eq!(catalog.category_containing(1).map(|c| c.id), Some(1));
        assert_eq!(catalog.category_containing(2).map(|c| c.id), Some(2));
        assert!(catalog.category_containing(3).is_none());
        assert_eq!(catalog.featured().id, 2);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
