//! Matching capability behind the scene finder.

use async_trait::async_trait;
use rand::Rng;

use super::Upload;
use crate::catalog::{Catalog, Movie, Scene};
use crate::error::FinderError;

/// Confidence reported by the random stand-in
pub const RANDOM_MATCH_CONFIDENCE: f32 = 0.92;

/// A scene paired with the movie it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneMatch {
    pub scene: Scene,
    pub movie: Movie,
    /// 0.0..=1.0
    pub confidence: f32,
}

impl SceneMatch {
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Finds the scene a screenshot was taken from.
#[async_trait(?Send)]
pub trait SceneMatcher {
    async fn find_match(&self, upload: &Upload) -> Result<SceneMatch, FinderError>;
}

/// Ignores the image and picks a scene uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomSceneMatcher {
    scenes: Vec<Scene>,
    movies: Vec<Movie>,
}

impl RandomSceneMatcher {
    pub fn new(catalog: &Catalog) -> Self {
        Self::from_parts(catalog.scenes().to_vec(), catalog.movies().to_vec())
    }

    /// Match against an arbitrary scene pool; scenes are not checked against
    /// `movies` up front.
    pub fn from_parts(scenes: Vec<Scene>, movies: Vec<Movie>) -> Self {
        Self { scenes, movies }
    }

    fn pick(&self) -> Result<&Scene, FinderError> {
        if self.scenes.is_empty() {
            return Err(FinderError::NoScenes);
        }
        let idx = rand::thread_rng().gen_range(0..self.scenes.len());
        Ok(&self.scenes[idx])
    }
}

#[async_trait(?Send)]
impl SceneMatcher for RandomSceneMatcher {
    async fn find_match(&self, upload: &Upload) -> Result<SceneMatch, FinderError> {
        let scene = self.pick()?;
        let movie = self
            .movies
            .iter()
            .find(|movie| movie.id == scene.movie_id)
            .ok_or(FinderError::NoMatchingMovie)?;

        tracing::debug!(
            "Random match for {}: scene {} of {:?}",
            upload.file_name,
            scene.id,
            movie.title
        );

        Ok(SceneMatch {
            scene: scene.clone(),
            movie: movie.clone(),
            confidence: RANDOM_MATCH_CONFIDENCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn png() -> Upload {
        Upload::new("shot.png", "image/png", vec![0x89, b'P', b'N', b'G'])
    }

    #[tokio::test]
    async fn every_match_belongs_to_its_movie() {
        let catalog = Catalog::builtin().unwrap();
        let matcher = RandomSceneMatcher::new(&catalog);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let found = matcher.find_match(&png()).await.unwrap();
            assert_eq!(found.scene.movie_id, found.movie.id);
            assert_eq!(found.confidence_percent(), 92);
            seen.insert(found.scene.id);
        }
        // uniform pick over a handful of scenes should reach more than one
        assert!(seen.len() > 1);
    }

    #[tokio::test]
    async fn orphan_scene_reports_no_matching_movie() {
        let catalog = Catalog::builtin().unwrap();
        let mut orphan = catalog.scenes()[0].clone();
        orphan.movie_id = 9999;
        let matcher = RandomSceneMatcher::from_parts(vec![orphan], catalog.movies().to_vec());

        let err = matcher.find_match(&png()).await.unwrap_err();
        assert_eq!(err, FinderError::NoMatchingMovie);
        assert_eq!(err.to_string(), "Could not find matching movie for this scene");
    }

    #[tokio::test]
    async fn empty_pool_reports_no_scenes() {
        let matcher = RandomSceneMatcher::from_parts(vec![], vec![]);
        assert_eq!(
            matcher.find_match(&png()).await.unwrap_err(),
            FinderError::NoScenes
        );
    }
}
