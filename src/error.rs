//! Error types shared by the library modules.
//!
//! The `Display` strings double as the user-facing messages shown by the UI.

use thiserror::Error;

/// Mock authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid signup information")]
    InvalidSignup,
    #[error("Could not save session: {0}")]
    Storage(#[from] StorageError),
    #[error("Sign in was cancelled")]
    Cancelled,
}

/// Scene finder failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    #[error("Please upload an image file")]
    NotAnImage,
    #[error("Could not find matching movie for this scene")]
    NoMatchingMovie,
    #[error("No scenes are available to match against")]
    NoScenes,
    #[error("Scene search was cancelled")]
    Cancelled,
}

/// Key-value storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Catalog load and validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog data is malformed: {0}")]
    Parse(String),
    #[error("scene {scene_id} references unknown movie {movie_id}")]
    DanglingScene { scene_id: u32, movie_id: u32 },
    #[error("category {category_id} references unknown movie {movie_id}")]
    UnknownCategoryMovie { category_id: u32, movie_id: u32 },
    #[error("featured movie {0} is not in the catalog")]
    UnknownFeatured(u32),
}

/// Malformed `HH:MM:SS` timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp {0:?}, expected HH:MM:SS")]
pub struct TimestampError(pub String);
