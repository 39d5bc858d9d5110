//! Sanity checks on the shipped `data/catalog.json`.

use std::collections::HashSet;

use cinestream::catalog::{Catalog, ORIGINALS_CATEGORY};
use cinestream::playback::parse_timestamp;

fn catalog() -> Catalog {
    Catalog::builtin().expect("data/catalog.json must load")
}

#[test]
fn ids_are_unique() {
    let catalog = catalog();

    let movie_ids: HashSet<u32> = catalog.movies().iter().map(|m| m.id).collect();
    assert_eq!(movie_ids.len(), catalog.movies().len(), "duplicate movie id");

    let scene_ids: HashSet<u32> = catalog.scenes().iter().map(|s| s.id).collect();
    assert_eq!(scene_ids.len(), catalog.scenes().len(), "duplicate scene id");
}

#[test]
fn every_scene_is_playable() {
    let catalog = catalog();
    assert!(!catalog.scenes().is_empty(), "scene finder needs scenes");

    for scene in catalog.scenes() {
        let movie = catalog
            .movie(scene.movie_id)
            .unwrap_or_else(|| panic!("scene {} points at a missing movie", scene.id));
        assert!(movie.scenes.contains(scene));

        let secs = parse_timestamp(&scene.timestamp)
            .unwrap_or_else(|e| panic!("scene {}: {}", scene.id, e));
        assert!(secs < 7200, "scene {} starts past the assumed runtime", scene.id);
    }
}

#[test]
fn originals_row_comes_from_original_titles() {
    let catalog = catalog();
    let (originals, rest) = catalog.rows();

    assert_eq!(originals.len(), 1);
    assert_eq!(originals[0].name, ORIGINALS_CATEGORY);
    assert!(originals[0].movies.iter().all(|m| m.is_original));
    assert!(!rest.is_empty());
    assert!(rest.iter().all(|c| c.name != ORIGINALS_CATEGORY));
}

#[test]
fn featured_title_has_artwork() {
    let catalog = catalog();
    let featured = catalog.featured();

    assert!(!featured.backdrop_url.is_empty());
    assert!(!featured.thumbnail_url.is_empty());
    assert!(catalog.category_containing(featured.id).is_some());
}
