//! Compile-time integrity check for `data/catalog.json`.
//!
//! Shared by `build.rs` and the `catalog_build_check` test. Works on the raw
//! JSON so the build script does not depend on the crate's own types.

use std::collections::HashSet;

use serde_json::Value;

/// Counts reported back to the build once the catalog checks out.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogSummary {
    pub movies: usize,
    pub scenes: usize,
}

fn ids<'a>(items: impl Iterator<Item = &'a Value>, field: &str) -> Vec<Option<u64>> {
    items.map(|item| item.get(field).and_then(Value::as_u64)).collect()
}

fn array<'a>(value: &'a Value, field: &str) -> Result<&'a Vec<Value>, String> {
    value
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("missing `{}` array", field))
}

/// Verify ids are unique and every reference resolves to a movie.
pub fn check(json: &str) -> Result<CatalogSummary, String> {
    let root: Value = serde_json::from_str(json).map_err(|e| format!("invalid JSON: {}", e))?;
    let movies = array(&root, "movies")?;

    let mut movie_ids = HashSet::new();
    for (pos, id) in ids(movies.iter(), "id").into_iter().enumerate() {
        let id = id.ok_or_else(|| format!("movie #{} has no numeric id", pos))?;
        if !movie_ids.insert(id) {
            return Err(format!("duplicate movie id {}", id));
        }
    }

    let mut scene_ids = HashSet::new();
    for movie in movies {
        let Some(scenes) = movie.get("scenes").and_then(Value::as_array) else {
            continue;
        };
        for scene in scenes {
            let id = scene.get("id").and_then(Value::as_u64);
            let movie_id = scene.get("movieId").and_then(Value::as_u64);
            match (id, movie_id) {
                (Some(id), _) if !scene_ids.insert(id) => {
                    return Err(format!("duplicate scene id {}", id));
                }
                (Some(id), Some(movie_id)) if !movie_ids.contains(&movie_id) => {
                    return Err(format!("scene {} points at missing movie {}", id, movie_id));
                }
                (Some(_), Some(_)) => {}
                _ => return Err("scene without numeric id/movieId".to_string()),
            }
        }
    }

    for category in array(&root, "categories")? {
        let name = category.get("name").and_then(Value::as_str).unwrap_or("?");
        for movie_id in array(category, "movieIds")? {
            match movie_id.as_u64() {
                Some(id) if movie_ids.contains(&id) => {}
                _ => return Err(format!("category {:?} lists unknown movie {}", name, movie_id)),
            }
        }
    }

    let featured = root
        .get("featuredId")
        .and_then(Value::as_u64)
        .ok_or("missing `featuredId`")?;
    if !movie_ids.contains(&featured) {
        return Err(format!("featured movie {} does not exist", featured));
    }

    Ok(CatalogSummary {
        movies: movie_ids.len(),
        scenes: scene_ids.len(),
    })
}
