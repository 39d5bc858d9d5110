//! The integrity check `build.rs` runs over `data/catalog.json`.

#[path = "../build/catalog_check.rs"]
mod catalog_check;

use catalog_check::{check, CatalogSummary};
use serde_json::json;

fn minimal() -> serde_json::Value {
    json!({
        "featuredId": 1,
        "movies": [
            { "id": 1, "scenes": [{ "id": 10, "movieId": 1 }] },
            { "id": 2, "scenes": [] }
        ],
        "categories": [{ "id": 1, "name": "Trending", "movieIds": [1, 2] }]
    })
}

#[test]
fn shipped_catalog_passes() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
    let json = std::fs::read_to_string(path).unwrap();
    let summary = check(&json).unwrap();
    assert_eq!(summary, CatalogSummary { movies: 10, scenes: 9 });
}

#[test]
fn accepts_consistent_catalog() {
    let summary = check(&minimal().to_string()).unwrap();
    assert_eq!(summary, CatalogSummary { movies: 2, scenes: 1 });
}

#[test]
fn rejects_scene_with_dangling_movie() {
    let mut catalog = minimal();
    catalog["movies"][0]["scenes"][0]["movieId"] = json!(99);

    let err = check(&catalog.to_string()).unwrap_err();
    assert!(err.contains("scene 10"), "{}", err);
    assert!(err.contains("99"), "{}", err);
}

#[test]
fn rejects_unknown_category_movie() {
    let mut catalog = minimal();
    catalog["categories"][0]["movieIds"] = json!([1, 7]);

    let err = check(&catalog.to_string()).unwrap_err();
    assert!(err.contains("Trending"), "{}", err);
}

#[test]
fn rejects_missing_featured_movie() {
    let mut catalog = minimal();
    catalog["featuredId"] = json!(3);

    assert!(check(&catalog.to_string()).unwrap_err().contains("featured"));
}

#[test]
fn rejects_duplicate_ids() {
    let mut movies = minimal();
    movies["movies"][1]["id"] = json!(1);
    assert!(check(&movies.to_string()).unwrap_err().contains("duplicate movie"));

    let mut scenes = minimal();
    scenes["movies"][1]["scenes"] = json!([{ "id": 10, "movieId": 2 }]);
    assert!(check(&scenes.to_string()).unwrap_err().contains("duplicate scene"));
}
