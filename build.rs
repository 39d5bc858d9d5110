//! Build script to inject version and git SHA at compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - CINESTREAM_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - CINESTREAM_GIT_SHA: Git commit SHA (defaults to git rev-parse or "unknown")
//!
//! Also refuses to build when `data/catalog.json` has a scene, category or
//! featured entry pointing at a movie that does not exist.

use std::process::Command;

#[path = "build/catalog_check.rs"]
mod catalog_check;

const CATALOG_PATH: &str = "data/catalog.json";

fn main() {
    let version = std::env::var("CINESTREAM_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=CINESTREAM_VERSION={}", version);

    let git_sha = std::env::var("CINESTREAM_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect()))
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=CINESTREAM_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=CINESTREAM_VERSION");
    println!("cargo:rerun-if-env-changed=CINESTREAM_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    check_catalog();
}

/// Fail the build on a catalog with dangling references instead of shipping
/// an app that can only render its error page.
fn check_catalog() {
    println!("cargo:rerun-if-changed={}", CATALOG_PATH);
    let json = std::fs::read_to_string(CATALOG_PATH)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", CATALOG_PATH, e));
    match catalog_check::check(&json) {
        Ok(summary) => {
            println!("cargo:rustc-env=CINESTREAM_CATALOG_MOVIES={}", summary.movies);
            println!("cargo:rustc-env=CINESTREAM_CATALOG_SCENES={}", summary.scenes);
        }
        Err(e) => panic!("{} failed validation: {}", CATALOG_PATH, e),
    }
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
