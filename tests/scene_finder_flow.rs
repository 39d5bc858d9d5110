//! Scene finder pipeline against the shipped catalog, on paused time.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use cinestream::catalog::Catalog;
use cinestream::config::FinderConfig;
use cinestream::error::FinderError;
use cinestream::finder::{
    FinderStatus, RandomSceneMatcher, SceneFinder, SceneMatch, SceneMatcher, Upload,
};
use cinestream::timer::millis;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Counts calls before delegating to the random matcher.
struct CountingMatcher {
    inner: RandomSceneMatcher,
    calls: Rc<Cell<usize>>,
}

#[async_trait(?Send)]
impl SceneMatcher for CountingMatcher {
    async fn find_match(&self, upload: &Upload) -> Result<SceneMatch, FinderError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.find_match(upload).await
    }
}

fn finder() -> (SceneFinder<CountingMatcher>, Rc<Cell<usize>>, Catalog) {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let calls = Rc::new(Cell::new(0));
    let matcher = CountingMatcher {
        inner: RandomSceneMatcher::new(&catalog),
        calls: calls.clone(),
    };
    (SceneFinder::new(matcher, FinderConfig::default()), calls, catalog)
}

fn screenshot() -> Upload {
    Upload::from_file_name("frame.png", vec![0x89, b'P', b'N', b'G'])
}

#[tokio::test(start_paused = true)]
async fn non_image_is_rejected_immediately() {
    let (finder, calls, _) = finder();
    let token = CancellationToken::new();
    let mut seen = Vec::new();
    let start = Instant::now();

    let err = finder
        .upload_screenshot(&Upload::from_file_name("notes.txt", b"hi".to_vec()), &token, |s| {
            seen.push(s.clone())
        })
        .await
        .unwrap_err();

    assert_eq!(err, FinderError::NotAnImage);
    assert_eq!(start.elapsed(), millis(0));
    assert_eq!(calls.get(), 0);

    let last = seen.last().expect("status reported");
    assert!(!last.is_busy());
    assert_eq!(last.error.as_deref(), Some("Please upload an image file"));
    assert!(last.matched.is_none());
}

#[tokio::test(start_paused = true)]
async fn image_matches_after_upload_and_processing_delays() {
    let (finder, calls, catalog) = finder();
    let token = CancellationToken::new();
    let mut seen: Vec<(u128, FinderStatus)> = Vec::new();
    let start = Instant::now();

    let found = finder
        .upload_screenshot(&screenshot(), &token, |s| {
            seen.push((start.elapsed().as_millis(), s.clone()))
        })
        .await
        .unwrap();

    assert_eq!(start.elapsed(), millis(3000));
    assert_eq!(calls.get(), 1);
    assert_eq!(found.scene.movie_id, found.movie.id);
    assert_eq!(catalog.movie(found.movie.id), Some(&found.movie));
    assert!(catalog.scenes().contains(&found.scene));
    assert_eq!(found.confidence_percent(), 92);

    let phases: Vec<(u128, bool, bool, bool)> = seen
        .iter()
        .map(|(at, s)| (*at, s.is_uploading, s.is_processing, s.matched.is_some()))
        .collect();
    assert_eq!(
        phases,
        vec![
            (0, true, false, false),
            (1000, false, true, false),
            (3000, false, false, true),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn reset_after_match_returns_to_idle() {
    let (finder, _, _) = finder();
    let token = CancellationToken::new();
    let mut status = FinderStatus::default();

    finder
        .upload_screenshot(&screenshot(), &token, |s| status = s.clone())
        .await
        .unwrap();
    assert!(status.matched.is_some());

    status.reset();
    assert_eq!(status, FinderStatus::default());
}

#[tokio::test(start_paused = true)]
async fn cancelling_mid_processing_stops_reporting() {
    let (finder, calls, _) = finder();
    let token = CancellationToken::new();
    let shot = screenshot();
    let mut seen = Vec::new();

    let (result, _) = tokio::join!(
        finder.upload_screenshot(&shot, &token, |s| seen.push(s.clone())),
        async {
            tokio::time::sleep(millis(1500)).await;
            token.cancel();
        }
    );

    assert_eq!(result.unwrap_err(), FinderError::Cancelled);
    assert_eq!(calls.get(), 0);
    let last = seen.last().expect("status reported");
    assert!(last.is_processing);
    assert!(last.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn empty_catalog_reports_no_scenes() {
    let finder = SceneFinder::new(
        RandomSceneMatcher::from_parts(vec![], vec![]),
        FinderConfig {
            upload_delay_ms: 10,
            match_delay_ms: 10,
        },
    );
    let token = CancellationToken::new();
    let mut last = FinderStatus::default();

    let err = finder
        .upload_screenshot(&screenshot(), &token, |s| last = s.clone())
        .await
        .unwrap_err();

    assert_eq!(err, FinderError::NoScenes);
    assert_eq!(last.error, Some(err.to_string()));
    assert!(!last.is_busy());
}
