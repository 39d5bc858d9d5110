//! Scene finder: upload a screenshot, wait, get a scene back.
//!
//! The flow mirrors a real upload-then-match pipeline (two sequential delays)
//! but the match itself comes from whatever [`SceneMatcher`] is plugged in.
//! The shipped matcher is [`RandomSceneMatcher`], which ignores the image.

mod matcher;

pub use matcher::{RandomSceneMatcher, SceneMatch, SceneMatcher, RANDOM_MATCH_CONFIDENCE};

use base64::Engine;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::timer::{millis, sleep_or_cancel};

/// Types offered by the file picker
pub const ACCEPTED_TYPES: &str = "image/jpeg, image/png, image/webp";

/// A user-supplied file with its declared media type.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Declare the media type from the file extension, the way a browser does
    /// for picked files. Unknown extensions get an empty type.
    pub fn from_file_name(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let media_type = mime_guess::from_path(&file_name)
            .first_raw()
            .unwrap_or_default()
            .to_string();
        Self {
            file_name,
            media_type,
            bytes,
        }
    }

    /// Only the declared type is checked; the bytes are never inspected.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    /// `data:` URL for previewing the upload.
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Transient scene finder state shown by the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinderStatus {
    pub is_uploading: bool,
    pub is_processing: bool,
    pub error: Option<String>,
    pub matched: Option<SceneMatch>,
}

impl FinderStatus {
    pub fn is_busy(&self) -> bool {
        self.is_uploading || self.is_processing
    }

    /// Clear everything, whatever state the finder is in.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Drives an upload through the simulated pipeline.
#[derive(Clone, Debug)]
pub struct SceneFinder<M> {
    matcher: M,
    config: FinderConfig,
}

impl<M: SceneMatcher> SceneFinder<M> {
    pub fn new(matcher: M, config: FinderConfig) -> Self {
        Self { matcher, config }
    }

    /// Validate, "upload", "match". `observe` sees the status after every
    /// transition. A cancelled run stops reporting and returns
    /// [`FinderError::Cancelled`].
    pub async fn upload_screenshot<F>(
        &self,
        upload: &Upload,
        cancel: &CancellationToken,
        mut observe: F,
    ) -> Result<SceneMatch, FinderError>
    where
        F: FnMut(&FinderStatus),
    {
        let mut status = FinderStatus {
            is_uploading: true,
            ..FinderStatus::default()
        };
        observe(&status);

        if !upload.is_image() {
            warn!(
                "Rejected upload {} with type {:?}",
                upload.file_name, upload.media_type
            );
            return Err(Self::fail(&mut status, FinderError::NotAnImage, &mut observe));
        }

        if sleep_or_cancel(millis(self.config.upload_delay_ms), cancel)
            .await
            .is_err()
        {
            return Err(FinderError::Cancelled);
        }
        status.is_uploading = false;
        status.is_processing = true;
        observe(&status);

        if sleep_or_cancel(millis(self.config.match_delay_ms), cancel)
            .await
            .is_err()
        {
            return Err(FinderError::Cancelled);
        }

        match self.matcher.find_match(upload).await {
            Ok(found) => {
                debug!(
                    "Matched {} to {:?} at {}",
                    upload.file_name, found.movie.title, found.scene.timestamp
                );
                status.is_processing = false;
                status.matched = Some(found.clone());
                observe(&status);
                Ok(found)
            }
            Err(e) => Err(Self::fail(&mut status, e, &mut observe)),
        }
    }

    fn fail<F: FnMut(&FinderStatus)>(
        status: &mut FinderStatus,
        error: FinderError,
        observe: &mut F,
    ) -> FinderError {
        status.is_uploading = false;
        status.is_processing = false;
        status.error = Some(error.to_string());
        observe(status);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_type_comes_from_extension() {
        assert_eq!(Upload::from_file_name("a.png", vec![]).media_type, "image/png");
        assert_eq!(Upload::from_file_name("a.webp", vec![]).media_type, "image/webp");
        assert_eq!(Upload::from_file_name("notes.txt", vec![]).media_type, "text/plain");
        assert_eq!(Upload::from_file_name("noext", vec![]).media_type, "");
        assert!(Upload::from_file_name("a.jpg", vec![]).is_image());
        assert!(!Upload::from_file_name("a.txt", vec![]).is_image());
    }

    #[test]
    fn preview_is_a_data_url() {
        let upload = Upload::new("x.png", "image/png", b"abc".to_vec());
        assert_eq!(upload.preview_data_url(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn reset_clears_everything() {
        let mut status = FinderStatus {
            is_uploading: true,
            is_processing: true,
            error: Some("boom".into()),
            matched: None,
        };
        assert!(status.is_busy());
        status.reset();
        assert_eq!(status, FinderStatus::default());
        assert!(!status.is_busy());
    }
}
