//! Per-tick activity sampling.
//!
//! An [`ActivitySampler`] chains two collaborators: a [`ScreenCapture`] that
//! grabs the screen into a [`RawImage`], and a [`FeatureExtractor`] that turns
//! that image into [`Features`]. The result is an [`Observation`], the only
//! thing that leaves the sampler. The raw image is dropped before `sample`
//! returns, whichever way it returns, and dropping it deletes any file that
//! backed it.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Structured result of one sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub detected_apps: Vec<String>,
    pub has_text_editor: bool,
    pub has_browser: bool,
    pub has_terminal: bool,
    pub has_entertainment: bool,
}

/// A captured screen. Holds the decoded pixels and, when the capture went
/// through a file, the temporary file itself so it is removed on drop.
pub struct RawImage {
    pixels: DynamicImage,
    _backing: Option<NamedTempFile>,
}

impl RawImage {
    pub fn new(pixels: DynamicImage) -> Self {
        Self { pixels, _backing: None }
    }

    pub fn from_file(pixels: DynamicImage, file: NamedTempFile) -> Self {
        Self { pixels, _backing: Some(file) }
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }
}

/// The minimal feature surface the sampler needs from an extractor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    pub has_text_editor_hint: bool,
    pub mean_intensity: f64,
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Command(String),
    #[error("failed to decode screenshot: {0}")]
    Decode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("screenshot has no pixels")]
    EmptyImage,
    #[error("{0}")]
    Other(String),
}

/// A failed sample. The tick that hit it produces no verdict.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

pub trait ScreenCapture: Send + Sync {
    fn capture(&self) -> Result<RawImage, CaptureError>;
}

pub trait FeatureExtractor: Send + Sync {
    fn extract(&self, image: &RawImage) -> Result<Features, AnalysisError>;
}

/// Anything the monitor can ask for an observation once per tick.
///
/// Implementations may block; the monitor calls them off the async runtime.
pub trait Sampler: Send + Sync {
    fn sample(&self) -> Result<Observation, SampleError>;
}

pub struct ActivitySampler<C, E> {
    capture: C,
    extractor: E,
}

impl<C: ScreenCapture, E: FeatureExtractor> ActivitySampler<C, E> {
    pub fn new(capture: C, extractor: E) -> Self {
        Self { capture, extractor }
    }

    fn observe(features: Features) -> Observation {
        // Only the editor hint is ever derived from the pixels.
        Observation {
            has_text_editor: features.has_text_editor_hint,
            ..Observation::default()
        }
    }
}

impl<C: ScreenCapture, E: FeatureExtractor> Sampler for ActivitySampler<C, E> {
    fn sample(&self) -> Result<Observation, SampleError> {
        let image = self.capture.capture()?;
        let features = self.extractor.extract(&image);
        drop(image);
        Ok(Self::observe(features?))
    }
}
