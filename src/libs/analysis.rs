//! Brightness based screen analysis.
//!
//! The extractor converts the capture to greyscale and reports its mean
//! intensity. A dark screen is taken as a hint that a text editor (most of
//! which default to a dark theme) is in front. It is a crude signal and it
//! is the only one the sampler derives from pixels.

use crate::libs::sampler::{AnalysisError, FeatureExtractor, Features, RawImage};

/// Mid-point of the 8-bit intensity range.
pub const DARK_THRESHOLD: f64 = 128.0;

#[derive(Debug, Clone, Copy)]
pub struct BrightnessExtractor {
    threshold: f64,
}

impl Default for BrightnessExtractor {
    fn default() -> Self {
        Self { threshold: DARK_THRESHOLD }
    }
}

impl BrightnessExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for BrightnessExtractor {
    fn extract(&self, image: &RawImage) -> Result<Features, AnalysisError> {
        let gray = image.pixels().to_luma8();
        let count = gray.as_raw().len();
        if count == 0 {
            return Err(AnalysisError::EmptyImage);
        }

        let sum: u64 = gray.as_raw().iter().map(|&p| p as u64).sum();
        let mean_intensity = sum as f64 / count as f64;

        Ok(Features {
            has_text_editor_hint: mean_intensity < self.threshold,
            mean_intensity,
        })
    }
}
