//! Skin metric estimator.
//!
//! Derives two heuristic scores from a selfie's pixel statistics:
//! - hydration (10-95): brighter, smoother skin scores higher
//! - acne severity (0-10): red channel spread and strong redness score higher
//!
//! The weights are fixed heuristics, not a learned or clinical model.

use std::path::Path;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, warn};

use super::crop::CropPlan;
use super::stats::rgb_channel_stats;
use crate::domain::{
    ChannelStats, ImageDimensions, ImageMetadata, SkinAnalysis, SkinScores, SkinSignals,
    ACNE_MAX, ACNE_MIN, HYDRATION_MAX, HYDRATION_MIN,
};
use crate::error::EstimateError;

/// Hydration weights.
mod hydration {
    pub const BRIGHTNESS_WEIGHT: f64 = 0.6;
    pub const CONTRAST_WEIGHT: f64 = 1.5;
    pub const TEXTURE_WEIGHT: f64 = 2.0;
    pub const BASELINE: f64 = 100.0;
}

/// Acne severity weights.
mod acne {
    pub const RED_VARIANCE_WEIGHT: f64 = 0.8;
    pub const REDNESS_THRESHOLD: f64 = 140.0;
    pub const REDNESS_BONUS: f64 = 30.0;
    pub const DIVISOR: f64 = 8.0;
    pub const DEFAULT_RED_MEAN: f64 = 128.0;
    pub const DEFAULT_RED_VARIANCE: f64 = 0.0;
}

/// Stateless skin metric estimator.
///
/// Every call is independent, so one estimator can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkinEstimator;

impl SkinEstimator {
    /// Creates a new estimator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scores an encoded photo.
    ///
    /// Never fails: any problem with the input yields
    /// [`SkinScores::unavailable`].
    #[must_use]
    pub fn estimate(&self, bytes: &[u8]) -> SkinScores {
        collapse(self.analyze(bytes))
    }

    /// Reads and scores a photo file.
    ///
    /// An unreadable file yields [`SkinScores::unavailable`].
    #[must_use]
    pub fn estimate_file(&self, path: impl AsRef<Path>) -> SkinScores {
        collapse(self.analyze_file(path))
    }

    /// Reads and analyzes a photo file.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Read`] if the file cannot be read, or any
    /// error of [`SkinEstimator::analyze`].
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<SkinAnalysis, EstimateError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| EstimateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.analyze(&bytes)
    }

    /// Analyzes an encoded photo, keeping the intermediate statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded, the image has fewer
    /// than three color channels or no pixels, or a derived value is not
    /// finite.
    pub fn analyze(&self, bytes: &[u8]) -> Result<SkinAnalysis, EstimateError> {
        let (image, metadata) = decode(bytes)?;
        debug!(
            "Image metadata: {}x{} {}",
            metadata.width, metadata.height, metadata.format
        );

        let plan = CropPlan::for_dimensions(metadata.width, metadata.height);
        match plan {
            CropPlan::Center(r) => debug!("Cropped to {}x{} at ({}, {})", r.size, r.size, r.left, r.top),
            CropPlan::TooSmall => debug!("Crop skipped: image too small"),
            CropPlan::Degenerate => debug!("Crop skipped: degenerate crop geometry"),
        }
        let working = plan.apply(&image);
        let (working_width, working_height) = working.dimensions();

        let channels = rgb_channel_stats(&working)?;
        let signals = derive_signals(&channels);
        debug!(
            avg_brightness = signals.avg_brightness,
            avg_contrast = signals.avg_contrast,
            texture_variance = signals.texture_variance,
            red_mean = ?signals.red_mean,
            red_variance = ?signals.red_variance,
            "Skin signals"
        );

        if let Some(signal) = signals.first_non_finite() {
            return Err(EstimateError::NonFinite { signal });
        }

        let scores = SkinScores::new(hydration_score(&signals)?, acne_severity_score(&signals)?);
        debug!(
            "Skin scores: hydration={:?} acne_severity={:?}",
            scores.hydration(),
            scores.acne_severity()
        );

        Ok(SkinAnalysis {
            metadata,
            working: ImageDimensions::new(working_width, working_height),
            cropped: plan.region().is_some(),
            channels,
            signals,
            scores,
        })
    }
}

/// Reduces an analysis outcome to its scores, logging failures.
fn collapse(outcome: Result<SkinAnalysis, EstimateError>) -> SkinScores {
    match outcome {
        Ok(analysis) => analysis.scores,
        Err(e) => {
            warn!("Skin analysis unavailable: {e}");
            SkinScores::unavailable()
        }
    }
}

/// Decodes a photo and probes its metadata.
///
/// # Errors
///
/// Returns [`EstimateError::Decode`] if the format is unknown or the data
/// is corrupt.
pub fn decode(bytes: &[u8]) -> Result<(DynamicImage, ImageMetadata), EstimateError> {
    let format = image::guess_format(bytes)?;
    let image = image::load_from_memory_with_format(bytes, format)?;
    let (width, height) = image.dimensions();
    let metadata = ImageMetadata {
        width,
        height,
        format: format!("{format:?}").to_lowercase(),
    };
    Ok((image, metadata))
}

/// Aggregates channel statistics into skin signals.
///
/// Expects red, green and blue in that order; the red signals are absent
/// only when `channels` is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derive_signals(channels: &[ChannelStats]) -> SkinSignals {
    let count = channels.len().max(1) as f64;
    let avg_brightness = channels.iter().map(|c| c.mean).sum::<f64>() / count;
    let avg_contrast = channels.iter().map(|c| c.std_dev).sum::<f64>() / count;
    let texture_variance = channels
        .iter()
        .map(|c| c.std_dev)
        .fold(0.0, f64::max);
    let red = channels.first();

    SkinSignals {
        avg_brightness,
        avg_contrast,
        texture_variance,
        red_mean: red.map(|c| c.mean),
        red_variance: red.map(|c| c.std_dev),
    }
}

/// Hydration score: brightness rewarded, contrast and texture penalized.
///
/// # Errors
///
/// Returns [`EstimateError::NonFinite`] if the raw score is not finite.
pub fn hydration_score(signals: &SkinSignals) -> Result<u8, EstimateError> {
    use hydration::{BASELINE, BRIGHTNESS_WEIGHT, CONTRAST_WEIGHT, TEXTURE_WEIGHT};

    let raw = signals.avg_brightness * BRIGHTNESS_WEIGHT
        + (BASELINE - signals.avg_contrast * CONTRAST_WEIGHT)
        + (BASELINE - signals.texture_variance * TEXTURE_WEIGHT);
    round_clamped(raw, HYDRATION_MIN, HYDRATION_MAX, "hydration")
}

/// Acne severity score: red spread plus a bonus for strong redness.
///
/// # Errors
///
/// Returns [`EstimateError::NonFinite`] if the raw score is not finite.
pub fn acne_severity_score(signals: &SkinSignals) -> Result<u8, EstimateError> {
    use acne::{
        DEFAULT_RED_MEAN, DEFAULT_RED_VARIANCE, DIVISOR, REDNESS_BONUS, REDNESS_THRESHOLD,
        RED_VARIANCE_WEIGHT,
    };

    let red_mean = signals.red_mean.unwrap_or(DEFAULT_RED_MEAN);
    let red_variance = signals.red_variance.unwrap_or(DEFAULT_RED_VARIANCE);
    let bonus = if red_mean > REDNESS_THRESHOLD {
        REDNESS_BONUS
    } else {
        0.0
    };
    let raw = red_variance * RED_VARIANCE_WEIGHT + bonus;
    round_clamped(raw / DIVISOR, ACNE_MIN, ACNE_MAX, "acne_severity")
}

/// Rounds half away from zero, then clamps inclusively.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_clamped(raw: f64, min: u8, max: u8, signal: &'static str) -> Result<u8, EstimateError> {
    if !raw.is_finite() {
        return Err(EstimateError::NonFinite { signal });
    }
    // Safe: clamped into u8 range before the cast
    Ok(raw.round().clamp(f64::from(min), f64::from(max)) as u8)
}
