//! Intermediate statistics of a skin analysis.

use serde::{Deserialize, Serialize};

use super::{ImageDimensions, ImageMetadata, SkinScores};

/// Mean and population standard deviation of one color channel (0-255 scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Arithmetic mean intensity.
    pub mean: f64,
    /// Population standard deviation of intensity.
    pub std_dev: f64,
}

/// Aggregate signals derived from the red, green and blue channel statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinSignals {
    /// Mean of the three channel means.
    pub avg_brightness: f64,
    /// Mean of the three channel standard deviations.
    pub avg_contrast: f64,
    /// Largest channel standard deviation.
    pub texture_variance: f64,
    /// Red channel mean, if a red channel was present.
    pub red_mean: Option<f64>,
    /// Red channel standard deviation, if a red channel was present.
    pub red_variance: Option<f64>,
}

impl SkinSignals {
    /// Returns the name of the first non-finite signal, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("avg_brightness", Some(self.avg_brightness)),
            ("avg_contrast", Some(self.avg_contrast)),
            ("texture_variance", Some(self.texture_variance)),
            ("red_mean", self.red_mean),
            ("red_variance", self.red_variance),
        ]
        .into_iter()
        .find_map(|(name, value)| value.filter(|v| !v.is_finite()).map(|_| name))
    }
}

/// Detailed outcome of a successful skin analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinAnalysis {
    /// Metadata of the original photo.
    pub metadata: ImageMetadata,
    /// Dimensions of the region the statistics were computed over.
    pub working: ImageDimensions,
    /// Whether the working region is a center crop.
    pub cropped: bool,
    /// Red, green and blue channel statistics.
    pub channels: [ChannelStats; 3],
    /// Aggregate signals.
    pub signals: SkinSignals,
    /// Final scores.
    pub scores: SkinScores,
}
