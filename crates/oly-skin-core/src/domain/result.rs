//! Analysis result types.

use serde::{Deserialize, Serialize};

use super::SkinScores;

/// Complete analysis result for a single photo.
///
/// This is also the record persisted as a skin diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Path to the analyzed photo.
    pub path: String,
    /// Timestamp of analysis (ISO 8601).
    pub timestamp: String,
    /// Image dimensions, absent when the photo could not be decoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ImageDimensions>,
    /// Detected container format, absent when the photo could not be decoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Heuristic skin scores.
    pub scores: SkinScores,
}

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates a new dimension pair.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Metadata probed from an encoded photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Format name, e.g. `"png"` or `"jpeg"`.
    pub format: String,
}

impl ImageMetadata {
    /// Returns the width and height as [`ImageDimensions`].
    #[must_use]
    pub const fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }
}

/// A photo handed out by an image source.
///
/// Reading is fallible per photo; a failed read is kept here rather than
/// aborting the batch so the photo can still be reported.
#[derive(Debug)]
pub struct Photo {
    /// Path to the photo.
    pub path: String,
    /// Raw encoded bytes, or the read error.
    pub bytes: anyhow::Result<Vec<u8>>,
}

impl Photo {
    /// Creates a photo from bytes already in memory.
    #[must_use]
    pub fn from_bytes(path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes: Ok(bytes),
        }
    }
}
