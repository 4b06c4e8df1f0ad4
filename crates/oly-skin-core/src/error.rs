//! Failure taxonomy of the skin estimator.

use std::path::PathBuf;

/// Reasons a skin analysis could not produce scores.
///
/// Only [`SkinEstimator::analyze`](crate::modules::SkinEstimator::analyze)
/// surfaces these; the infallible entry points collapse every variant into
/// [`SkinScores::unavailable`](crate::SkinScores::unavailable).
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// The photo file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image has no pixels.
    #[error("image has no pixels")]
    EmptyImage,

    /// Fewer than three color channels were available.
    #[error("need 3 color channels, found {found}")]
    InsufficientChannels {
        /// Channel count of the decoded image.
        found: u8,
    },

    /// An intermediate value was NaN or infinite.
    #[error("non-finite value for {signal}")]
    NonFinite {
        /// Name of the offending signal.
        signal: &'static str,
    },
}
