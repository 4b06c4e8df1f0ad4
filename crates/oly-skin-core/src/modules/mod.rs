//! Skin analysis building blocks.
//!
//! The estimator runs crop planning, channel statistics and scoring in
//! sequence; each step is exposed for direct use and testing.

mod crop;
mod skin;
mod stats;

pub use crop::{CropPlan, CropRegion};
pub use skin::{acne_severity_score, decode, derive_signals, hydration_score, SkinEstimator};
pub use stats::{rgb_channel_stats, Channel, Histogram};
