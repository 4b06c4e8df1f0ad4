//! Core domain types for skin photo analysis.

mod analysis;
mod result;
mod scores;

pub use analysis::{ChannelStats, SkinAnalysis, SkinSignals};
pub use result::{AnalysisResult, ImageDimensions, ImageMetadata, Photo};
pub use scores::{SkinScores, ACNE_MAX, ACNE_MIN, HYDRATION_MAX, HYDRATION_MIN};
