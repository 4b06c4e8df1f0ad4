//! oly-skin core - skin photo scoring
//!
//! This crate contains the domain types, the skin metric estimator, the
//! ports adapters plug into, and the batch pipeline connecting them.

pub mod domain;
pub mod error;
pub mod modules;
pub mod pipeline;
pub mod ports;

pub use domain::{
    AnalysisResult, ChannelStats, ImageDimensions, ImageMetadata, Photo, SkinAnalysis,
    SkinScores, SkinSignals,
};
pub use error::EstimateError;
pub use modules::SkinEstimator;
pub use pipeline::{analyze_batch, analyze_photo, BatchSummary, PhotoOutcome};
pub use ports::{DiaryStore, ImageSource, ProgressEvent, ProgressSink, ResultOutput};
