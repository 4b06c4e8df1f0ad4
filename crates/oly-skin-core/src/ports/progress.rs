//! Progress reporting port for UI integration.

use crate::domain::AnalysisResult;

/// Events emitted during analysis for progress tracking.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Analysis started for a photo.
    Started {
        /// Path to the photo.
        path: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total photos in batch, if known.
        total: Option<usize>,
    },
    /// Analysis completed for a photo.
    Completed {
        /// The analysis result.
        result: AnalysisResult,
    },
    /// A photo could not be scored; its result carries the null pair.
    Unavailable {
        /// Path to the photo.
        path: String,
        /// Reason scoring was not possible.
        reason: String,
    },
    /// All photos have been processed.
    Finished {
        /// Photos with scores.
        analyzed: usize,
        /// Photos without scores.
        unavailable: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
