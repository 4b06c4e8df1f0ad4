//! Result output port for emitting analysis results.

use crate::domain::AnalysisResult;

/// Port for emitting analysis results as photos complete.
pub trait ResultOutput: Send + Sync {
    /// Emits the result of one photo.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be written.
    fn write(&self, result: &AnalysisResult) -> anyhow::Result<()>;

    /// Completes the output once the batch is done.
    ///
    /// Buffering outputs write everything here.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
