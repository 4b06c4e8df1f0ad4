//! Skin diary port for persisting analysis results.

use crate::domain::AnalysisResult;

/// Port for an append-only skin diary.
pub trait DiaryStore: Send + Sync {
    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be persisted.
    fn append(&self, entry: &AnalysisResult) -> anyhow::Result<()>;

    /// Returns all entries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the diary cannot be read.
    fn entries(&self) -> anyhow::Result<Vec<AnalysisResult>>;
}
