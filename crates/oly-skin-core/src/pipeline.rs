//! Batch analysis: photos in, scored results out.

use tracing::{debug, info};

use crate::domain::{AnalysisResult, Photo, SkinScores};
use crate::modules::SkinEstimator;
use crate::ports::{DiaryStore, ImageSource, ProgressEvent, ProgressSink, ResultOutput};

/// Counts reported at the end of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Photos that received scores.
    pub analyzed: usize,
    /// Photos reported with the null pair.
    pub unavailable: usize,
}

/// Result of analyzing one photo.
#[derive(Debug, Clone)]
pub struct PhotoOutcome {
    /// Result record, always present.
    pub result: AnalysisResult,
    /// Why scores are missing, when they are.
    pub unavailable_reason: Option<String>,
}

/// Analyzes one photo, absorbing every failure into the null pair.
#[must_use]
pub fn analyze_photo(estimator: &SkinEstimator, photo: Photo) -> PhotoOutcome {
    let outcome = photo
        .bytes
        .map_err(|e| format!("{e:#}"))
        .and_then(|bytes| estimator.analyze(&bytes).map_err(|e| e.to_string()));

    let (dimensions, format, scores, unavailable_reason) = match outcome {
        Ok(analysis) => (
            Some(analysis.metadata.dimensions()),
            Some(analysis.metadata.format),
            analysis.scores,
            None,
        ),
        Err(reason) => {
            debug!("No scores for {}: {reason}", photo.path);
            (None, None, SkinScores::unavailable(), Some(reason))
        }
    };

    PhotoOutcome {
        result: AnalysisResult {
            path: photo.path,
            timestamp: iso_timestamp(),
            dimensions,
            format,
            scores,
        },
        unavailable_reason,
    }
}

/// Runs every photo of `source` through the estimator.
///
/// Each result is written to `output` and, when given, appended to
/// `diary`. Photos that cannot be scored are still written.
///
/// # Errors
///
/// Returns an error if writing to the output or the diary fails.
pub fn analyze_batch(
    source: &dyn ImageSource,
    output: &dyn ResultOutput,
    progress: &dyn ProgressSink,
    diary: Option<&dyn DiaryStore>,
) -> anyhow::Result<BatchSummary> {
    let estimator = SkinEstimator::new();
    let total = source.count_hint();
    let mut summary = BatchSummary::default();

    for (index, photo) in source.photos().enumerate() {
        progress.on_event(ProgressEvent::Started {
            path: photo.path.clone(),
            index,
            total,
        });

        let PhotoOutcome {
            result,
            unavailable_reason,
        } = analyze_photo(&estimator, photo);

        if let Some(reason) = unavailable_reason {
            summary.unavailable += 1;
            progress.on_event(ProgressEvent::Unavailable {
                path: result.path.clone(),
                reason,
            });
        } else {
            summary.analyzed += 1;
        }

        output.write(&result)?;
        if let Some(diary) = diary {
            diary.append(&result)?;
        }

        progress.on_event(ProgressEvent::Completed { result });
    }

    output.flush()?;
    info!(
        "Batch done: {} analyzed, {} unavailable",
        summary.analyzed, summary.unavailable
    );

    progress.on_event(ProgressEvent::Finished {
        analyzed: summary.analyzed,
        unavailable: summary.unavailable,
    });

    Ok(summary)
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
