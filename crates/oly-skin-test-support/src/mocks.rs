//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use oly_skin_core::domain::{AnalysisResult, Photo};
use oly_skin_core::ports::{DiaryStore, ImageSource, ProgressEvent, ProgressSink, ResultOutput};

/// One entry of a [`MockImageSource`]: the photo bytes, or a read error.
type MockPhoto = (String, Result<Vec<u8>, String>);

/// Mock implementation of `ImageSource` for testing.
///
/// Yields pre-built photos and tracks iteration for assertions.
pub struct MockImageSource {
    photos: Vec<MockPhoto>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockImageSource {
    /// Creates a new mock source with the given `(path, bytes)` pairs.
    #[must_use]
    pub fn new(photos: Vec<(&str, Vec<u8>)>) -> Self {
        Self {
            photos: photos
                .into_iter()
                .map(|(path, bytes)| (path.to_string(), Ok(bytes)))
                .collect(),
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Adds a photo whose read fails with `reason`.
    #[must_use]
    pub fn with_unreadable(mut self, path: &str, reason: &str) -> Self {
        self.photos
            .push((path.to_string(), Err(reason.to_string())));
        self
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageSource for MockImageSource {
    fn photos(&self) -> Box<dyn Iterator<Item = Photo> + Send + '_> {
        let count = Arc::clone(&self.iteration_count);
        if let Ok(mut c) = count.lock() {
            *c += 1;
        }
        Box::new(self.photos.iter().map(|(path, bytes)| Photo {
            path: path.clone(),
            bytes: bytes.clone().map_err(|reason| anyhow::anyhow!(reason)),
        }))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.photos.len())
    }
}

/// Mock implementation of `ResultOutput` for testing.
///
/// Captures results for later assertions.
pub struct MockResultOutput {
    results: Arc<Mutex<Vec<AnalysisResult>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockResultOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured results.
    #[must_use]
    pub fn results(&self) -> Vec<AnalysisResult> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockResultOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultOutput for MockResultOutput {
    fn write(&self, result: &AnalysisResult) -> anyhow::Result<()> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(result.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `Started` events.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Started { .. }))
            .count()
    }

    /// Returns the number of `Completed` events.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Completed { .. }))
            .count()
    }

    /// Returns the paths reported as `Unavailable`.
    #[must_use]
    pub fn unavailable_paths(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Unavailable { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished {
                analyzed,
                unavailable,
            } => Some((*analyzed, *unavailable)),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// In-memory implementation of `DiaryStore` for testing.
#[derive(Default)]
pub struct MockDiaryStore {
    entries: Arc<Mutex<Vec<AnalysisResult>>>,
    fail_appends: bool,
}

impl MockDiaryStore {
    /// Creates an empty diary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a diary whose appends always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_appends: true,
            ..Self::default()
        }
    }
}

impl DiaryStore for MockDiaryStore {
    fn append(&self, entry: &AnalysisResult) -> anyhow::Result<()> {
        if self.fail_appends {
            anyhow::bail!("diary is read-only");
        }
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }

    fn entries(&self) -> anyhow::Result<Vec<AnalysisResult>> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use oly_skin_core::SkinScores;

    fn result(path: &str) -> AnalysisResult {
        AnalysisResult {
            path: path.into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
            dimensions: None,
            format: None,
            scores: SkinScores::unavailable(),
        }
    }

    #[test]
    fn test_mock_image_source_empty() {
        let source = MockImageSource::empty();
        assert_eq!(source.count_hint(), Some(0));
        assert_eq!(source.photos().count(), 0);
        assert_eq!(source.iteration_count(), 1);
    }

    #[test]
    fn test_mock_image_source_with_unreadable() {
        let source = MockImageSource::new(vec![("a.png", vec![1, 2, 3])])
            .with_unreadable("b.png", "permission denied");

        assert_eq!(source.count_hint(), Some(2));
        let photos: Vec<_> = source.photos().collect();
        assert_eq!(photos[0].path, "a.png");
        assert!(photos[0].bytes.is_ok());
        assert_eq!(photos[1].path, "b.png");
        assert!(photos[1].bytes.is_err());
    }

    #[test]
    fn test_mock_result_output() {
        let output = MockResultOutput::new();

        output.write(&result("test.jpg")).unwrap();
        output.flush().unwrap();

        assert_eq!(output.results().len(), 1);
        assert_eq!(output.results()[0].path, "test.jpg");
        assert_eq!(output.flush_count(), 1);
    }

    #[test]
    fn test_mock_progress_sink() {
        let sink = MockProgressSink::new();

        sink.on_event(ProgressEvent::Started {
            path: "test.jpg".into(),
            index: 0,
            total: Some(1),
        });
        sink.on_event(ProgressEvent::Unavailable {
            path: "test.jpg".into(),
            reason: "grayscale".into(),
        });
        sink.on_event(ProgressEvent::Finished {
            analyzed: 0,
            unavailable: 1,
        });

        assert_eq!(sink.started_count(), 1);
        assert_eq!(sink.unavailable_paths(), vec!["test.jpg".to_string()]);
        assert_eq!(sink.finished_counts(), Some((0, 1)));
    }

    #[test]
    fn test_mock_diary_store() {
        let diary = MockDiaryStore::new();
        diary.append(&result("one.png")).unwrap();
        diary.append(&result("two.png")).unwrap();
        let paths: Vec<_> = diary.entries().unwrap().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["one.png", "two.png"]);

        assert!(MockDiaryStore::failing().append(&result("x.png")).is_err());
    }
}
