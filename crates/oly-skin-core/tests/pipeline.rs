//! Batch pipeline tests using mock ports and synthetic photos.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use oly_skin_core::{
    analyze_batch, analyze_photo, DiaryStore, ImageDimensions, Photo, SkinEstimator, SkinScores,
};
use oly_skin_test_support::{
    MockDiaryStore, MockImageSource, MockProgressSink, MockResultOutput, SyntheticImageBuilder,
};

#[test]
fn test_every_photo_is_written_in_order() {
    let source = MockImageSource::new(vec![
        ("gray.png", SyntheticImageBuilder::uniform_rgb(64, 64, [128, 128, 128])),
        ("junk.png", SyntheticImageBuilder::not_an_image()),
        ("mono.png", SyntheticImageBuilder::grayscale(64, 64, 90)),
    ])
    .with_unreadable("locked.png", "permission denied");
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    let summary = analyze_batch(&source, &output, &progress, None).expect("batch");

    assert_eq!(summary.analyzed, 1);
    assert_eq!(summary.unavailable, 3);

    let results = output.results();
    let paths: Vec<_> = results.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["gray.png", "junk.png", "mono.png", "locked.png"]);

    assert_eq!(results[0].scores, SkinScores::new(95, 0));
    assert_eq!(results[0].dimensions, Some(ImageDimensions::new(64, 64)));
    assert_eq!(results[0].format.as_deref(), Some("png"));

    for unavailable in &results[1..] {
        assert_eq!(unavailable.scores, SkinScores::unavailable());
        assert!(unavailable.dimensions.is_none());
    }
    assert_eq!(output.flush_count(), 1);
}

#[test]
fn test_progress_events() {
    let source = MockImageSource::new(vec![
        ("a.png", SyntheticImageBuilder::uniform_rgb(20, 20, [0, 0, 0])),
        ("b.png", SyntheticImageBuilder::truncated_png(150, 150)),
    ]);
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    analyze_batch(&source, &output, &progress, None).expect("batch");

    assert_eq!(progress.started_count(), 2);
    assert_eq!(progress.completed_count(), 2);
    assert_eq!(progress.unavailable_paths(), vec!["b.png".to_string()]);
    assert_eq!(progress.finished_counts(), Some((1, 1)));
}

#[test]
fn test_empty_source() {
    let source = MockImageSource::empty();
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    let summary = analyze_batch(&source, &output, &progress, None).expect("batch");

    assert_eq!(summary.analyzed + summary.unavailable, 0);
    assert!(output.results().is_empty());
    assert_eq!(output.flush_count(), 1);
    assert_eq!(progress.finished_counts(), Some((0, 0)));
    assert_eq!(source.iteration_count(), 1);
}

#[test]
fn test_diary_records_unavailable_entries_too() {
    let source = MockImageSource::new(vec![
        ("ok.png", SyntheticImageBuilder::uniform_rgb(32, 32, [200, 50, 50])),
        ("bad.png", SyntheticImageBuilder::not_an_image()),
    ]);
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();
    let diary = MockDiaryStore::new();

    analyze_batch(&source, &output, &progress, Some(&diary)).expect("batch");

    let entries = diary.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].scores, SkinScores::new(95, 4));
    assert!(!entries[1].scores.is_available());
    assert_eq!(entries, output.results());
}

#[test]
fn test_diary_failure_aborts_batch() {
    let source = MockImageSource::new(vec![(
        "ok.png",
        SyntheticImageBuilder::uniform_rgb(32, 32, [10, 10, 10]),
    )]);
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();
    let diary = MockDiaryStore::failing();

    let err = analyze_batch(&source, &output, &progress, Some(&diary)).unwrap_err();
    assert!(err.to_string().contains("read-only"));
    assert!(progress.finished_counts().is_none());
}

#[test]
fn test_analyze_photo_reports_reason() {
    let estimator = SkinEstimator::new();

    let outcome = analyze_photo(
        &estimator,
        Photo::from_bytes("mono.png", SyntheticImageBuilder::grayscale(16, 16, 10)),
    );
    assert_eq!(outcome.result.scores, SkinScores::unavailable());
    let reason = outcome.unavailable_reason.expect("reason");
    assert!(reason.contains("3 color channels"), "reason: {reason}");

    let outcome = analyze_photo(
        &estimator,
        Photo::from_bytes(
            "face.png",
            SyntheticImageBuilder::centered_square(300, 200, [255, 0, 0], [0, 0, 255]),
        ),
    );
    assert!(outcome.unavailable_reason.is_none());
    assert_eq!(outcome.result.scores, SkinScores::new(95, 4));
    assert!(outcome.result.timestamp.ends_with('Z'));
}

#[test]
fn test_jpeg_photo_is_scored() {
    let image = SyntheticImageBuilder::uniform_rgb_image(160, 160, [128, 128, 128]);
    let scores = SkinEstimator::new().estimate(&SyntheticImageBuilder::jpeg(&image));
    // JPEG noise on a flat image stays far below the clamp
    assert_eq!(scores.hydration(), Some(95));
    assert_eq!(scores.acne_severity(), Some(0));
}

#[test]
fn test_estimate_file_reads_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selfie.png");
    std::fs::write(&path, SyntheticImageBuilder::uniform_rgb(120, 120, [0, 0, 0])).unwrap();

    assert_eq!(SkinEstimator::new().estimate_file(&path), SkinScores::new(95, 0));
}
