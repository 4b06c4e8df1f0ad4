//! Test support utilities for oly-skin.
//!
//! Provides mocks, synthetic image builders, and utilities for testing
//! the skin analysis pipeline.
//!
//! # Example
//!
//! ```
//! use oly_skin_test_support::{MockImageSource, SyntheticImageBuilder};
//!
//! // Encode synthetic photos
//! let gray = SyntheticImageBuilder::uniform_rgb(64, 64, [128, 128, 128]);
//! let garbage = SyntheticImageBuilder::not_an_image();
//!
//! // Create mock image source
//! let source = MockImageSource::new(vec![("gray.png", gray), ("junk.png", garbage)]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{MockDiaryStore, MockImageSource, MockProgressSink, MockResultOutput};
