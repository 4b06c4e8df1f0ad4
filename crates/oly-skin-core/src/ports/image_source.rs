//! Image source port for loading photos from various sources.

use crate::domain::Photo;

/// Port for loading photos from a source.
pub trait ImageSource: Send + Sync {
    /// Returns an iterator over photos from this source.
    ///
    /// Read failures are carried inside each [`Photo`] so that every input
    /// is still reported.
    fn photos(&self) -> Box<dyn Iterator<Item = Photo> + Send + '_>;

    /// Returns the total number of photos, if known.
    fn count_hint(&self) -> Option<usize>;
}
