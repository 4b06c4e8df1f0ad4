//! Filesystem adapter for loading photos.

use anyhow::Context;
use oly_skin_core::{ImageSource, Photo};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Supported photo extensions.
const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif", "tiff", "tif"];

/// Filesystem image source adapter.
///
/// Paths are expanded once, when the source is created.
pub struct FsImageSource {
    files: Vec<PathBuf>,
}

impl FsImageSource {
    /// Creates a new filesystem image source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        let files = collect_files(&paths, recursive);
        debug!("Found {} photo files", files.len());
        Self { files }
    }

    /// Returns the photo files that will be read, in order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Collects all photo files from the given paths.
fn collect_files(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_supported_image(path) {
                files.push(path.clone());
            } else {
                warn!("Unsupported file type: {}", path.display());
            }
        } else if path.is_dir() {
            collect_from_dir(path, recursive, &mut files);
        } else {
            warn!("Path does not exist: {}", path.display());
        }
    }

    files
}

fn collect_from_dir(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!("Failed to read directory {}: {e}", dir.display());
            return;
        }
    };

    let mut children: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    children.sort();

    for path in children {
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        } else if path.is_dir() && recursive {
            collect_from_dir(&path, recursive, files);
        }
    }
}

impl ImageSource for FsImageSource {
    fn photos(&self) -> Box<dyn Iterator<Item = Photo> + Send + '_> {
        Box::new(self.files.iter().map(|path| read_photo(path)))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.files.len())
    }
}

/// Checks if a path has a supported photo extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| RASTER_EXTENSIONS.contains(&e.as_str()))
}

/// Reads a photo's bytes, keeping any I/O failure in [`Photo::bytes`].
#[must_use]
pub fn read_photo(path: &Path) -> Photo {
    Photo {
        path: path.to_string_lossy().into_owned(),
        bytes: std::fs::read(path)
            .with_context(|| format!("Failed to read photo: {}", path.display())),
    }
}
