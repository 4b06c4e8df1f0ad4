//! JSON Lines skin diary.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use oly_skin_core::{AnalysisResult, DiaryStore};
use tracing::{debug, info};

/// Returns the default diary path.
///
/// Uses `XDG_DATA_HOME/oly-skin/diary.jsonl` or `~/.local/share/oly-skin/diary.jsonl`.
#[must_use]
pub fn default_diary_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oly-skin")
        .join("diary.jsonl")
}

/// Append-only diary storing one JSON entry per line.
pub struct JsonlDiary {
    path: PathBuf,
}

impl JsonlDiary {
    /// Creates a diary backed by `path`. Nothing is touched until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiaryStore for JsonlDiary {
    fn append(&self, entry: &AnalysisResult) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create diary directory {}", parent.display()))?;
        }

        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open diary {}", self.path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("Failed to write diary {}", self.path.display()))?;

        info!("Recorded diary entry for {}", entry.path);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<AnalysisResult>> {
        if !self.path.exists() {
            debug!("Diary not found: {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read diary {}", self.path.display()))?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).with_context(|| {
                    format!("Malformed diary entry at {}:{}", self.path.display(), i + 1)
                })
            })
            .collect()
    }
}
