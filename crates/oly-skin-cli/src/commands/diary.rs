//! Diary command - record single photos and review past entries.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use oly_skin_adapters::{read_photo, JsonlDiary};
use oly_skin_core::{analyze_photo, AnalysisResult, DiaryStore, SkinEstimator};
use tracing::{info, warn};

use crate::config::AppConfig;

/// Largest photo accepted into the diary.
const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// Photo types accepted into the diary.
const DIARY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Arguments for the diary command.
#[derive(Args)]
pub struct DiaryArgs {
    #[command(subcommand)]
    pub command: DiaryCommand,
}

/// Diary subcommands.
#[derive(Subcommand)]
pub enum DiaryCommand {
    /// Analyze one photo and append it to the diary
    Add {
        /// Photo to analyze
        photo: PathBuf,

        /// Diary file (overrides default and config)
        #[arg(long, value_name = "FILE")]
        diary: Option<PathBuf>,
    },
    /// Print diary entries, oldest first
    List {
        /// Diary file (overrides default and config)
        #[arg(long, value_name = "FILE")]
        diary: Option<PathBuf>,

        /// Print entries as a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Run the diary command.
///
/// # Errors
///
/// Returns an error if the diary cannot be read or written.
pub fn run(args: &DiaryArgs, config: &AppConfig) -> Result<()> {
    match &args.command {
        DiaryCommand::Add { photo, diary } => {
            let diary = JsonlDiary::new(config.diary_path(diary.as_deref()));
            let entry = add(&diary, photo)?;
            let json = serde_json::to_string(&entry)?;
            println!("{json}");
            Ok(())
        }
        DiaryCommand::List { diary, json } => {
            let diary = JsonlDiary::new(config.diary_path(diary.as_deref()));
            let entries = diary.entries()?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if *json {
                serde_json::to_writer_pretty(&mut out, &entries)?;
                writeln!(out)?;
            } else {
                write_entries(&mut out, &entries)?;
            }
            Ok(())
        }
    }
}

/// Refuses paths that should never become diary entries.
fn check_photo(photo: &Path) -> Result<()> {
    if !photo.is_file() {
        anyhow::bail!("No photo at {}", photo.display());
    }

    let supported = photo
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| DIARY_EXTENSIONS.contains(&e.as_str()));
    if !supported {
        anyhow::bail!(
            "Only JPG, JPEG and PNG photos can be added: {}",
            photo.display()
        );
    }

    let size = std::fs::metadata(photo)
        .with_context(|| format!("Failed to inspect {}", photo.display()))?
        .len();
    if size > MAX_PHOTO_BYTES {
        anyhow::bail!(
            "Photo is {size} bytes, over the {MAX_PHOTO_BYTES} byte limit: {}",
            photo.display()
        );
    }

    Ok(())
}

/// Analyzes `photo` and appends the result.
///
/// Photos that pass the checks are recorded even when they cannot be scored.
fn add(diary: &JsonlDiary, photo: &Path) -> Result<AnalysisResult> {
    check_photo(photo)?;

    let outcome = analyze_photo(&SkinEstimator::new(), read_photo(photo));
    if let Some(reason) = &outcome.unavailable_reason {
        warn!("No scores for {}: {reason}", photo.display());
    }

    diary
        .append(&outcome.result)
        .with_context(|| format!("Failed to record {}", photo.display()))?;
    info!("Diary entry added to {}", diary.path().display());

    Ok(outcome.result)
}

fn write_entries(out: &mut impl Write, entries: &[AnalysisResult]) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "Diary is empty")?;
        return Ok(());
    }

    for entry in entries {
        writeln!(
            out,
            "{}  hydration {:>3}  acne {:>2}  {}",
            entry.timestamp,
            score_text(entry.scores.hydration()),
            score_text(entry.scores.acne_severity()),
            entry.path,
        )?;
    }
    Ok(())
}

fn score_text(score: Option<u8>) -> String {
    score.map_or_else(|| "—".to_string(), |s| s.to_string())
}
