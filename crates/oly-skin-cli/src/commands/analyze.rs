//! Analyze command - score photos and optionally record them in the diary.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use oly_skin_adapters::{FsImageSource, JsonlDiary};
use oly_skin_core::{analyze_batch, BatchSummary, DiaryStore, ImageSource};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, OutputFormat, ProgressBar};

/// Shared arguments for photo analysis.
#[derive(Args, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnalyzeArgs {
    /// Photos or directories to analyze
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Also append each result to the skin diary
    #[arg(long)]
    pub record: bool,

    /// Diary file (overrides default and config)
    #[arg(long, value_name = "FILE")]
    pub diary: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        if !self.recursive {
            self.recursive = config.general.recursive.unwrap_or(false);
        }

        if self.format.is_none() {
            self.format = config
                .output
                .format
                .as_deref()
                .and_then(OutputFormat::from_config);
        }

        if !self.pretty {
            self.pretty = config.output.pretty.unwrap_or(false);
        }
        if !self.progress {
            self.progress = config.output.progress.unwrap_or(false);
        }
        if !self.record {
            self.record = config.diary.record.unwrap_or(false);
        }

        self.diary = Some(config.diary_path(self.diary.as_deref()));

        self
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Result of running the analyze command.
pub struct AnalyzeResult {
    /// Batch counts.
    pub summary: BatchSummary,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the analyze command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
///
/// # Errors
///
/// Returns an error if no paths are given or writing output or the diary fails.
pub fn run(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    info!("Running analyze command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let output = JsonOutput::stdout(args.format(), args.pretty);

    let diary = if args.record {
        let path = args.diary.clone().unwrap_or_else(oly_skin_adapters::default_diary_path);
        debug!("Recording results in diary {}", path.display());
        Some(JsonlDiary::new(path))
    } else {
        None
    };

    let summary = analyze_batch(
        &source,
        &output,
        &progress_bar,
        diary.as_ref().map(|d| d as &dyn DiaryStore),
    )?;

    Ok(AnalyzeResult {
        summary,
        exit_code: ExitCode::Success,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> AppConfig {
        toml::from_str(toml).unwrap_or_default()
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let cfg = config(
            r"
[general]
recursive = true

[output]
format = 'json'
pretty = true

[diary]
path = 'cfg.jsonl'
record = true
",
        );
        let args = AnalyzeArgs::default().with_config(&cfg);

        assert!(args.recursive);
        assert!(args.pretty);
        assert!(args.record);
        assert_eq!(args.format(), OutputFormat::Json);
        assert_eq!(args.diary, Some(PathBuf::from("cfg.jsonl")));
    }

    #[test]
    fn test_cli_wins_over_config() {
        let cfg = config(
            r"
[output]
format = 'json'

[diary]
path = 'cfg.jsonl'
",
        );
        let args = AnalyzeArgs {
            format: Some(OutputFormat::Jsonl),
            diary: Some(PathBuf::from("cli.jsonl")),
            ..AnalyzeArgs::default()
        }
        .with_config(&cfg);

        assert_eq!(args.format(), OutputFormat::Jsonl);
        assert_eq!(args.diary, Some(PathBuf::from("cli.jsonl")));
    }

    #[test]
    fn test_defaults_without_config() {
        let args = AnalyzeArgs::default().with_config(&AppConfig::default());
        assert!(!args.recursive);
        assert!(!args.record);
        assert_eq!(args.format(), OutputFormat::Jsonl);
        assert!(args.diary.is_some());
    }

    #[test]
    fn test_run_requires_paths() {
        let Err(e) = run(&AnalyzeArgs::default()) else {
            panic!("empty paths should fail");
        };
        assert!(e.to_string().contains("No paths specified"));
    }
}
