//! CLI command definitions and handlers.

pub mod analyze;
pub mod diary;

use clap::{Parser, Subcommand};

/// ōly skin - estimate hydration and acne severity from skin photos
#[derive(Parser)]
#[command(name = "oly-skin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared analyze arguments (paths, output, diary).
    #[command(flatten)]
    pub analyze: analyze::AnalyzeArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Score photos for hydration and acne severity
    Analyze(analyze::AnalyzeArgs),
    /// Record photos in and review the skin diary
    Diary(diary::DiaryArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Completed; some photos may still lack scores.
    Success = 0,
    /// Invalid arguments or an I/O failure.
    Error = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
