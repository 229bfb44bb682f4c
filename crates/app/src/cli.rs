//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "rehearse",
    version,
    about = "Flashcard revision from a themed question dataset"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level for diagnostics on stderr.
    #[arg(long = "log-level", value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevelArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a dataset for integrity defects and print statistics.
    Check(CheckArgs),

    /// List themes with their question counts.
    Themes(ThemesArgs),

    /// Study interactively in the terminal.
    Study(StudyArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the dataset JSON file.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// How many of the most-shared questions to show.
    #[arg(long = "top", default_value_t = 5)]
    pub top: usize,

    /// Emit the full report as JSON instead of text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ThemesArgs {
    /// Path to the dataset JSON file.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Restrict to questions matching these categories (comma separated).
    #[arg(long = "tags", value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Parser)]
pub struct StudyArgs {
    /// Path to the dataset JSON file.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Start with these categories selected (comma separated).
    #[arg(long = "tags", value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
