//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    assess::AssessArgs, completions::CompletionsArgs, norms::NormsCommands, sheet::SheetCommands,
};

#[derive(Parser)]
#[command(name = "artic")]
#[command(author, version, about = "Starticulation articulation assessment")]
#[command(
    long_about = "Assess a child's speech-sound articulation against country-specific developmental norms, from plain text worksheet files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Worksheet management (seed, edit, show)
    #[command(subcommand)]
    Sheet(SheetCommands),

    /// Classify a worksheet and print the clinical report
    Assess(AssessArgs),

    /// Show the developmental norm tables
    #[command(subcommand)]
    Norms(NormsCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (colored table on a terminal)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
