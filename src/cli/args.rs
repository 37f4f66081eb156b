//! Command line argument parsing for the typofix CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// typofix - dictionary-based text auto-correction
#[derive(Parser, Debug, Clone)]
#[command(name = "typofix")]
#[command(about = "Correct common misspellings in free-form text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypofixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Load additional correction rules from a file (one "wrong correct"
    /// pair per line) before running the command
    #[arg(long, value_name = "RULES_FILE")]
    pub rules_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TypofixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a piece of text (reads stdin when no text is given)
    Correct(CorrectArgs),

    /// Get correction suggestions for a single word
    Suggest(SuggestArgs),

    /// List all correction rules
    Rules,

    /// Start an interactive correction session
    Session,
}

/// Arguments for the correct command
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Text to correct; stdin is read line by line when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for the suggest command
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance between the word and a rule key
    #[arg(short = 'd', long, default_value = "2")]
    pub max_distance: usize,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
