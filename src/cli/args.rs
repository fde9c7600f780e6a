//! Command line argument parsing for the Prosa CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Prosa - text statistics, readability, and sentiment analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "prosa")]
#[command(about = "Analyze text: statistics, readability, frequency, sentiment, complexity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ProsaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ProsaArgs {
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

/// Output format for reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable sectioned output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run all analyses and print one combined report
    Analyze(AnalyzeArgs),

    /// Basic statistics (counts and averages)
    Stats(InputArgs),

    /// Readability scores (Flesch, Flesch-Kincaid, ARI)
    Readability(InputArgs),

    /// Word frequency and lexical diversity
    Frequency(FrequencyArgs),

    /// Lexicon-based sentiment classification
    Sentiment(InputArgs),

    /// Complexity metrics and composite score
    Complexity(InputArgs),
}

/// Text input source, shared by all commands.
///
/// Text comes either from one or more files or from a literal `--text`
/// argument; providing neither is an error. Multiple files are analyzed
/// independently (and in parallel).
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Text file(s) to analyze
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Literal text to analyze instead of reading files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "files")]
    pub text: Option<String>,
}

/// Arguments for the combined analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of top words to report
    #[arg(long = "top-words", default_value = "10", value_name = "N")]
    pub top_words: usize,
}

/// Arguments for frequency analysis
#[derive(Parser, Debug, Clone)]
pub struct FrequencyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of top words to report
    #[arg(long = "top-words", default_value = "10", value_name = "N")]
    pub top_words: usize,
}
