//! # Prosa
//!
//! A fast, comprehensive text statistics and analysis library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Shared tokenization (words, sentences, paragraphs) across all metrics
//! - Readability scoring (Flesch Reading Ease, Flesch-Kincaid, ARI)
//! - Word frequency and lexical diversity profiles
//! - Lexicon-based sentiment classification
//! - Composite complexity scoring
//! - Stateless engine, safe to share across threads

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod util;

pub use engine::{AnalysisReport, TextAnalyzer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
