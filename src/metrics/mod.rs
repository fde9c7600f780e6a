//! Metric computations over tokenized text.
//!
//! Each submodule owns one sub-report of the analysis: basic statistics,
//! readability scores, word-frequency profiles, sentiment classification,
//! and the composite complexity score. All of them consume the shared
//! tokenization produced by the engine; none depends on another's output.

pub mod complexity;
pub mod frequency;
pub mod readability;
pub mod sentiment;
pub mod statistics;

pub use complexity::{ComplexityMetrics, ComplexityReport};
pub use frequency::{FrequencyReport, FrequencyTable};
pub use readability::ReadabilityReport;
pub use sentiment::SentimentReport;
pub use statistics::BasicStatistics;
