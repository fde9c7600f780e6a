//! The text analysis engine.
//!
//! [`TextAnalyzer`] is the single entry point: it tokenizes the input once
//! and feeds the shared tokenization into five independent sub-analyses
//! (statistics, readability, frequency, sentiment, complexity), assembling
//! one [`AnalysisReport`]. Each sub-analysis is also callable on its own
//! with the same tokenization contract.
//!
//! The engine holds no per-call state; the only process-wide data are the
//! immutable stop-word set and sentiment lexicons, so concurrent calls from
//! multiple threads need no locking.
//!
//! # Examples
//!
//! ```
//! use prosa::engine::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new().unwrap();
//! let report = analyzer.analyze("Cats are great. Dogs are great too!").unwrap();
//!
//! assert!(report.error.is_none());
//! assert_eq!(report.basic_statistics.unwrap().word_count, 7);
//! assert_eq!(report.sentiment.unwrap().sentiment, "Positive");
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::Token;
use crate::analysis::token_filter::{LowercaseFilter, PunctuationStripFilter, StopFilter};
use crate::analysis::tokenizer::{
    ParagraphTokenizer, SentenceTokenizer, Tokenizer, WhitespaceTokenizer, WordTokenizer,
};
use crate::error::Result;
use crate::metrics::complexity::{self, ComplexityReport};
use crate::metrics::frequency::{self, FrequencyReport};
use crate::metrics::readability::{self, ReadabilityReport};
use crate::metrics::sentiment::{self, SentimentReport};
use crate::metrics::statistics::{self, BasicStatistics};

/// Default number of entries in the top-words listings.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Error message reported for empty (or whitespace-only) input.
pub const EMPTY_TEXT_ERROR: &str = "Empty text provided";

/// The shared tokenization of one document.
///
/// Produced once per analysis call and consumed read-only by every
/// sub-analysis, so cross-report numbers are mutually consistent.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    /// Words: maximal runs of ASCII letters, case preserved
    pub words: Vec<Token>,
    /// Sentences: fragments between runs of `.`/`!`/`?`, trimmed
    pub sentences: Vec<Token>,
    /// Paragraphs: fragments between blank lines, trimmed
    pub paragraphs: Vec<Token>,
}

/// The output aggregate of one [`TextAnalyzer::analyze`] call.
///
/// Empty input populates only `error`; otherwise all five sub-reports are
/// present and `error` is absent. Degenerate conditions inside a sub-report
/// (no sentences, no lexicon hits) are represented within that sub-report,
/// never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Top-level error, only for empty input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_statistics: Option<BasicStatistics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_frequency: Option<FrequencyReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexityReport>,
}

impl AnalysisReport {
    /// Build an error-only report.
    fn from_error<S: Into<String>>(message: S) -> Self {
        AnalysisReport {
            error: Some(message.into()),
            basic_statistics: None,
            readability: None,
            word_frequency: None,
            sentiment: None,
            complexity: None,
        }
    }
}

/// The stateless text analysis engine.
///
/// Construction compiles the tokenizer patterns and assembles the sentiment
/// pipeline; after that every method is a pure function of its input text.
/// The engine is `Send + Sync` and can be shared across threads freely.
pub struct TextAnalyzer {
    word_tokenizer: WordTokenizer,
    sentence_tokenizer: SentenceTokenizer,
    paragraph_tokenizer: ParagraphTokenizer,
    stop_filter: StopFilter,
    sentiment_pipeline: PipelineAnalyzer,
}

impl TextAnalyzer {
    /// Create a new text analyzer.
    pub fn new() -> Result<Self> {
        // Sentiment intentionally tokenizes on whitespace rather than with
        // the word tokenizer; see the sentiment module.
        let sentiment_pipeline = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationStripFilter::new()));

        Ok(TextAnalyzer {
            word_tokenizer: WordTokenizer::new()?,
            sentence_tokenizer: SentenceTokenizer::new()?,
            paragraph_tokenizer: ParagraphTokenizer::new()?,
            stop_filter: StopFilter::new(),
            sentiment_pipeline,
        })
    }

    /// Tokenize the text once into the shared tokenization.
    pub fn tokenize(&self, text: &str) -> Result<TokenizedText> {
        Ok(TokenizedText {
            words: self.word_tokenizer.tokenize(text)?.collect(),
            sentences: self.sentence_tokenizer.tokenize(text)?.collect(),
            paragraphs: self.paragraph_tokenizer.tokenize(text)?.collect(),
        })
    }

    /// Compute basic counts and averages.
    pub fn basic_statistics(&self, text: &str) -> Result<BasicStatistics> {
        let doc = self.tokenize(text)?;
        Ok(statistics::basic_statistics(
            text,
            &doc.words,
            &doc.sentences,
            &doc.paragraphs,
        ))
    }

    /// Compute readability scores.
    pub fn readability(&self, text: &str) -> Result<ReadabilityReport> {
        let doc = self.tokenize(text)?;
        Ok(readability::readability(&doc.words, &doc.sentences))
    }

    /// Compute the word-frequency profile with the default top-N.
    pub fn word_frequency(&self, text: &str) -> Result<FrequencyReport> {
        self.word_frequency_top_n(text, DEFAULT_TOP_WORDS)
    }

    /// Compute the word-frequency profile with a caller-supplied top-N.
    pub fn word_frequency_top_n(&self, text: &str, top_n: usize) -> Result<FrequencyReport> {
        let doc = self.tokenize(text)?;
        Ok(frequency::word_frequency(&doc.words, top_n, &self.stop_filter))
    }

    /// Classify sentiment.
    pub fn sentiment(&self, text: &str) -> Result<SentimentReport> {
        let tokens: Vec<Token> = self.sentiment_pipeline.analyze(text)?.collect();
        Ok(sentiment::sentiment(&tokens))
    }

    /// Compute complexity metrics.
    pub fn complexity(&self, text: &str) -> Result<ComplexityReport> {
        let doc = self.tokenize(text)?;
        complexity::complexity(&doc.words, &doc.sentences, &self.word_tokenizer)
    }

    /// Run all five sub-analyses and assemble one report.
    ///
    /// Empty or whitespace-only input yields a report whose only populated
    /// field is `error`; no other condition sets it.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        self.analyze_with_top_words(text, DEFAULT_TOP_WORDS)
    }

    /// Run all five sub-analyses with a caller-supplied top-N for frequency.
    pub fn analyze_with_top_words(&self, text: &str, top_n: usize) -> Result<AnalysisReport> {
        if text.trim().is_empty() {
            return Ok(AnalysisReport::from_error(EMPTY_TEXT_ERROR));
        }

        // One tokenization pass shared by every sub-analysis.
        let doc = self.tokenize(text)?;
        let sentiment_tokens: Vec<Token> = self.sentiment_pipeline.analyze(text)?.collect();

        Ok(AnalysisReport {
            error: None,
            basic_statistics: Some(statistics::basic_statistics(
                text,
                &doc.words,
                &doc.sentences,
                &doc.paragraphs,
            )),
            readability: Some(readability::readability(&doc.words, &doc.sentences)),
            word_frequency: Some(frequency::word_frequency(
                &doc.words,
                top_n,
                &self.stop_filter,
            )),
            sentiment: Some(sentiment::sentiment(&sentiment_tokens)),
            complexity: Some(complexity::complexity(
                &doc.words,
                &doc.sentences,
                &self.word_tokenizer,
            )?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_populates_all_reports() {
        let analyzer = TextAnalyzer::new().unwrap();
        let report = analyzer
            .analyze("Cats are great. Dogs are great too!")
            .unwrap();

        assert!(report.error.is_none());
        assert!(report.basic_statistics.is_some());
        assert!(report.readability.is_some());
        assert!(report.word_frequency.is_some());
        assert!(report.sentiment.is_some());
        assert!(report.complexity.is_some());
    }

    #[test]
    fn test_empty_text_error_report() {
        let analyzer = TextAnalyzer::new().unwrap();

        for text in ["", "   ", "\n\t\n"] {
            let report = analyzer.analyze(text).unwrap();
            assert_eq!(report.error.as_deref(), Some(EMPTY_TEXT_ERROR));
            assert!(report.basic_statistics.is_none());
            assert!(report.readability.is_none());
            assert!(report.word_frequency.is_none());
            assert!(report.sentiment.is_none());
            assert!(report.complexity.is_none());
        }
    }

    #[test]
    fn test_word_counts_consistent_across_reports() {
        let analyzer = TextAnalyzer::new().unwrap();
        let text = "The quick brown fox jumps over the lazy dog. It barked.";

        let doc = analyzer.tokenize(text).unwrap();
        let stats = analyzer.basic_statistics(text).unwrap();
        let report = analyzer.analyze(text).unwrap();

        assert_eq!(stats.word_count, doc.words.len());
        assert_eq!(
            report.basic_statistics.unwrap().word_count,
            doc.words.len()
        );
    }

    #[test]
    fn test_single_sentence_without_punctuation() {
        let analyzer = TextAnalyzer::new().unwrap();
        let stats = analyzer.basic_statistics("hello world").unwrap();

        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn test_sub_analyses_callable_independently() {
        let analyzer = TextAnalyzer::new().unwrap();
        let text = "Numbers only: 123.";

        // Words exist ("Numbers", "only"), so every call succeeds.
        assert!(analyzer.basic_statistics(text).is_ok());
        assert!(analyzer.readability(text).is_ok());
        assert!(analyzer.word_frequency(text).is_ok());
        assert!(analyzer.sentiment(text).is_ok());
        assert!(analyzer.complexity(text).is_ok());
    }

    #[test]
    fn test_top_words_parameter_flows_through() {
        let analyzer = TextAnalyzer::new().unwrap();
        let report = analyzer
            .analyze_with_top_words("alpha beta gamma delta epsilon", 3)
            .unwrap();

        assert_eq!(report.word_frequency.unwrap().top_words.len(), 3);
    }

    #[test]
    fn test_analyzer_is_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextAnalyzer>();
    }

    #[test]
    fn test_empty_report_serialization() {
        let analyzer = TextAnalyzer::new().unwrap();
        let report = analyzer.analyze("").unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value, serde_json::json!({"error": "Empty text provided"}));
    }
}
