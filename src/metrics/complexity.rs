//! Text complexity scoring.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::Result;
use crate::util::round::round2;

/// Complexity analysis of a document.
///
/// When the document has no words or no sentences, only `error` is set and
/// no metrics are reported; otherwise `error` is absent and the metrics are
/// flattened into the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// Why no metrics could be computed, when they could not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The metrics, absent in the error case
    #[serde(flatten)]
    pub metrics: Option<ComplexityMetrics>,
}

/// The computed complexity metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    /// Percentage of words longer than 6 letters
    pub long_words_percentage: f64,
    /// Words longer than 10 letters
    pub very_long_words_count: usize,
    /// Mean word length in letters
    pub average_word_length: f64,
    /// Population variance of per-sentence word counts, rounded to 2 decimals
    pub sentence_length_variance: f64,
    /// Weighted composite of word length, sentence length, and word variety,
    /// rounded to 2 decimals
    pub complexity_score: f64,
    /// Reading time at 200 words per minute, unrounded
    pub estimated_reading_time_minutes: f64,
}

impl ComplexityReport {
    /// Build an error-only report.
    pub fn from_error<S: Into<String>>(message: S) -> Self {
        ComplexityReport {
            error: Some(message.into()),
            metrics: None,
        }
    }
}

/// Words-per-minute constant for the reading-time estimate.
const READING_SPEED_WPM: f64 = 200.0;

/// Compute complexity metrics from the shared tokenization.
///
/// Each sentence is re-tokenized with the word tokenizer to obtain its word
/// count for the variance metric.
pub fn complexity(
    words: &[Token],
    sentences: &[Token],
    word_tokenizer: &WordTokenizer,
) -> Result<ComplexityReport> {
    if words.is_empty() {
        return Ok(ComplexityReport::from_error("No words found in text"));
    }
    if sentences.is_empty() {
        return Ok(ComplexityReport::from_error("No sentences found in text"));
    }

    let word_count = words.len() as f64;
    let long_words = words.iter().filter(|w| w.len() > 6).count();
    let very_long_words = words.iter().filter(|w| w.len() > 10).count();
    let total_word_len: usize = words.iter().map(|w| w.len()).sum();
    let avg_word_length = total_word_len as f64 / word_count;

    // Population variance of per-sentence word counts.
    let mut sentence_lengths = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let count = word_tokenizer.tokenize(&sentence.text)?.count();
        sentence_lengths.push(count as f64);
    }
    let mean_sentence_length =
        sentence_lengths.iter().sum::<f64>() / sentence_lengths.len() as f64;
    let variance = sentence_lengths
        .iter()
        .map(|len| (len - mean_sentence_length).powi(2))
        .sum::<f64>()
        / sentence_lengths.len() as f64;

    let complexity_score = complexity_score(words, sentences);

    Ok(ComplexityReport {
        error: None,
        metrics: Some(ComplexityMetrics {
            long_words_percentage: (long_words as f64 / word_count) * 100.0,
            very_long_words_count: very_long_words,
            average_word_length: avg_word_length,
            sentence_length_variance: round2(variance),
            complexity_score,
            estimated_reading_time_minutes: word_count / READING_SPEED_WPM,
        }),
    })
}

/// Weighted composite score over word length, sentence length, and variety.
///
/// `0.3 * avg_word_length + 0.4 * avg_sentence_length + 0.3 * unique_ratio`,
/// rounded to 2 decimals. Both word and sentence counts are known non-zero
/// by the caller.
fn complexity_score(words: &[Token], sentences: &[Token]) -> f64 {
    let word_count = words.len() as f64;
    let total_word_len: usize = words.iter().map(|w| w.len()).sum();
    let avg_word_length = total_word_len as f64 / word_count;
    let avg_sentence_length = word_count / sentences.len() as f64;

    let unique: std::collections::HashSet<String> =
        words.iter().map(|w| w.text.to_lowercase()).collect();
    let unique_words_ratio = unique.len() as f64 / word_count;

    round2((avg_word_length * 0.3) + (avg_sentence_length * 0.4) + (unique_words_ratio * 0.3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::SentenceTokenizer;

    fn tokenize(text: &str) -> (Vec<Token>, Vec<Token>) {
        let words: Vec<Token> = WordTokenizer::new().unwrap().tokenize(text).unwrap().collect();
        let sentences: Vec<Token> = SentenceTokenizer::new()
            .unwrap()
            .tokenize(text)
            .unwrap()
            .collect();
        (words, sentences)
    }

    fn metrics_for(text: &str) -> ComplexityMetrics {
        let (words, sentences) = tokenize(text);
        let tokenizer = WordTokenizer::new().unwrap();
        complexity(&words, &sentences, &tokenizer)
            .unwrap()
            .metrics
            .unwrap()
    }

    #[test]
    fn test_word_length_metrics() {
        // "lengthy" (7) and "extraordinary" (13) are long; only the latter
        // is very long.
        let m = metrics_for("a lengthy extraordinary cat");

        assert_eq!(m.very_long_words_count, 1);
        assert!((m.long_words_percentage - 50.0).abs() < 1e-12);
        assert!((m.average_word_length - 24.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_length_variance() {
        // Sentences of 1 and 3 words: mean 2, population variance 1.
        let m = metrics_for("Stop. The cat ran.");
        assert_eq!(m.sentence_length_variance, 1.0);

        // Uniform sentence lengths have zero variance.
        let m = metrics_for("One two. Three four. Five six.");
        assert_eq!(m.sentence_length_variance, 0.0);
    }

    #[test]
    fn test_complexity_score_weighting() {
        // 2 words, 1 sentence, both unique, lengths 3 and 3.
        // 0.3 * 3 + 0.4 * 2 + 0.3 * 1 = 2.0
        let m = metrics_for("cat dog");
        assert_eq!(m.complexity_score, 2.0);
    }

    #[test]
    fn test_reading_time() {
        let m = metrics_for("one two three four");
        assert_eq!(m.estimated_reading_time_minutes, 4.0 / 200.0);
    }

    #[test]
    fn test_error_when_no_words() {
        let (words, sentences) = tokenize("123 456");
        let tokenizer = WordTokenizer::new().unwrap();
        let report = complexity(&words, &sentences, &tokenizer).unwrap();

        assert_eq!(report.error.as_deref(), Some("No words found in text"));
        assert!(report.metrics.is_none());
    }

    #[test]
    fn test_error_report_serialization_is_flat() {
        let report = ComplexityReport::from_error("No words found in text");
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"error": "No words found in text"})
        );
    }

    #[test]
    fn test_metrics_serialization_is_flat() {
        let m = metrics_for("cat dog");
        let report = ComplexityReport {
            error: None,
            metrics: Some(m),
        };
        let value = serde_json::to_value(&report).unwrap();

        assert!(value.get("error").is_none());
        assert!(value.get("complexity_score").is_some());
        assert!(value.get("metrics").is_none());
    }
}
