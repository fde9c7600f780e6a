//! Lexicon-based sentiment classification.
//!
//! Sentiment deliberately uses a different tokenization from the rest of the
//! engine: plain whitespace splitting with punctuation stripped from token
//! edges only. Unifying it with the letter-only word tokenizer would change
//! numeric outputs, so the mismatch is preserved.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::util::round::round3;

/// Positive sentiment lexicon.
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "brilliant",
    "outstanding", "superb", "magnificent", "perfect", "beautiful", "love", "like", "enjoy",
    "happy", "pleased", "satisfied", "delighted", "thrilled", "excited", "positive", "best",
    "better", "success", "successful", "win", "winner", "victory",
];

/// Negative sentiment lexicon.
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disgusting", "hate", "dislike", "angry", "sad",
    "disappointed", "frustrated", "annoyed", "upset", "worried", "concerned", "problem", "issue",
    "fail", "failure", "lose", "loss", "wrong", "error", "mistake", "difficult", "hard",
    "impossible", "never", "worst", "worse", "negative", "poor",
];

/// Positive lexicon as a HashSet. Read-only, never mutated at runtime.
pub static POSITIVE_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().map(|&s| s.to_string()).collect());

/// Negative lexicon as a HashSet. Read-only, never mutated at runtime.
pub static NEGATIVE_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().map(|&s| s.to_string()).collect());

/// Sentiment classification of a document.
///
/// `confidence` and `sentiment_ratio` are rounded to 3 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// "Positive", "Negative", or "Neutral"
    pub sentiment: String,
    /// Share of tokens that hit either lexicon (0 when no hits)
    pub confidence: f64,
    /// Tokens found in the positive lexicon
    pub positive_words_count: usize,
    /// Tokens found in the negative lexicon
    pub negative_words_count: usize,
    /// Tokens found in neither lexicon
    pub neutral_words_count: usize,
    /// (positive - negative) / total tokens (0 if no tokens)
    pub sentiment_ratio: f64,
}

/// Classify sentiment from the sentiment pipeline's tokens.
///
/// `tokens` must come from the whitespace pipeline (lower-cased, edge
/// punctuation stripped). Tokens marked stopped were emptied by stripping;
/// they count toward the total but can hit neither lexicon. If no token hits
/// either lexicon the classification is "Neutral" with confidence 0;
/// otherwise the score `(positive - negative) / (positive + negative)` is
/// classified "Positive" above 0.1 and "Negative" below -0.1.
pub fn sentiment(tokens: &[Token]) -> SentimentReport {
    let total_tokens = tokens.len();

    let positive_count = tokens
        .iter()
        .filter(|t| !t.is_stopped() && POSITIVE_WORDS_SET.contains(&t.text))
        .count();
    let negative_count = tokens
        .iter()
        .filter(|t| !t.is_stopped() && NEGATIVE_WORDS_SET.contains(&t.text))
        .count();
    let neutral_count = total_tokens - positive_count - negative_count;

    let total_sentiment_words = positive_count + negative_count;

    let (sentiment, confidence) = if total_sentiment_words == 0 {
        ("Neutral", 0.0)
    } else {
        let score =
            (positive_count as f64 - negative_count as f64) / total_sentiment_words as f64;
        let confidence = total_sentiment_words as f64 / total_tokens as f64;

        let label = if score > 0.1 {
            "Positive"
        } else if score < -0.1 {
            "Negative"
        } else {
            "Neutral"
        };
        (label, confidence)
    };

    let sentiment_ratio = if total_tokens == 0 {
        0.0
    } else {
        (positive_count as f64 - negative_count as f64) / total_tokens as f64
    };

    SentimentReport {
        sentiment: sentiment.to_string(),
        confidence: round3(confidence),
        positive_words_count: positive_count,
        negative_words_count: negative_count,
        neutral_words_count: neutral_count,
        sentiment_ratio: round3(sentiment_ratio),
    }
}
