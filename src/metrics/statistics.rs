//! Basic text statistics.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// Counts and averages over the tokenized document.
///
/// All averages are arithmetic means; when the denominator sequence is empty
/// the average is reported as 0 rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStatistics {
    /// Total characters in the raw text (Unicode scalar values)
    pub character_count: usize,
    /// Characters excluding space characters
    pub character_count_no_spaces: usize,
    /// Number of words
    pub word_count: usize,
    /// Number of sentences
    pub sentence_count: usize,
    /// Number of paragraphs
    pub paragraph_count: usize,
    /// Mean words per sentence (0 if no sentences)
    pub average_words_per_sentence: f64,
    /// Mean sentences per paragraph (0 if no paragraphs)
    pub average_sentences_per_paragraph: f64,
    /// Mean word length in letters (0 if no words)
    pub average_word_length: f64,
}

/// Compute basic statistics from the raw text and its shared tokenization.
pub fn basic_statistics(
    text: &str,
    words: &[Token],
    sentences: &[Token],
    paragraphs: &[Token],
) -> BasicStatistics {
    let total_word_len: usize = words.iter().map(|w| w.len()).sum();

    BasicStatistics {
        character_count: text.chars().count(),
        character_count_no_spaces: text.chars().filter(|&c| c != ' ').count(),
        word_count: words.len(),
        sentence_count: sentences.len(),
        paragraph_count: paragraphs.len(),
        average_words_per_sentence: mean(words.len(), sentences.len()),
        average_sentences_per_paragraph: mean(sentences.len(), paragraphs.len()),
        average_word_length: mean(total_word_len, words.len()),
    }
}

/// Arithmetic mean with 0 substituted for an empty denominator.
fn mean(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
