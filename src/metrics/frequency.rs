//! Word frequency analysis.
//!
//! Builds two frequency tables over the lower-cased word tokenization: one
//! over all words and one over content words (words not in the stop-word
//! set). Top-N listings order by descending count with ties broken by
//! first-encountered order.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_filter::StopFilter;

/// A table of word occurrence counts.
///
/// Words are expected lower-cased by the caller. Insertion order is tracked
/// so that [`FrequencyTable::top_n`] breaks count ties stably, by the order
/// words first appeared in the text.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Create an empty frequency table.
    pub fn new() -> Self {
        FrequencyTable {
            counts: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Count one occurrence of a word.
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    /// Get the count for a word (0 if absent).
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all words.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent words with their counts, most frequent first.
    ///
    /// Ties keep first-encountered order (stable sort).
    pub fn top_n(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|word| (word.clone(), self.counts[word]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Word frequency profile of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// Distinct lower-cased words
    pub total_unique_words: usize,
    /// Content-word token count (occurrences, not distinct)
    pub content_words_count: usize,
    /// Distinct content words
    pub unique_content_words: usize,
    /// Distinct words divided by total words (0 if no words)
    pub lexical_diversity: f64,
    /// Top-N words over all words
    pub top_words: Vec<(String, usize)>,
    /// Top-N words excluding stop words
    pub top_content_words: Vec<(String, usize)>,
}

/// Analyze word frequency over the shared word tokenization.
///
/// `top_n` bounds both top listings; the stop filter defines which words
/// count as content words.
pub fn word_frequency(words: &[Token], top_n: usize, stop_filter: &StopFilter) -> FrequencyReport {
    let mut all_words = FrequencyTable::new();
    let mut content_words = FrequencyTable::new();
    let mut content_count = 0usize;

    for word in words {
        let lowered = word.text.to_lowercase();
        all_words.add(&lowered);
        if !stop_filter.is_stop_word(&lowered) {
            content_words.add(&lowered);
            content_count += 1;
        }
    }

    let lexical_diversity = if words.is_empty() {
        0.0
    } else {
        all_words.len() as f64 / words.len() as f64
    };

    FrequencyReport {
        total_unique_words: all_words.len(),
        content_words_count: content_count,
        unique_content_words: content_words.len(),
        lexical_diversity,
        top_words: all_words.top_n(top_n),
        top_content_words: content_words.top_n(top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};

    fn words(text: &str) -> Vec<Token> {
        WordTokenizer::new().unwrap().tokenize(text).unwrap().collect()
    }

    #[test]
    fn test_frequency_table_counts() {
        let mut table = FrequencyTable::new();
        table.add("great");
        table.add("cats");
        table.add("great");

        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
        assert_eq!(table.count("great"), 2);
        assert_eq!(table.count("missing"), 0);
    }

    #[test]
    fn test_top_n_stable_ties() {
        let mut table = FrequencyTable::new();
        for word in ["b", "a", "c", "a", "b", "z"] {
            table.add(word);
        }

        // a and b both have count 2; b was seen first.
        let top = table.top_n(3);
        assert_eq!(
            top,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_word_frequency_report() {
        let tokens = words("Cats are great. Dogs are great too!");
        let report = word_frequency(&tokens, 10, &StopFilter::new());

        // cats, are, great, dogs, too
        assert_eq!(report.total_unique_words, 5);
        // "are" is a stop word; 5 content tokens remain.
        assert_eq!(report.content_words_count, 5);
        assert_eq!(report.unique_content_words, 4);
        assert!((report.lexical_diversity - 5.0 / 7.0).abs() < 1e-12);
        assert_eq!(report.top_content_words[0], ("great".to_string(), 2));
    }

    #[test]
    fn test_top_n_truncates() {
        let tokens = words("one two three four five");
        let report = word_frequency(&tokens, 2, &StopFilter::new());

        assert_eq!(report.top_words.len(), 2);
        assert_eq!(report.total_unique_words, 5);
    }

    #[test]
    fn test_lexical_diversity_bounds() {
        // All distinct -> 1.0
        let tokens = words("alpha beta gamma");
        let report = word_frequency(&tokens, 10, &StopFilter::new());
        assert_eq!(report.lexical_diversity, 1.0);

        // All identical -> 1 / word_count
        let tokens = words("echo echo echo echo");
        let report = word_frequency(&tokens, 10, &StopFilter::new());
        assert_eq!(report.lexical_diversity, 0.25);

        // No words -> 0
        let report = word_frequency(&[], 10, &StopFilter::new());
        assert_eq!(report.lexical_diversity, 0.0);
        assert!(report.top_words.is_empty());
    }

    #[test]
    fn test_case_folding() {
        let tokens = words("Great GREAT great");
        let report = word_frequency(&tokens, 10, &StopFilter::new());

        assert_eq!(report.total_unique_words, 1);
        assert_eq!(report.top_words[0], ("great".to_string(), 3));
    }
}
