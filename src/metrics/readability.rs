//! Readability scoring.
//!
//! Three independent formula-based grade-level estimates computed over the
//! shared word and sentence tokenization plus the heuristic syllable counts:
//! Flesch Reading Ease, Flesch-Kincaid Grade Level, and the Automated
//! Readability Index. A categorical level label is derived from the Flesch
//! Reading Ease score alone.

use serde::{Deserialize, Serialize};

use crate::analysis::syllable::count_syllables;
use crate::analysis::token::Token;
use crate::util::round::round2;

/// Label reported when there are no words or no sentences to score.
pub const LEVEL_CANNOT_DETERMINE: &str = "Cannot determine";

/// Readability metrics for a document.
///
/// Numeric scores are rounded to 2 decimal places. When the document has no
/// words or no sentences, all scores are 0 and the level is
/// [`LEVEL_CANNOT_DETERMINE`]; no formula is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease, clamped to [0, 100]
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level, never negative
    pub flesch_kincaid_grade: f64,
    /// Automated Readability Index, never negative
    pub automated_readability_index: f64,
    /// Mean words per sentence
    pub average_sentence_length: f64,
    /// Mean estimated syllables per word
    pub average_syllables_per_word: f64,
    /// Categorical label derived from the Flesch Reading Ease score
    pub readability_level: String,
}

impl ReadabilityReport {
    /// The degenerate report for documents that cannot be scored.
    fn cannot_determine() -> Self {
        ReadabilityReport {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            automated_readability_index: 0.0,
            average_sentence_length: 0.0,
            average_syllables_per_word: 0.0,
            readability_level: LEVEL_CANNOT_DETERMINE.to_string(),
        }
    }
}

/// Compute readability metrics from the shared tokenization.
pub fn readability(words: &[Token], sentences: &[Token]) -> ReadabilityReport {
    if words.is_empty() || sentences.is_empty() {
        return ReadabilityReport::cannot_determine();
    }

    let word_count = words.len() as f64;
    let sentence_count = sentences.len() as f64;
    let total_syllables: usize = words.iter().map(|w| count_syllables(&w.text)).sum();
    let total_chars: usize = words.iter().map(|w| w.len()).sum();

    let avg_sentence_length = word_count / sentence_count;
    let avg_syllables_per_word = total_syllables as f64 / word_count;

    // Flesch Reading Ease
    let flesch_ease = 206.835 - (1.015 * avg_sentence_length) - (84.6 * avg_syllables_per_word);
    let flesch_ease = flesch_ease.clamp(0.0, 100.0);

    // Flesch-Kincaid Grade Level
    let flesch_grade = (0.39 * avg_sentence_length) + (11.8 * avg_syllables_per_word) - 15.59;
    let flesch_grade = flesch_grade.max(0.0);

    // Automated Readability Index
    let ari = (4.71 * (total_chars as f64 / word_count)) + (0.5 * avg_sentence_length) - 21.43;
    let ari = ari.max(0.0);

    ReadabilityReport {
        flesch_reading_ease: round2(flesch_ease),
        flesch_kincaid_grade: round2(flesch_grade),
        automated_readability_index: round2(ari),
        average_sentence_length: round2(avg_sentence_length),
        average_syllables_per_word: round2(avg_syllables_per_word),
        readability_level: readability_level(flesch_ease).to_string(),
    }
}

/// Map a (clamped) Flesch Reading Ease score to its level label.
///
/// Thresholds are inclusive lower bounds.
pub fn readability_level(flesch_ease: f64) -> &'static str {
    if flesch_ease >= 90.0 {
        "Very Easy"
    } else if flesch_ease >= 80.0 {
        "Easy"
    } else if flesch_ease >= 70.0 {
        "Fairly Easy"
    } else if flesch_ease >= 60.0 {
        "Standard"
    } else if flesch_ease >= 50.0 {
        "Fairly Difficult"
    } else if flesch_ease >= 30.0 {
        "Difficult"
    } else {
        "Very Difficult"
    }
}
