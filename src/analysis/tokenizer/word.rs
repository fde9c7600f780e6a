//! Word tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{ProsaError, Result};

/// A tokenizer that extracts words as maximal runs of ASCII letters.
///
/// Digits, punctuation, and whitespace act as separators and never appear
/// inside a word, so `"it's 2nd-rate"` produces `["it", "s", "nd", "rate"]`.
/// Case is preserved; downstream filters handle normalization.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract words
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[A-Za-z]+")
            .map_err(|e| ProsaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
