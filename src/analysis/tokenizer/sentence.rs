//! Sentence tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{ProsaError, Result};

/// A tokenizer that splits text into sentences.
///
/// Sentence boundaries are runs of one or more `.`, `!`, or `?` characters.
/// Each fragment between boundaries is trimmed of surrounding whitespace;
/// fragments that are empty after trimming are discarded. Text with no
/// terminal punctuation at all therefore yields exactly one sentence.
#[derive(Clone, Debug)]
pub struct SentenceTokenizer {
    /// The regex matching sentence boundary runs
    boundary: Arc<Regex>,
}

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[.!?]+")
            .map_err(|e| ProsaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(SentenceTokenizer {
            boundary: Arc::new(regex),
        })
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new().expect("Default sentence boundary pattern should be valid")
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(split_gaps(&self.boundary, text))
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}

/// Extract the gaps between matches of `pattern` as trimmed, non-empty tokens.
///
/// Shared by the sentence and paragraph tokenizers, which both define tokens
/// as the text *between* separator runs.
pub(crate) fn split_gaps(pattern: &Regex, text: &str) -> TokenStream {
    let mut tokens = Vec::new();
    let mut last_end = 0;
    let mut position = 0;

    for mat in pattern.find_iter(text) {
        push_trimmed(text, last_end, mat.start(), &mut position, &mut tokens);
        last_end = mat.end();
    }
    push_trimmed(text, last_end, text.len(), &mut position, &mut tokens);

    Box::new(tokens.into_iter())
}

/// Trim the fragment `text[start..end]` and push it as a token if non-empty.
fn push_trimmed(
    text: &str,
    start: usize,
    end: usize,
    position: &mut usize,
    tokens: &mut Vec<Token>,
) {
    let fragment = &text[start..end];
    let trimmed = fragment.trim();
    if trimmed.is_empty() {
        return;
    }

    // Offsets of the trimmed fragment within the original text.
    let leading = fragment.len() - fragment.trim_start().len();
    let token_start = start + leading;
    let token_end = token_start + trimmed.len();

    tokens.push(Token::with_offsets(trimmed, *position, token_start, token_end));
    *position += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_tokenizer() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("Cats are great. Dogs are great too!")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Cats are great");
        assert_eq!(tokens[1].text, "Dogs are great too");
    }

    #[test]
    fn test_boundary_runs_collapse() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("Wait... what?! Really?")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Wait");
        assert_eq!(tokens[1].text, "what");
        assert_eq!(tokens[2].text, "Really");
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_sentence() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "hello world");
    }

    #[test]
    fn test_empty_fragments_discarded() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("...  !? ").unwrap().collect();
        assert!(tokens.is_empty());

        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_trimmed_offsets() {
        let tokenizer = SentenceTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("One.  Two.").unwrap().collect();

        assert_eq!(tokens[1].text, "Two");
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 9);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SentenceTokenizer::new().unwrap().name(), "sentence");
    }
}
