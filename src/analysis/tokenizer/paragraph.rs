//! Paragraph tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use super::sentence::split_gaps;
use crate::analysis::token::TokenStream;
use crate::error::{ProsaError, Result};

/// A tokenizer that splits text into paragraphs on blank lines.
///
/// A blank line is a line boundary followed by optional whitespace and
/// another line boundary. Each paragraph is trimmed; empty fragments are
/// discarded.
#[derive(Clone, Debug)]
pub struct ParagraphTokenizer {
    /// The regex matching blank-line separators
    separator: Arc<Regex>,
}

impl ParagraphTokenizer {
    /// Create a new paragraph tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"\n\s*\n")
            .map_err(|e| ProsaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(ParagraphTokenizer {
            separator: Arc::new(regex),
        })
    }
}

impl Default for ParagraphTokenizer {
    fn default() -> Self {
        Self::new().expect("Default paragraph separator pattern should be valid")
    }
}

impl Tokenizer for ParagraphTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(split_gaps(&self.separator, text))
    }

    fn name(&self) -> &'static str {
        "paragraph"
    }
}
