//! Punctuation strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that removes leading and trailing ASCII punctuation from tokens.
///
/// Interior punctuation is left untouched, so `"isn't"` stays `"isn't"` while
/// `"great,"` becomes `"great"`. A token that is punctuation all the way
/// through is emptied; it is then marked as stopped but kept in the stream,
/// so downstream consumers that count total tokens (the sentiment classifier)
/// still see it.
#[derive(Clone, Debug, Default)]
pub struct PunctuationStripFilter;

impl PunctuationStripFilter {
    /// Create a new punctuation strip filter.
    pub fn new() -> Self {
        PunctuationStripFilter
    }
}

impl Filter for PunctuationStripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let trimmed = token.text.trim_matches(|c: char| c.is_ascii_punctuation());
                    if trimmed.is_empty() {
                        token.with_text("").stop()
                    } else if trimmed.len() == token.text.len() {
                        token
                    } else {
                        let trimmed = trimmed.to_string();
                        token.with_text(trimmed)
                    }
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_punctuation_strip_filter() {
        let filter = PunctuationStripFilter::new();
        let tokens = vec![
            Token::new("great,", 0),
            Token::new("(really)", 1),
            Token::new("plain", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "great");
        assert_eq!(result[1].text, "really");
        assert_eq!(result[2].text, "plain");
    }

    #[test]
    fn test_interior_punctuation_kept() {
        let filter = PunctuationStripFilter::new();
        let tokens = vec![Token::new("isn't", 0), Token::new("e.g.", 1)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result[0].text, "isn't");
        assert_eq!(result[1].text, "e.g");
    }

    #[test]
    fn test_all_punctuation_token_kept_as_stopped() {
        let filter = PunctuationStripFilter::new();
        let tokens = vec![Token::new("---", 0), Token::new("word", 1)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert!(result[0].is_stopped());
        assert!(result[0].is_empty());
        assert_eq!(result[1].text, "word");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(PunctuationStripFilter::new().name(), "punctuation_strip");
    }
}
