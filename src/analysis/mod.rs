//! Text analysis pipeline: tokenizers, token filters, and analyzers.
//!
//! Everything the metric computations consume comes out of this module. The
//! same tokenization contract is shared by all analyses so that derived
//! numbers (word counts, sentence counts) are mutually consistent across
//! reports.

pub mod analyzer;
pub mod syllable;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use syllable::count_syllables;
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, PunctuationStripFilter, StopFilter};
pub use tokenizer::{
    ParagraphTokenizer, SentenceTokenizer, Tokenizer, WhitespaceTokenizer, WordTokenizer,
};
