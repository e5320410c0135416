//! Text analysis: tokenization, filtering, and stemming.
//!
//! Documents and queries go through the same [`analyzer::StandardAnalyzer`]
//! so that their terms agree byte for byte. Positions are assigned by the
//! tokenizer over the raw whitespace-delimited token stream and survive
//! filtering untouched; phrase adjacency is defined over that space.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
