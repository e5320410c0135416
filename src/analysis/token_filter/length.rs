//! Minimum-length filter implementation.

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Default minimum token length: tokens of one or two characters are dropped.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// A filter that removes tokens shorter than a minimum length.
///
/// Applied after cleaning and before stemming; stemming may shorten a term
/// below the minimum again and such terms are kept.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    /// Create a new length filter with the default minimum length.
    pub fn new() -> Self {
        LengthFilter {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Create a length filter with a custom minimum length.
    pub fn with_min_length(min_length: usize) -> Self {
        LengthFilter { min_length }
    }

    /// Get the minimum length enforced by this filter.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || token.len() >= min_length)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
