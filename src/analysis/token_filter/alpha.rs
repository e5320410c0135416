//! Alphabetic cleaning filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that strips non-alphabetic characters and lowercases the rest.
///
/// A token that cleans to an empty string (digits, punctuation) is marked as
/// stopped but keeps its position.
#[derive(Clone, Debug, Default)]
pub struct AlphaFilter;

impl AlphaFilter {
    /// Create a new alphabetic cleaning filter.
    pub fn new() -> Self {
        AlphaFilter
    }

    fn clean(word: &str) -> String {
        word.chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

impl Filter for AlphaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let cleaned = Self::clean(&token.text);
                    if cleaned.is_empty() {
                        token.stop()
                    } else {
                        token.with_text(cleaned)
                    }
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alpha"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_alpha_filter() {
        let filter = AlphaFilter::new();
        let tokens = vec![
            Token::new("Hello,", 0),
            Token::new("it's", 1),
            Token::new("1984", 2),
            Token::new("world!", 3),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "its");
        // "1984" cleans to nothing but still occupies position 2
        assert!(result[2].is_stopped());
        assert_eq!(result[2].position, 2);
        assert_eq!(result[3].text, "world");
        assert_eq!(result[3].position, 3);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphaFilter::new().name(), "alpha");
    }
}
