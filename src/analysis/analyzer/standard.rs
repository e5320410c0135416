//! Standard analyzer: the pipeline used for both documents and queries.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alpha::AlphaFilter;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The default analysis pipeline: whitespace tokenization, alphabetic
/// cleaning with lowercasing, minimum length 3, stop-word removal, Porter2
/// stemming.
///
/// The stop and length checks run on the cleaned, pre-stem text; no length
/// check is applied after stemming. Positions come from the tokenizer, so
/// discarded tokens still consume theirs.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(AlphaFilter::new()))
            .add_filter(Arc::new(LengthFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("standard".to_string());

        Self { inner: analyzer }
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();

        let tokens: Vec<Token> = analyzer
            .analyze("The quick brown fox jumped")
            .unwrap()
            .collect();

        // "the" is a stop word but still consumes position 0
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "quick");
        assert_eq!(tokens[0].position, 1);
        assert_eq!(tokens[1].text, "brown");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[2].text, "fox");
        assert_eq!(tokens[2].position, 3);
        assert_eq!(tokens[3].text, "jump");
        assert_eq!(tokens[3].position, 4);
    }

    #[test]
    fn test_stemming_applied_after_stop_check() {
        let analyzer = StandardAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("cats running quickly").unwrap().collect();

        let terms: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(terms, vec!["cat", "run", "quickli"]);
    }

    #[test]
    fn test_short_stems_are_kept() {
        let analyzer = StandardAnalyzer::new();

        // "ties" survives the pre-stem length check, then stems to "tie";
        // no length check runs after stemming
        let tokens: Vec<Token> = analyzer.analyze("ties").unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "tie");
    }

    #[test]
    fn test_punctuation_only_tokens_consume_positions() {
        let analyzer = StandardAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("wolf -- wolves").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 2);
    }

    #[test]
    fn test_empty_text() {
        let analyzer = StandardAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(StandardAnalyzer::new().name(), "standard");
    }
}
