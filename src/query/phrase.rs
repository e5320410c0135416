//! Exact phrase matching over the positional index.
//!
//! A phrase matches a document when its terms occur at strictly consecutive
//! positions — position space includes discarded tokens, so a stop word
//! between two query terms in the document breaks adjacency even though the
//! stop word itself is not indexed.

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::index::inverted::InvertedIndex;

/// A phrase query: an ordered sequence of normalized terms.
///
/// An empty query (all input tokens discarded by analysis) is a valid
/// value; [`is_empty`](PhraseQuery::is_empty) distinguishes "nothing to
/// search" from "no documents matched".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseQuery {
    terms: Vec<String>,
}

impl PhraseQuery {
    /// Build a query by normalizing free text with the same analyzer the
    /// index was built with.
    pub fn parse(analyzer: &dyn Analyzer, text: &str) -> Result<Self> {
        let terms = analyzer
            .analyze(text)?
            .map(|token| token.text)
            .collect();
        Ok(PhraseQuery { terms })
    }

    /// Build a query from pre-normalized terms.
    pub fn from_terms(terms: Vec<String>) -> Self {
        PhraseQuery { terms }
    }

    /// The query's terms in phrase order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Check whether analysis left no terms to search.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check whether the phrase occurs in `doc_id` as an unbroken run of
    /// consecutive positions.
    ///
    /// Seeds the candidate set with the first term's positions, then for
    /// each following term keeps only candidates whose successor position
    /// carries that term. Position lists are sorted, so membership is a
    /// binary search.
    pub fn matches(&self, index: &InvertedIndex, doc_id: u64) -> bool {
        let Some(first) = self.terms.first() else {
            return false;
        };
        let Some(positions) = index.positions(first, doc_id) else {
            return false;
        };
        let mut candidates: Vec<u32> = positions.to_vec();

        for term in &self.terms[1..] {
            let Some(positions) = index.positions(term, doc_id) else {
                return false;
            };
            candidates = candidates
                .iter()
                .filter_map(|&p| {
                    let next = p + 1;
                    positions.binary_search(&next).ok().map(|_| next)
                })
                .collect();
            if candidates.is_empty() {
                return false;
            }
        }

        !candidates.is_empty()
    }

    /// All documents matching the phrase, in ascending docID order.
    ///
    /// Candidates are restricted to the documents carrying the first term;
    /// a document that never mentions it is never checked.
    pub fn search(&self, index: &InvertedIndex) -> Vec<u64> {
        let Some(first) = self.terms.first() else {
            return Vec::new();
        };
        let Some(postings) = index.postings(first) else {
            return Vec::new();
        };
        postings
            .keys()
            .copied()
            .filter(|&doc_id| self.matches(index, doc_id))
            .collect()
    }
}
