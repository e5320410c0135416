//! The merged, read-only positional inverted index.

use std::path::Path;

use crate::error::Result;
use crate::index::store::{self, TermRecord};
use crate::index::{PostingMap, TermMap};

/// File name of the final merged index.
pub const INDEX_FILE_NAME: &str = "pos_inverted_index.json";

/// The global positional index: term → docID → sorted unique positions.
///
/// Built once by the merger and read-only afterwards; any number of
/// concurrent phrase evaluations may share it without locking.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: TermMap,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex {
            terms: TermMap::new(),
        }
    }

    /// Wrap a finalized term dictionary. Position lists must already be
    /// sorted and deduplicated.
    pub fn from_terms(terms: TermMap) -> Self {
        InvertedIndex { terms }
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Check if the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The postings of a term, if the index knows it.
    pub fn postings(&self, term: &str) -> Option<&PostingMap> {
        self.terms.get(term)
    }

    /// The positions of a term within one document.
    pub fn positions(&self, term: &str, doc_id: u64) -> Option<&[u32]> {
        self.terms
            .get(term)
            .and_then(|postings| postings.get(&doc_id))
            .map(|positions| positions.as_slice())
    }

    /// Iterate over (term, postings) pairs in lexicographic term order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PostingMap)> {
        self.terms.iter()
    }

    /// Write the index as a JSONL record stream, one term per line, each
    /// term exactly once, in lexicographic order.
    pub fn save(&self, path: &Path) -> Result<()> {
        store::write_records(
            path,
            self.terms
                .iter()
                .map(|(term, postings)| TermRecord::new(term.clone(), postings.clone())),
        )
    }

    /// Load an index previously written by [`save`](InvertedIndex::save).
    ///
    /// Position lists are re-sorted and deduplicated so the loaded index
    /// upholds the posting invariant even for hand-assembled files.
    pub fn load(path: &Path) -> Result<Self> {
        let mut terms = store::read_block(path)?;
        for postings in terms.values_mut() {
            for positions in postings.values_mut() {
                positions.sort_unstable();
                positions.dedup();
            }
        }
        Ok(InvertedIndex { terms })
    }
}
