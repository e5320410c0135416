//! In-memory index block with a distinct-term capacity.

use crate::index::store::TermRecord;
use crate::index::{PostingMap, TermMap};

/// Default maximum number of distinct terms held by a block before it is
/// flushed to disk.
pub const DEFAULT_BLOCK_TERM_LIMIT: usize = 2500;

/// An in-memory mapping from terms to raw postings.
///
/// A block covers a window of the document stream, not a partition of the
/// term space; the same term may appear in many blocks. Positions are
/// appended as they arrive and may hold duplicates or be out of order —
/// they are sorted and deduplicated once, when the block is turned into
/// records for serialization. A flushed block is never modified again.
#[derive(Debug, Clone)]
pub struct Block {
    terms: TermMap,
    term_limit: usize,
}

impl Block {
    /// Create an empty block with the default term limit.
    pub fn new() -> Self {
        Self::with_term_limit(DEFAULT_BLOCK_TERM_LIMIT)
    }

    /// Create an empty block with a custom term limit.
    pub fn with_term_limit(term_limit: usize) -> Self {
        Block {
            terms: TermMap::new(),
            term_limit,
        }
    }

    /// Append a position for a (term, document) pair.
    pub fn insert(&mut self, term: &str, doc_id: u64, position: u32) {
        self.terms
            .entry(term.to_string())
            .or_default()
            .entry(doc_id)
            .or_default()
            .push(position);
    }

    /// Number of distinct terms currently held.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// The configured distinct-term capacity.
    pub fn term_limit(&self) -> usize {
        self.term_limit
    }

    /// Check whether the block has reached its distinct-term capacity.
    pub fn is_full(&self) -> bool {
        self.terms.len() >= self.term_limit
    }

    /// Check whether the block holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Drop all postings, making the block ready for reuse.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Access the raw term dictionary.
    pub fn terms(&self) -> &TermMap {
        &self.terms
    }

    /// Produce the block's serializable records in lexicographic term order,
    /// with each position list sorted and deduplicated.
    pub fn records(&self) -> Vec<TermRecord> {
        self.terms
            .iter()
            .map(|(term, postings)| {
                let mut finalized = PostingMap::new();
                for (&doc_id, positions) in postings {
                    let mut positions = positions.clone();
                    positions.sort_unstable();
                    positions.dedup();
                    finalized.insert(doc_id, positions);
                }
                TermRecord::new(term.clone(), finalized)
            })
            .collect()
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}
