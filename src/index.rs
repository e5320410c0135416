//! Blocked (SPIMI-style) construction of the positional inverted index.
//!
//! Documents stream through the analyzer into an in-memory [`block::Block`]
//! capped at a fixed number of distinct terms. Full blocks are written to
//! disk through the [`store`] as sorted JSONL record streams, then the
//! [`merger::BlockMerger`] unions every block into one read-only
//! [`inverted::InvertedIndex`]. The [`writer::IndexWriter`] drives the whole
//! build and assigns document identifiers.

use std::collections::BTreeMap;

pub mod block;
pub mod doc_map;
pub mod inverted;
pub mod merger;
pub mod store;
pub mod writer;

pub use block::Block;
pub use doc_map::DocMap;
pub use inverted::InvertedIndex;
pub use merger::{BlockMerger, MergeResult};
pub use store::{BlockStore, TermRecord};
pub use writer::{IndexWriter, IndexWriterConfig};

/// Positions of one term within the documents that contain it.
pub type PostingMap = BTreeMap<u64, Vec<u32>>;

/// A sorted dictionary of terms with their postings.
pub type TermMap = BTreeMap<String, PostingMap>;
