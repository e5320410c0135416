//! The SPIMI build driver.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::index::block::{Block, DEFAULT_BLOCK_TERM_LIMIT};
use crate::index::doc_map::DocMap;
use crate::index::store::BlockStore;

/// Configuration for an [`IndexWriter`].
#[derive(Debug, Clone)]
pub struct IndexWriterConfig {
    /// Distinct-term capacity of the in-memory block.
    pub block_term_limit: usize,
}

impl Default for IndexWriterConfig {
    fn default() -> Self {
        IndexWriterConfig {
            block_term_limit: DEFAULT_BLOCK_TERM_LIMIT,
        }
    }
}

/// Streams analyzed documents into capped blocks and flushes full blocks to
/// the block store.
///
/// The writer owns all build state: the current block, the block counter,
/// the document counter, and the docID → path mapping. Document identifiers
/// start at 1 and follow the order in which documents are handed to the
/// writer; a document registered as unreadable still consumes its
/// identifier.
///
/// The capacity check runs per inserted posting, so the flush fires exactly
/// when the distinct-term count reaches the configured limit — possibly in
/// the middle of a document. A flush writes the block once; on failure the
/// error is returned, the block's postings are dropped either way, and the
/// writer stays usable.
pub struct IndexWriter {
    analyzer: Arc<dyn Analyzer>,
    store: BlockStore,
    block: Block,
    block_files: Vec<PathBuf>,
    blocks_written: usize,
    doc_map: DocMap,
    next_doc_id: u64,
}

impl IndexWriter {
    /// Create a writer flushing blocks into `block_dir`.
    pub fn new(
        analyzer: Arc<dyn Analyzer>,
        block_dir: &Path,
        config: IndexWriterConfig,
    ) -> Result<Self> {
        let store = BlockStore::open(block_dir)?;
        Ok(IndexWriter {
            analyzer,
            store,
            block: Block::with_term_limit(config.block_term_limit),
            block_files: Vec::new(),
            blocks_written: 0,
            doc_map: DocMap::new(),
            next_doc_id: 1,
        })
    }

    /// Analyze one document and add its postings, returning the assigned
    /// document identifier.
    pub fn add_document(&mut self, path: &Path, text: &str) -> Result<u64> {
        let doc_id = self.assign_doc_id(path);
        let tokens = self.analyzer.analyze(text)?;
        for token in tokens {
            self.block.insert(&token.text, doc_id, token.position as u32);
            if self.block.is_full() {
                self.flush()?;
            }
        }
        Ok(doc_id)
    }

    /// Assign an identifier to a document whose content could not be read.
    /// It appears in the docID → path mapping but contributes no postings.
    pub fn skip_document(&mut self, path: &Path) -> u64 {
        self.assign_doc_id(path)
    }

    fn assign_doc_id(&mut self, path: &Path) -> u64 {
        let doc_id = self.next_doc_id;
        self.next_doc_id += 1;
        self.doc_map.insert(doc_id, path.to_path_buf());
        doc_id
    }

    /// Write the current block to the store and reset it. A no-op for an
    /// empty block. The write is attempted once; no retry.
    pub fn flush(&mut self) -> Result<()> {
        if self.block.is_empty() {
            return Ok(());
        }
        let block_number = self.blocks_written + 1;
        let written = self.store.write_block(block_number, &self.block);
        self.block.clear();
        let path = written?;
        self.blocks_written += 1;
        self.block_files.push(path);
        Ok(())
    }

    /// Number of documents registered so far.
    pub fn doc_count(&self) -> u64 {
        self.next_doc_id - 1
    }

    /// Number of blocks successfully written.
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    /// Distinct terms held by the current in-memory block.
    pub fn pending_terms(&self) -> usize {
        self.block.term_count()
    }

    /// The block files written so far, in block order.
    pub fn block_files(&self) -> &[PathBuf] {
        &self.block_files
    }

    /// The docID → path mapping built so far.
    pub fn doc_map(&self) -> &DocMap {
        &self.doc_map
    }

    /// Flush the final block and hand back the block file list and the
    /// docID → path mapping.
    pub fn finish(mut self) -> Result<(Vec<PathBuf>, DocMap)> {
        self.flush()?;
        Ok((self.block_files, self.doc_map))
    }
}
