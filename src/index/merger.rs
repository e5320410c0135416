//! External merge of flushed blocks into the global index.

use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::error::PilumError;
use crate::index::inverted::InvertedIndex;
use crate::index::store;
use crate::index::{PostingMap, TermMap};

/// The outcome of a merge: the global index plus a report of any blocks
/// that had to be skipped.
#[derive(Debug)]
pub struct MergeResult {
    /// The merged global index.
    pub index: InvertedIndex,
    /// Number of blocks whose postings made it into the index.
    pub merged_blocks: usize,
    /// Blocks that could not be read or decoded, with the reason. Their
    /// contribution is missing from the index; everything else is intact.
    pub skipped: Vec<(PathBuf, PilumError)>,
}

/// Merges any number of block files into one [`InvertedIndex`].
///
/// For every (term, docID) pair the position lists contributed by the
/// blocks are concatenated, then sorted and deduplicated exactly once after
/// all blocks are consumed. The union is order-independent: any permutation
/// of the block list produces an identical index.
#[derive(Debug, Clone, Default)]
pub struct BlockMerger;

impl BlockMerger {
    /// Create a new block merger.
    pub fn new() -> Self {
        BlockMerger
    }

    /// Merge the given block files. A block that fails to open or decode is
    /// skipped and reported in the result; the merge always completes.
    pub fn merge(&self, block_files: &[PathBuf]) -> MergeResult {
        let mut accumulator: AHashMap<String, AHashMap<u64, Vec<u32>>> = AHashMap::new();
        let mut merged_blocks = 0;
        let mut skipped = Vec::new();

        for path in block_files {
            match store::read_block(path) {
                Ok(block_terms) => {
                    merged_blocks += 1;
                    for (term, postings) in block_terms {
                        let term_entry = accumulator.entry(term).or_default();
                        for (doc_id, positions) in postings {
                            term_entry.entry(doc_id).or_default().extend(positions);
                        }
                    }
                }
                Err(e) => skipped.push((path.clone(), e)),
            }
        }

        // One sort + dedup pass per (term, docID) pair
        let mut terms = TermMap::new();
        for (term, postings) in accumulator {
            let mut posting_map = PostingMap::new();
            for (doc_id, mut positions) in postings {
                positions.sort_unstable();
                positions.dedup();
                posting_map.insert(doc_id, positions);
            }
            terms.insert(term, posting_map);
        }

        MergeResult {
            index: InvertedIndex::from_terms(terms),
            merged_blocks,
            skipped,
        }
    }

    /// Merge every block file found in `dir`, in file name order.
    pub fn merge_dir(&self, dir: &Path) -> crate::error::Result<MergeResult> {
        let mut block_files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if path.is_file()
                && name.starts_with(store::BLOCK_FILE_PREFIX)
                && name.ends_with(store::BLOCK_FILE_SUFFIX)
            {
                block_files.push(path);
            }
        }
        block_files.sort();
        Ok(self.merge(&block_files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::block::Block;
    use crate::index::store::BlockStore;
    use std::fs;

    fn write_two_blocks(store: &BlockStore) -> Vec<PathBuf> {
        // Block 1: docs 1-2
        let mut first = Block::new();
        first.insert("quick", 1, 1);
        first.insert("brown", 1, 2);
        first.insert("quick", 2, 0);

        // Block 2: docs 3-4, sharing "quick" with block 1
        let mut second = Block::new();
        second.insert("quick", 3, 5);
        second.insert("fox", 3, 6);
        second.insert("quick", 1, 9);

        vec![
            store.write_block(1, &first).unwrap(),
            store.write_block(2, &second).unwrap(),
        ]
    }

    #[test]
    fn test_merge_unions_postings() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlockStore::open(dir.path()).unwrap();
        let files = write_two_blocks(&store);

        let result = BlockMerger::new().merge(&files);
        assert_eq!(result.merged_blocks, 2);
        assert!(result.skipped.is_empty());

        let index = result.index;
        assert_eq!(index.positions("quick", 1), Some(&[1, 9][..]));
        assert_eq!(index.positions("quick", 2), Some(&[0][..]));
        assert_eq!(index.positions("quick", 3), Some(&[5][..]));
        assert_eq!(index.positions("fox", 3), Some(&[6][..]));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlockStore::open(dir.path()).unwrap();
        let files = write_two_blocks(&store);
        let reversed: Vec<_> = files.iter().rev().cloned().collect();

        let forward = BlockMerger::new().merge(&files).index;
        let backward = BlockMerger::new().merge(&reversed).index;

        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        forward.save(&a).unwrap();
        backward.save(&b).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn test_missing_block_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlockStore::open(dir.path()).unwrap();
        let mut files = write_two_blocks(&store);
        files.push(dir.path().join("spimi_block_7.jsonl"));

        let result = BlockMerger::new().merge(&files);
        assert_eq!(result.merged_blocks, 2);
        assert_eq!(result.skipped.len(), 1);
        assert!(matches!(result.skipped[0].1, PilumError::Io(_)));
        // The readable blocks still contribute
        assert!(result.index.positions("fox", 3).is_some());
    }

    #[test]
    fn test_corrupt_block_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlockStore::open(dir.path()).unwrap();
        let mut files = write_two_blocks(&store);

        // A block whose second line is malformed: even its well-formed
        // first line must not reach the index
        let corrupt = dir.path().join("spimi_block_3.jsonl");
        fs::write(&corrupt, "{\"zebra\":[1,{\"9\":[0]}]}\nnot json\n").unwrap();
        files.push(corrupt);

        let result = BlockMerger::new().merge(&files);
        assert_eq!(result.merged_blocks, 2);
        assert_eq!(result.skipped.len(), 1);
        assert!(matches!(result.skipped[0].1, PilumError::CorruptBlock(_)));
        assert!(result.index.postings("zebra").is_none());
    }

    #[test]
    fn test_merge_dir_finds_block_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlockStore::open(dir.path()).unwrap();
        write_two_blocks(&store);
        fs::write(dir.path().join("unrelated.txt"), "ignore me").unwrap();

        let result = BlockMerger::new().merge_dir(dir.path()).unwrap();
        assert_eq!(result.merged_blocks, 2);
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        let result = BlockMerger::new().merge(&[]);
        assert_eq!(result.merged_blocks, 0);
        assert!(result.index.is_empty());
    }
}
