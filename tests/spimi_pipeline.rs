//! End-to-end scenarios: corpus enumeration, blocked build, merge, and
//! phrase search against the merged index.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pilum::analysis::analyzer::standard::StandardAnalyzer;
use pilum::corpus::DirectoryCorpus;
use pilum::error::Result;
use pilum::index::doc_map::{DOC_MAP_FILE_NAME, DocMap};
use pilum::index::inverted::{INDEX_FILE_NAME, InvertedIndex};
use pilum::index::merger::BlockMerger;
use pilum::index::writer::{IndexWriter, IndexWriterConfig};
use pilum::query::phrase::PhraseQuery;
use tempfile::TempDir;

/// Write a corpus, run the full blocked build, and merge.
fn build_index(
    root: &Path,
    docs: &[(&str, &[u8])],
    block_term_limit: usize,
) -> Result<(InvertedIndex, DocMap, Vec<PathBuf>)> {
    let docs_dir = root.join("docs");
    fs::create_dir_all(&docs_dir)?;
    for (name, bytes) in docs {
        fs::write(docs_dir.join(name), bytes)?;
    }

    let corpus = DirectoryCorpus::open(&docs_dir)?;
    let mut writer = IndexWriter::new(
        Arc::new(StandardAnalyzer::new()),
        &root.join("index"),
        IndexWriterConfig { block_term_limit },
    )?;

    for (path, text) in corpus.iter() {
        match text {
            Ok(text) => {
                writer.add_document(path, &text)?;
            }
            Err(_) => {
                writer.skip_document(path);
            }
        }
    }

    let (block_files, doc_map) = writer.finish()?;
    let merge = BlockMerger::new().merge(&block_files);
    assert!(merge.skipped.is_empty(), "no block should be skipped");
    Ok((merge.index, doc_map, block_files))
}

#[test]
fn test_stop_word_gap_breaks_adjacency() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let (index, _, _) = build_index(
        temp_dir.path(),
        &[("fox.txt", b"the quick brown fox")],
        2500,
    )?;

    // "the" is discarded but still consumed position 0
    assert!(index.postings("the").is_none());
    assert_eq!(index.positions("quick", 1), Some(&[1u32][..]));
    assert_eq!(index.positions("brown", 1), Some(&[2u32][..]));
    assert_eq!(index.positions("fox", 1), Some(&[3u32][..]));

    let analyzer = StandardAnalyzer::new();
    let adjacent = PhraseQuery::parse(&analyzer, "quick brown")?;
    assert_eq!(adjacent.search(&index), vec![1]);

    // "brown" occupies the position between them
    let gapped = PhraseQuery::parse(&analyzer, "quick fox")?;
    assert!(gapped.search(&index).is_empty());

    Ok(())
}

#[test]
fn test_stemming_unifies_documents_and_queries() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let (index, _, _) = build_index(
        temp_dir.path(),
        &[
            ("doc1.txt", b"cats running quickly"),
            ("doc2.txt", b"cat ran slowly"),
        ],
        2500,
    )?;

    let analyzer = StandardAnalyzer::new();

    // "cats" stems to "cat", so the singular query finds both documents
    let query = PhraseQuery::parse(&analyzer, "cat")?;
    assert_eq!(query.search(&index), vec![1, 2]);

    // "running" stems to "run" but "ran" stays "ran"
    let query = PhraseQuery::parse(&analyzer, "running")?;
    assert_eq!(query.search(&index), vec![1]);
    let query = PhraseQuery::parse(&analyzer, "ran")?;
    assert_eq!(query.search(&index), vec![2]);

    Ok(())
}

#[test]
fn test_blocked_build_is_equivalent_to_single_block() -> Result<()> {
    let docs: &[(&str, &[u8])] = &[
        ("a.txt", b"apple banana cherry apple orange grape"),
        ("b.txt", b"banana cherry kiwi mango apple"),
        ("c.txt", b"orange kiwi papaya grape banana"),
    ];

    let small = TempDir::new().unwrap();
    let large = TempDir::new().unwrap();
    let (small_index, _, small_blocks) = build_index(small.path(), docs, 2)?;
    let (large_index, _, large_blocks) = build_index(large.path(), docs, 2500)?;

    assert!(small_blocks.len() > 1, "tiny capacity must produce several blocks");
    assert_eq!(large_blocks.len(), 1);

    // Byte-for-byte identical final index regardless of blocking
    let small_file = small.path().join(INDEX_FILE_NAME);
    let large_file = large.path().join(INDEX_FILE_NAME);
    small_index.save(&small_file)?;
    large_index.save(&large_file)?;
    assert_eq!(fs::read(&small_file)?, fs::read(&large_file)?);

    Ok(())
}

#[test]
fn test_postings_split_across_blocks_are_reunited() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    // Capacity 2 forces a flush in the middle of the document, splitting
    // "apple"'s postings over three blocks
    let (index, _, block_files) = build_index(
        temp_dir.path(),
        &[("a.txt", b"apple banana apple cherry apple")],
        2,
    )?;

    assert_eq!(block_files.len(), 3);
    assert_eq!(index.positions("appl", 1), Some(&[0u32, 2, 4][..]));

    Ok(())
}

#[test]
fn test_position_lists_are_strictly_increasing() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let (index, _, _) = build_index(
        temp_dir.path(),
        &[
            ("a.txt", b"echo delta echo delta echo foxtrot echo"),
            ("b.txt", b"delta echo delta foxtrot"),
        ],
        2,
    )?;

    for (term, postings) in index.iter() {
        for (doc_id, positions) in postings {
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "positions of {term:?} in doc {doc_id} are not strictly increasing: {positions:?}"
            );
        }
    }

    Ok(())
}

#[test]
fn test_unreadable_document_still_consumes_its_doc_id() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let (index, doc_map, _) = build_index(
        temp_dir.path(),
        &[
            ("a.txt", b"alpha words here"),
            ("b.txt", &[0xff, 0xfe, 0xfd]), // not UTF-8, unreadable as text
            ("c.txt", b"gamma words there"),
        ],
        2500,
    )?;

    // All three documents are mapped, in enumeration order
    assert_eq!(doc_map.len(), 3);
    assert!(doc_map.get(2).unwrap().ends_with("b.txt"));

    // The unreadable document contributed no postings, and its neighbors
    // kept their identifiers
    assert_eq!(index.positions("alpha", 1), Some(&[0u32][..]));
    assert_eq!(index.positions("gamma", 3), Some(&[0u32][..]));
    for (_, postings) in index.iter() {
        assert!(!postings.contains_key(&2));
    }

    Ok(())
}

#[test]
fn test_artifacts_round_trip_through_disk() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let (index, doc_map, _) = build_index(
        temp_dir.path(),
        &[("story.txt", b"a quiet harbor town woke slowly")],
        2500,
    )?;

    let index_file = temp_dir.path().join("index").join(INDEX_FILE_NAME);
    let doc_map_file = temp_dir.path().join("index").join(DOC_MAP_FILE_NAME);
    index.save(&index_file)?;
    doc_map.save(&doc_map_file)?;

    let loaded_index = InvertedIndex::load(&index_file)?;
    let loaded_map = DocMap::load(&doc_map_file)?;

    let analyzer = StandardAnalyzer::new();
    let query = PhraseQuery::parse(&analyzer, "harbor town")?;
    let hits = query.search(&loaded_index);
    assert_eq!(hits, vec![1]);
    assert!(loaded_map.get(hits[0]).unwrap().ends_with("story.txt"));

    Ok(())
}

#[test]
fn test_absent_term_and_empty_query_are_not_errors() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let (index, _, _) = build_index(temp_dir.path(), &[("a.txt", b"alpha beta")], 2500)?;

    let analyzer = StandardAnalyzer::new();

    // A term the corpus never produced
    let query = PhraseQuery::parse(&analyzer, "zebra")?;
    assert!(!query.is_empty());
    assert!(query.search(&index).is_empty());

    // A query that analysis strips down to nothing
    let query = PhraseQuery::parse(&analyzer, "the of it")?;
    assert!(query.is_empty());
    assert!(query.search(&index).is_empty());

    Ok(())
}
