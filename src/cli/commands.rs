//! Command implementations for the Pilum CLI.

use std::fs;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::DirectoryCorpus;
use crate::error::Result;
use crate::index::doc_map::{DOC_MAP_FILE_NAME, DocMap};
use crate::index::inverted::{INDEX_FILE_NAME, InvertedIndex};
use crate::index::merger::BlockMerger;
use crate::index::writer::{IndexWriter, IndexWriterConfig};
use crate::query::phrase::PhraseQuery;

/// Execute a CLI command.
pub fn execute_command(args: PilumArgs) -> Result<()> {
    match &args.command {
        Command::Index(index_args) => build_index(index_args.clone(), &args),
        Command::Search(search_args) => search_index(search_args.clone(), &args),
    }
}

/// Build the positional index for a document directory.
///
/// Per-document and per-block failures are reported on stderr and the build
/// carries on; only an unreadable document directory aborts it.
fn build_index(args: IndexArgs, cli_args: &PilumArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Indexing documents from: {}", args.docs_dir.display());
    }

    let start_time = Instant::now();

    let corpus = DirectoryCorpus::open(&args.docs_dir)?;
    fs::create_dir_all(&args.index_dir)?;

    let analyzer: Arc<dyn Analyzer> = Arc::new(StandardAnalyzer::new());
    let mut writer = IndexWriter::new(
        analyzer,
        &args.index_dir,
        IndexWriterConfig {
            block_term_limit: args.block_term_limit,
        },
    )?;

    let mut unreadable_documents = 0u64;
    for (path, text) in corpus.iter() {
        match text {
            Ok(text) => {
                if cli_args.verbosity() > 1 {
                    println!("Indexing: {}", path.display());
                }
                if let Err(e) = writer.add_document(path, &text) {
                    eprintln!("Error indexing document {}: {e}", path.display());
                }
            }
            Err(e) => {
                unreadable_documents += 1;
                eprintln!("Error reading document {}: {e}", path.display());
                writer.skip_document(path);
            }
        }
    }

    // Flush the final block here so a write failure is reported without
    // abandoning the blocks already on disk
    if let Err(e) = writer.flush() {
        eprintln!("Error writing final block: {e}");
    }
    let (block_files, doc_map) = writer.finish()?;

    if cli_args.verbosity() > 0 {
        println!("Blocks written: {}", block_files.len());
        println!("Merging blocks into final index");
    }

    let merge = BlockMerger::new().merge(&block_files);
    for (path, e) in &merge.skipped {
        eprintln!("Error merging block {}: {e}", path.display());
    }

    let index_file = args.index_dir.join(INDEX_FILE_NAME);
    merge.index.save(&index_file)?;

    let doc_map_file = args.index_dir.join(DOC_MAP_FILE_NAME);
    doc_map.save(&doc_map_file)?;

    let duration = start_time.elapsed();

    output_result(
        "Index built successfully",
        &IndexBuildResult {
            documents: doc_map.len() as u64,
            unreadable_documents,
            blocks_written: block_files.len(),
            blocks_merged: merge.merged_blocks,
            blocks_skipped: merge.skipped.len(),
            terms: merge.index.term_count(),
            index_file: index_file.display().to_string(),
            doc_map_file: doc_map_file.display().to_string(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Run an exact phrase query against a built index.
fn search_index(args: SearchArgs, cli_args: &PilumArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Searching index: {}", args.index_dir.display());
        println!("Query: {}", args.phrase);
    }

    let start_time = Instant::now();

    let index = InvertedIndex::load(&args.index_dir.join(INDEX_FILE_NAME))?;
    let doc_map = DocMap::load(&args.index_dir.join(DOC_MAP_FILE_NAME))?;

    let analyzer = StandardAnalyzer::new();
    let query = PhraseQuery::parse(&analyzer, &args.phrase)?;

    let hits: Vec<SearchHit> = query
        .search(&index)
        .into_iter()
        .map(|doc_id| SearchHit {
            doc_id,
            path: doc_map
                .get(doc_id)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("<unknown doc {doc_id}>")),
        })
        .collect();

    let duration = start_time.elapsed();

    output_search_results(
        &SearchResults {
            query: args.phrase.clone(),
            terms: query.terms().to_vec(),
            hits,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}
