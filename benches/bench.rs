//! Criterion benchmarks for the Pilum indexing pipeline:
//! - Text analysis (tokenization, filtering, stemming)
//! - Phrase matching against an in-memory index

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use pilum::analysis::analyzer::Analyzer;
use pilum::analysis::analyzer::standard::StandardAnalyzer;
use pilum::index::inverted::InvertedIndex;
use pilum::index::{PostingMap, TermMap};
use pilum::query::phrase::PhraseQuery;

/// Generate repeating prose for analysis benchmarks.
fn generate_text(words: usize) -> String {
    let vocabulary = [
        "the", "harbor", "lights", "flickered", "as", "evening", "ships", "returned", "slowly",
        "carrying", "crates", "of", "salted", "fish", "and", "rope", "merchants", "counted",
        "their", "coins", "while", "children", "ran", "between", "stalls", "calling", "names",
    ];

    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(vocabulary[i % vocabulary.len()]);
    }
    text
}

/// Build a synthetic index where every document carries the phrase terms at
/// staggered positions.
fn generate_index(docs: u64) -> InvertedIndex {
    let mut terms = TermMap::new();
    for (offset, term) in ["harbor", "light", "return"].iter().enumerate() {
        let mut postings = PostingMap::new();
        for doc_id in 1..=docs {
            let base = (doc_id % 17) as u32 * 5;
            postings.insert(doc_id, vec![base + offset as u32, base + 20 + offset as u32]);
        }
        terms.insert(term.to_string(), postings);
    }
    InvertedIndex::from_terms(terms)
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = StandardAnalyzer::new();
    let text = generate_text(1000);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("standard_analyzer_1000_words", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&text)).unwrap().collect();
            black_box(tokens)
        })
    });
    group.finish();
}

fn bench_phrase_matching(c: &mut Criterion) {
    let index = generate_index(1000);
    let query = PhraseQuery::from_terms(vec![
        "harbor".to_string(),
        "light".to_string(),
        "return".to_string(),
    ]);

    let mut group = c.benchmark_group("phrase");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("search_1000_docs", |b| {
        b.iter(|| black_box(query.search(black_box(&index))))
    });
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_phrase_matching);
criterion_main!(benches);
