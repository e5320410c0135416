//! # Pilum
//!
//! A memory-bounded positional inverted index with exact phrase search.
//!
//! Pilum builds its index SPIMI-style: documents stream through a text
//! analysis pipeline into capped in-memory blocks, full blocks are flushed
//! to disk as sorted JSONL record streams, and an external merge unions
//! every block into one global positional index. Phrase queries are
//! normalized with the same pipeline and answered by walking sorted
//! position lists for strict adjacency.
//!
//! ## Features
//!
//! - Whitespace tokenization with stop-word filtering and Porter2 stemming
//! - Blocked index construction bounded by a distinct-term capacity
//! - Partial-failure tolerant build and merge
//! - Exact phrase matching over sorted position lists

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod index;
pub mod query;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
