//! Query types for searching the index.

pub mod phrase;

pub use phrase::PhraseQuery;
