//! Document source: directory enumeration and file reading.
//!
//! A [`DirectoryCorpus`] enumerates the regular files of one directory in
//! sorted path order. Document identifiers are assigned downstream from that
//! order, so sorting keeps them stable across runs. Reading a document can
//! fail without poisoning the enumeration; the caller decides how to treat
//! the failed document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// An enumerable set of documents backed by a directory of text files.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    paths: Vec<PathBuf>,
}

impl DirectoryCorpus {
    /// Enumerate the regular files under `dir`, sorted by path.
    ///
    /// Failure to read the directory itself is the only fatal condition of
    /// an index build.
    pub fn open(dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(DirectoryCorpus { paths })
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the corpus contains no documents.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The document paths in enumeration order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Iterate over (path, text) pairs in enumeration order, reading each
    /// file lazily. A per-document read error is yielded in place of the
    /// text and does not stop the iteration.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, Result<String>)> + '_ {
        self.paths.iter().map(|path| {
            let text = fs::read_to_string(path).map_err(Into::into);
            (path.as_path(), text)
        })
    }
}
