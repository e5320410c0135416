//! Document identifier to source path mapping.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{PilumError, Result};

/// File name of the persisted docID → path mapping.
pub const DOC_MAP_FILE_NAME: &str = "docId_filePath_mapping.csv";

/// The docID → source path mapping built during enumeration.
///
/// Entries iterate in docID order. Every enumerated document has an entry,
/// including documents whose content could not be read.
#[derive(Debug, Clone, Default)]
pub struct DocMap {
    entries: BTreeMap<u64, PathBuf>,
}

impl DocMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        DocMap {
            entries: BTreeMap::new(),
        }
    }

    /// Record the path of a document identifier.
    pub fn insert(&mut self, doc_id: u64, path: PathBuf) {
        self.entries.insert(doc_id, path);
    }

    /// Look up the path of a document identifier.
    pub fn get(&self, doc_id: u64) -> Option<&Path> {
        self.entries.get(&doc_id).map(|p| p.as_path())
    }

    /// Number of mapped documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (docID, path) pairs in docID order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Path)> {
        self.entries.iter().map(|(&id, path)| (id, path.as_path()))
    }

    /// Persist the mapping as CSV with a `docID,relative_path` header.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["docID", "relative_path"])?;
        for (doc_id, doc_path) in &self.entries {
            writer.write_record([doc_id.to_string(), doc_path.display().to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Load a mapping previously written by [`save`](DocMap::save).
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut entries = BTreeMap::new();
        for record in reader.records() {
            let record = record?;
            let doc_id = record
                .get(0)
                .and_then(|field| field.parse::<u64>().ok())
                .ok_or_else(|| {
                    PilumError::storage(format!("invalid docID in {}", path.display()))
                })?;
            let doc_path = record.get(1).ok_or_else(|| {
                PilumError::storage(format!("missing path for doc {doc_id} in {}", path.display()))
            })?;
            entries.insert(doc_id, PathBuf::from(doc_path));
        }
        Ok(DocMap { entries })
    }
}
