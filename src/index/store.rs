//! Durable block storage: the JSONL term-record codec plus the writer and
//! reader for whole block files.
//!
//! Each line of a block file is one JSON object with a single key, the term.
//! Its value is an array whose first element is the number of documents
//! carrying the term in this block, followed by one `{"<docID>":
//! [positions...]}` object per document in ascending docID order:
//!
//! ```text
//! {"brown":[2,{"1":[2]},{"4":[0,7]}]}
//! ```
//!
//! The final merged index uses the same record shape, with each term
//! appearing exactly once across the whole file.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};

use crate::error::{PilumError, Result};
use crate::index::block::Block;
use crate::index::{PostingMap, TermMap};

/// File name prefix for flushed block files.
pub const BLOCK_FILE_PREFIX: &str = "spimi_block_";

/// File name suffix for flushed block files.
pub const BLOCK_FILE_SUFFIX: &str = ".jsonl";

/// One term's postings within a single record stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRecord {
    /// The term this record describes.
    pub term: String,
    /// Sorted, deduplicated positions per document.
    pub postings: PostingMap,
}

impl TermRecord {
    /// Create a new term record.
    pub fn new(term: String, postings: PostingMap) -> Self {
        TermRecord { term, postings }
    }

    /// Number of documents carrying the term in this record.
    pub fn doc_count(&self) -> usize {
        self.postings.len()
    }

    /// Encode the record as its JSON line value.
    pub fn to_json(&self) -> Value {
        let mut entries = Vec::with_capacity(self.postings.len() + 1);
        entries.push(json!(self.postings.len()));
        for (doc_id, positions) in &self.postings {
            let mut posting = Map::new();
            posting.insert(doc_id.to_string(), json!(positions));
            entries.push(Value::Object(posting));
        }
        let mut record = Map::new();
        record.insert(self.term.clone(), Value::Array(entries));
        Value::Object(record)
    }

    /// Decode a record from its JSON line value.
    ///
    /// Structural problems surface as [`PilumError::CorruptBlock`]. The
    /// leading document count must be numeric but the posting entries that
    /// follow are authoritative; a count that disagrees with them is
    /// tolerated, as the read side never depends on it.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| PilumError::corrupt_block("record is not an object"))?;
        let (term, entries) = object
            .iter()
            .next()
            .ok_or_else(|| PilumError::corrupt_block("record holds no term"))?;
        if object.len() != 1 {
            return Err(PilumError::corrupt_block(format!(
                "record for term {term:?} holds more than one term"
            )));
        }
        let entries = entries.as_array().ok_or_else(|| {
            PilumError::corrupt_block(format!("record for term {term:?} is not an array"))
        })?;
        let count = entries.first().ok_or_else(|| {
            PilumError::corrupt_block(format!("record for term {term:?} is missing its count"))
        })?;
        if !count.is_u64() {
            return Err(PilumError::corrupt_block(format!(
                "record for term {term:?} has a non-numeric count"
            )));
        }

        let mut postings = PostingMap::new();
        for entry in entries.iter().skip(1) {
            let entry = entry.as_object().ok_or_else(|| {
                PilumError::corrupt_block(format!("posting for term {term:?} is not an object"))
            })?;
            for (doc_key, positions) in entry {
                let doc_id: u64 = doc_key.parse().map_err(|_| {
                    PilumError::corrupt_block(format!(
                        "posting for term {term:?} has docID {doc_key:?}"
                    ))
                })?;
                let positions = positions.as_array().ok_or_else(|| {
                    PilumError::corrupt_block(format!(
                        "positions for term {term:?} doc {doc_id} are not an array"
                    ))
                })?;
                let mut list = Vec::with_capacity(positions.len());
                for position in positions {
                    let position = position.as_u64().ok_or_else(|| {
                        PilumError::corrupt_block(format!(
                            "position for term {term:?} doc {doc_id} is not an unsigned integer"
                        ))
                    })?;
                    list.push(position as u32);
                }
                // Repeated docIDs concatenate rather than overwrite
                postings.entry(doc_id).or_default().extend(list);
            }
        }

        Ok(TermRecord {
            term: term.clone(),
            postings,
        })
    }
}

/// Write a stream of term records to `path`, one JSON object per line.
pub fn write_records<I>(path: &Path, records: I) -> Result<()>
where
    I: IntoIterator<Item = TermRecord>,
{
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut out, &record.to_json())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Read every term record from `path`. Blank lines are skipped; a malformed
/// line makes the whole file a corrupt block.
pub fn read_records(path: &Path) -> Result<Vec<TermRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line).map_err(|e| {
            PilumError::corrupt_block(format!(
                "{}: line {}: {e}",
                path.display(),
                line_number + 1
            ))
        })?;
        records.push(TermRecord::from_json(&value)?);
    }
    Ok(records)
}

/// Read a block file back into a term dictionary, concatenating position
/// lists when the same (term, docID) pair occurs in multiple records.
pub fn read_block(path: &Path) -> Result<TermMap> {
    let mut terms = TermMap::new();
    for record in read_records(path)? {
        let postings = terms.entry(record.term).or_default();
        for (doc_id, positions) in record.postings {
            postings.entry(doc_id).or_default().extend(positions);
        }
    }
    Ok(terms)
}

/// Writes numbered block files into one directory.
#[derive(Debug, Clone)]
pub struct BlockStore {
    dir: PathBuf,
}

impl BlockStore {
    /// Open a block store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(BlockStore {
            dir: dir.to_path_buf(),
        })
    }

    /// The directory block files are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The path of block number `block_number` (1-based).
    pub fn block_path(&self, block_number: usize) -> PathBuf {
        self.dir
            .join(format!("{BLOCK_FILE_PREFIX}{block_number}{BLOCK_FILE_SUFFIX}"))
    }

    /// Serialize a finalized block as block number `block_number`.
    pub fn write_block(&self, block_number: usize, block: &Block) -> Result<PathBuf> {
        let path = self.block_path(block_number);
        write_records(&path, block.records())?;
        Ok(path)
    }
}
