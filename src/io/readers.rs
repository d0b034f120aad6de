//! Corpus readers and the format registry.
//!
//! Readers turn a tabular source file plus a [`FieldMapping`] into a
//! [`Corpus`]: the id column becomes the document id, and the title
//! column (when mapped) is concatenated in front of the raw-text column.
//! Blank rows are dropped at read time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::info;

use crate::corpus::{Corpus, Document};
use crate::error::{ConfigurationError, DataError};
use crate::io::mapping::FieldMapping;

/// A reader for one source-file format.
pub trait CorpusReader: Send + Sync {
    /// Read `path`, resolving columns through `mapping`.
    fn read(&self, path: &Path, mapping: &FieldMapping) -> Result<Corpus, DataError>;
}

/// Assemble a document from its resolved fields, joining title and body
/// when a title is present. Returns `None` for blank rows.
fn assemble(id: &str, title: Option<&str>, body: &str) -> Option<Document> {
    let raw_text = match title {
        Some(t) if !t.trim().is_empty() => format!("{t} {body}"),
        _ => body.to_string(),
    };
    if raw_text.trim().is_empty() || raw_text.trim() == "nan" {
        return None;
    }
    Some(Document::new(id, raw_text))
}

// ─── CSV ────────────────────────────────────────────────────────────────────

/// CSV reader (header row required).
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReader;

impl CorpusReader for CsvReader {
    fn read(&self, path: &Path, mapping: &FieldMapping) -> Result<Corpus, DataError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|source| DataError::Csv {
                path: PathBuf::from(path),
                source,
            })?;

        let headers = reader
            .headers()
            .map_err(|source| DataError::Csv {
                path: PathBuf::from(path),
                source,
            })?
            .clone();

        let column = |name: &str| -> Result<usize, DataError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataError::MissingColumn {
                    column: name.to_string(),
                    path: PathBuf::from(path),
                })
        };

        let id_col = column(&mapping.id)?;
        let text_col = column(&mapping.raw_text)?;
        let title_col = if mapping.has_title() {
            Some(column(&mapping.title)?)
        } else {
            None
        };

        let mut corpus = Corpus::new();
        for record in reader.records() {
            let record = record.map_err(|source| DataError::Csv {
                path: PathBuf::from(path),
                source,
            })?;
            let id = record.get(id_col).unwrap_or("");
            let body = record.get(text_col).unwrap_or("");
            let title = title_col.and_then(|c| record.get(c));
            if let Some(doc) = assemble(id, title, body) {
                corpus.push(doc);
            }
        }

        info!(documents = corpus.len(), path = %path.display(), "csv corpus loaded");
        Ok(corpus)
    }
}

// ─── JSON lines ─────────────────────────────────────────────────────────────

/// JSON-lines reader: one JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlReader;

impl CorpusReader for JsonlReader {
    fn read(&self, path: &Path, mapping: &FieldMapping) -> Result<Corpus, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: PathBuf::from(path),
            source,
        })?;

        let mut corpus = Corpus::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| DataError::Io {
                path: PathBuf::from(path),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let value: serde_json::Value =
                serde_json::from_str(&line).map_err(|source| DataError::Json {
                    path: PathBuf::from(path),
                    line: line_no + 1,
                    source,
                })?;

            let field = |name: &str| -> String {
                match &value[name] {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                }
            };

            let id = field(&mapping.id);
            let body = field(&mapping.raw_text);
            let title = if mapping.has_title() {
                Some(field(&mapping.title))
            } else {
                None
            };
            if let Some(doc) = assemble(&id, title.as_deref(), &body) {
                corpus.push(doc);
            }
        }

        info!(documents = corpus.len(), path = %path.display(), "jsonl corpus loaded");
        Ok(corpus)
    }
}

// ─── Registry ───────────────────────────────────────────────────────────────

/// Maps a format tag (`csv`, `jsonl`) to its reader. Adding a format
/// means registering an implementation, not branching on extensions.
pub struct ReaderRegistry {
    readers: FxHashMap<String, Box<dyn CorpusReader>>,
}

impl ReaderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            readers: FxHashMap::default(),
        }
    }

    /// A registry with the built-in formats registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("csv", Box::new(CsvReader));
        registry.register("jsonl", Box::new(JsonlReader));
        registry
    }

    /// Register a reader under a format tag.
    pub fn register(&mut self, tag: impl Into<String>, reader: Box<dyn CorpusReader>) {
        self.readers.insert(tag.into(), reader);
    }

    /// Look up a reader; unknown tags are a configuration error.
    pub fn get(&self, tag: &str) -> Result<&dyn CorpusReader, ConfigurationError> {
        self.readers
            .get(tag)
            .map(|b| b.as_ref())
            .ok_or_else(|| ConfigurationError::UnsupportedFormat(tag.to_string()))
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
