//! Corpus containers
//!
//! A [`Corpus`] is a flat collection of [`Document`]s sharing one
//! pipeline instance. Documents are created once per input row; the
//! `lemmas` field is filled in by the pipeline.

use serde::{Deserialize, Serialize};

/// One input row: an opaque identifier, the raw text (title concatenated
/// with body when a title field exists), and the normalized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier carried through from the source file.
    pub id: String,
    /// Raw text to preprocess.
    pub raw_text: String,
    /// Final normalized string; `None` until the pipeline has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemmas: Option<String>,
}

impl Document {
    /// Create a document awaiting preprocessing.
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: raw_text.into(),
            lemmas: None,
        }
    }
}

/// A batch of documents processed together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    pub documents: Vec<Document>,
}

impl Corpus {
    /// An empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from documents.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Append a document.
    pub fn push(&mut self, doc: Document) {
        self.documents.push(doc);
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over documents.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Drop documents whose raw text is empty, whitespace-only, or the
    /// literal `"nan"` placeholder some tabular exporters emit.
    pub fn drop_blank_rows(&mut self) -> usize {
        let before = self.documents.len();
        self.documents
            .retain(|d| !d.raw_text.trim().is_empty() && d.raw_text.trim() != "nan");
        before - self.documents.len()
    }
}
