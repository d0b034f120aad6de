//! Error types.
//!
//! Construction-time failures (missing lexical resources, unsupported
//! languages) are [`ConfigurationError`]s and are always fatal: no partial
//! pipeline is usable without its resources. Run-time failures inside the
//! annotation engine propagate as [`PipeError`]s and abort the batch —
//! the pipeline targets offline batch jobs and has no per-document
//! quarantine policy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised while constructing the pipeline or loading its
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The requested language has no acronym table or annotation rules.
    #[error("unsupported language: {0} (expected en/es)")]
    UnsupportedLanguage(String),

    /// A stopword list file could not be read.
    #[error("failed to read stopword file {path}")]
    StopwordFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An acronym pattern failed to compile.
    #[error("invalid acronym pattern `{pattern}`")]
    AcronymPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The dataset name has no entry in the field-mapping config.
    #[error("unknown dataset: {0} (no field mapping configured)")]
    UnknownDataset(String),

    /// The field-mapping config file could not be read or parsed.
    #[error("failed to load field-mapping config from {path}")]
    MappingFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No reader is registered for the requested source format.
    #[error("unsupported source format: {0}")]
    UnsupportedFormat(String),
}

/// Error raised by an annotation engine while processing a document.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The engine failed internally.
    #[error("annotation engine failed: {0}")]
    Engine(String),
}

/// Error raised while running the preprocessing pipeline over a corpus.
#[derive(Debug, Error)]
pub enum PipeError {
    /// The annotation engine failed on a document; the batch is aborted.
    #[error("annotation failed for document `{doc_id}`")]
    Annotation {
        doc_id: String,
        #[source]
        source: AnnotateError,
    },
}

/// Error raised while reading or writing corpus files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("i/o error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv error on {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("json error on {path} (line {line})")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A mapped column is absent from the source file.
    #[error("missing column `{column}` in {path}")]
    MissingColumn { column: String, path: PathBuf },
}
