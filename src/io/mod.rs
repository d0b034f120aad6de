//! Corpus I/O
//!
//! This module provides the dataset field-mapping config, the
//! format-tag reader registry, and the output writers. All of it is
//! orchestration glue around the core pipeline: adding a file format
//! means registering a new [`CorpusReader`], not branching.

pub mod mapping;
pub mod readers;
pub mod writer;

pub use mapping::{FieldMapping, MappingConfig};
pub use readers::{CorpusReader, CsvReader, JsonlReader, ReaderRegistry};
pub use writer::{write_csv, write_jsonl};
