//! # nlpipe
//!
//! Batch text preprocessing for topic-modeling corpora.
//!
//! Given a tabular dataset of documents (id, title, raw text), the
//! pipeline normalizes each document's text — acronym expansion,
//! contraction expansion, lemmatization, stopword removal, POS
//! filtering — and optionally detects frequently co-occurring token
//! pairs corpus-wide, rewriting them as single compound tokens.
//!
//! The core entry point is [`Pipe`]:
//!
//! ```no_run
//! use nlpipe::annotate::RuleAnnotator;
//! use nlpipe::corpus::{Corpus, Document};
//! use nlpipe::pipeline::Pipe;
//! use nlpipe::types::Language;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = RuleAnnotator::new(Language::English);
//! let pipe = Pipe::new(&["data/stw_lists/en/common.txt"], Language::English, engine)?;
//!
//! let mut corpus = Corpus::from_documents(vec![
//!     Document::new("1", "The patient had an MRI scan."),
//! ]);
//! pipe.preproc(&mut corpus, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! Per-document normalization is embarrassingly parallel and fans out
//! over a rayon pool; phrase-model fitting is a corpus-wide barrier.
//! The annotation engine is an injected trait
//! ([`annotate::AnnotationEngine`]); the built-in
//! [`annotate::RuleAnnotator`] covers English and Spanish.

pub mod annotate;
pub mod corpus;
pub mod error;
pub mod io;
pub mod lang;
pub mod lexicon;
pub mod normalize;
pub mod phrase;
pub mod pipeline;
pub mod types;

pub use corpus::{Corpus, Document};
pub use error::{AnnotateError, ConfigurationError, DataError, PipeError};
pub use pipeline::Pipe;
pub use types::Language;
