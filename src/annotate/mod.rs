//! Linguistic annotation
//!
//! This module defines the annotation engine seam (tokenization,
//! part-of-speech tagging, lemmatization, built-in stopword flagging)
//! and a deterministic rule-based implementation for English and Spanish.

pub mod engine;

pub use engine::RuleAnnotator;

use crate::error::AnnotateError;
use crate::types::Token;

/// The linguistic-annotation engine contract.
///
/// Given text, an engine segments it into tokens and assigns each a
/// part-of-speech tag, a lemma, an alphabetic-ness flag, and a stopword
/// flag from its own built-in lexicon.
///
/// Engines are shared read-only across parallel document workers, so
/// implementations must be `Send + Sync`. Any failure during annotation
/// propagates and aborts the batch — there is no per-document recovery
/// in the pipeline itself.
pub trait AnnotationEngine: Send + Sync {
    /// Annotate `text`, returning tokens in document order.
    ///
    /// Empty or whitespace-only input yields an empty vector, never an
    /// error.
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotateError>;
}

impl<E: AnnotationEngine + ?Sized> AnnotationEngine for &E {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotateError> {
        (**self).annotate(text)
    }
}

impl<E: AnnotationEngine + ?Sized> AnnotationEngine for std::sync::Arc<E> {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotateError> {
        (**self).annotate(text)
    }
}
