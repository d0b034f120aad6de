//! Per-document text normalization
//!
//! This module provides the [`TextNormalizer`], the per-document half of
//! the preprocessing pipeline: acronym expansion, contraction expansion,
//! linguistic annotation, token filtering, and lowercasing.

pub mod contractions;

pub use contractions::{ContractionExpander, NoopExpander, TableExpander};

use tracing::debug;

use crate::annotate::AnnotationEngine;
use crate::error::{AnnotateError, ConfigurationError};
use crate::lexicon::{AcronymTable, StopwordList};
use crate::normalize::contractions::default_expander;
use crate::types::Language;

/// Applies the fixed per-document transformation sequence.
///
/// A normalizer is a pure function of its loaded resources: the acronym
/// table, the stopword list, the contraction expander, and the injected
/// annotation engine. All four are immutable after construction, so one
/// normalizer can serve any number of parallel document workers.
pub struct TextNormalizer<E> {
    acronyms: AcronymTable,
    stopwords: StopwordList,
    expander: Box<dyn ContractionExpander>,
    engine: E,
}

impl<E: AnnotationEngine> TextNormalizer<E> {
    /// Build a normalizer with the built-in acronym table and contraction
    /// expander for `language`.
    pub fn new(
        language: Language,
        stopwords: StopwordList,
        engine: E,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            acronyms: AcronymTable::for_language(language)?,
            stopwords,
            expander: default_expander(language)?,
            engine,
        })
    }

    /// Build a normalizer from explicit resources.
    pub fn with_resources(
        acronyms: AcronymTable,
        stopwords: StopwordList,
        expander: Box<dyn ContractionExpander>,
        engine: E,
    ) -> Self {
        Self {
            acronyms,
            stopwords,
            expander,
            engine,
        }
    }

    /// The loaded stopword list.
    pub fn stopwords(&self) -> &StopwordList {
        &self.stopwords
    }

    /// The loaded acronym table.
    pub fn acronyms(&self) -> &AcronymTable {
        &self.acronyms
    }

    /// Run the full per-document transformation, producing an ordered
    /// sequence of lowercase lemmas.
    ///
    /// Stages, in fixed order:
    /// 1. Acronym substitution (ordered fold over the rule table)
    /// 2. Contraction expansion (best-effort, falls back to the input)
    /// 3. Linguistic annotation (errors propagate)
    /// 4. Token filtering: alphabetic surface, content-word POS, not an
    ///    engine stopword, lemma not in the loaded stopword list
    /// 5. Lowercasing of surviving lemmas
    ///
    /// Empty or whitespace-only input yields an empty sequence.
    pub fn do_pipeline(&self, raw_text: &str) -> Result<Vec<String>, AnnotateError> {
        if raw_text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let text = self.acronyms.expand(raw_text);

        let text = match self.expander.expand(&text) {
            Ok(expanded) => expanded,
            Err(err) => {
                debug!(error = %err, "contraction expansion failed, keeping original text");
                text
            }
        };

        let tokens = self.engine.annotate(&text)?;

        let lemmas = tokens
            .into_iter()
            .filter(|t| {
                t.is_alpha
                    && t.pos.is_content_word()
                    && !t.is_stop
                    && !self.stopwords.contains(&t.lemma)
            })
            .map(|t| t.lemma.to_lowercase())
            .collect();

        Ok(lemmas)
    }
}
