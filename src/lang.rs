//! Language detection.
//!
//! Thin wrapper over `whatlang`, used upstream of the pipeline to keep
//! only documents in the target language. Detection is heuristic; short
//! or ambiguous texts may not detect at all and are dropped by the
//! filter.

use tracing::info;
use whatlang::Lang;

use crate::corpus::Corpus;
use crate::types::Language;

/// Detect the language of `text`, mapped onto the supported set.
///
/// Returns `None` for undetectable text or languages outside en/es.
pub fn detect(text: &str) -> Option<Language> {
    match whatlang::detect_lang(text)? {
        Lang::Eng => Some(Language::English),
        Lang::Spa => Some(Language::Spanish),
        _ => None,
    }
}

/// Keep only documents whose detected language is `language`.
///
/// Returns the number of documents removed.
pub fn filter_language(corpus: &mut Corpus, language: Language) -> usize {
    let before = corpus.len();
    corpus
        .documents
        .retain(|doc| detect(&doc.raw_text) == Some(language));
    let removed = before - corpus.len();
    info!(
        kept = corpus.len(),
        removed,
        language = %language,
        "language filter applied"
    );
    removed
}
