//! Contraction expansion.
//!
//! Best-effort by contract: the normalizer falls back to the original
//! text whenever an expander fails, so expansion can never abort a
//! document. The built-in English expander is table-driven; Spanish has
//! no contractions in this sense and uses the no-op expander.

use regex::Regex;

use crate::error::ConfigurationError;
use crate::types::Language;

/// Contraction-expander seam.
///
/// Implementations may fail for any internal reason; the caller treats a
/// failure as "pass the text through unchanged".
pub trait ContractionExpander: Send + Sync {
    /// Expand contractions in `text`.
    fn expand(&self, text: &str) -> Result<String, anyhow::Error>;
}

/// Expander that leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExpander;

impl ContractionExpander for NoopExpander {
    fn expand(&self, text: &str) -> Result<String, anyhow::Error> {
        Ok(text.to_string())
    }
}

/// Explicit English contraction table, applied before the generic
/// suffix rules so irregular forms ("won't", "can't") expand correctly.
const EN_CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("shan't", "shall not"),
    ("let's", "let us"),
    ("i'm", "i am"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("here's", "here is"),
    ("what's", "what is"),
    ("who's", "who is"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("ma'am", "madam"),
    ("o'clock", "of the clock"),
    ("y'all", "you all"),
];

/// Generic suffix rules applied after the explicit table.
const EN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("n't", " not"),
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("'d", " would"),
];

/// Table-driven English contraction expander.
///
/// Matching is case-insensitive and whole-word; the curly apostrophe is
/// normalized to the ASCII one before matching.
#[derive(Debug, Clone)]
pub struct TableExpander {
    table: Vec<(Regex, String)>,
    suffixes: Vec<(Regex, String)>,
}

impl TableExpander {
    /// Build the English expander.
    pub fn english() -> Result<Self, ConfigurationError> {
        let compile = |pat: &str| -> Result<Regex, ConfigurationError> {
            let raw = format!(r"(?i)\b{}\b", regex::escape(pat));
            Regex::new(&raw).map_err(|source| ConfigurationError::AcronymPattern {
                pattern: raw,
                source,
            })
        };

        let table = EN_CONTRACTIONS
            .iter()
            .map(|(c, e)| Ok((compile(c)?, e.to_string())))
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        let suffixes = EN_SUFFIX_RULES
            .iter()
            .map(|(suf, rep)| {
                let raw = format!(r"(?i){}\b", regex::escape(suf));
                let re = Regex::new(&raw).map_err(|source| ConfigurationError::AcronymPattern {
                    pattern: raw,
                    source,
                })?;
                Ok((re, rep.to_string()))
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        Ok(Self { table, suffixes })
    }
}

impl ContractionExpander for TableExpander {
    fn expand(&self, text: &str) -> Result<String, anyhow::Error> {
        let mut text = text.replace('\u{2019}', "'");
        for (re, rep) in &self.table {
            text = re.replace_all(&text, rep.as_str()).into_owned();
        }
        for (re, rep) in &self.suffixes {
            text = re.replace_all(&text, rep.as_str()).into_owned();
        }
        Ok(text)
    }
}

/// The default expander for a language: table-driven for English,
/// no-op for Spanish.
pub fn default_expander(
    language: Language,
) -> Result<Box<dyn ContractionExpander>, ConfigurationError> {
    match language {
        Language::English => Ok(Box::new(TableExpander::english()?)),
        Language::Spanish => Ok(Box::new(NoopExpander)),
    }
}
