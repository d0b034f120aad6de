//! Core types shared across pipeline stages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Part-of-speech tag assigned to a token by the annotation engine.
///
/// The set is deliberately coarse: topic-modeling preprocessing only needs
/// to distinguish content-word classes from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

impl PosTag {
    /// Returns `true` for the POS classes retained by the token filter:
    /// verbs, nouns, adjectives, and proper nouns.
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            PosTag::Verb | PosTag::Noun | PosTag::Adjective | PosTag::ProperNoun
        )
    }

    /// Returns `true` for nouns and proper nouns.
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// A single annotated token produced by an
/// [`AnnotationEngine`](crate::annotate::AnnotationEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appeared in the text.
    pub text: String,
    /// Canonical (dictionary) form.
    pub lemma: String,
    /// Part-of-speech tag.
    pub pos: PosTag,
    /// Whether the surface form consists entirely of alphabetic characters.
    pub is_alpha: bool,
    /// Whether the engine's built-in lexicon considers this a stopword.
    pub is_stop: bool,
}

impl Token {
    /// Convenience constructor used heavily in tests.
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        is_alpha: bool,
        is_stop: bool,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_alpha,
            is_stop,
        }
    }
}

/// Language of the corpus under preprocessing.
///
/// Only English and Spanish carry acronym tables and annotation rules;
/// requesting anything else at construction time is a
/// [`ConfigurationError::UnsupportedLanguage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// ISO 639-1 code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" => Ok(Language::Spanish),
            other => Err(ConfigurationError::UnsupportedLanguage(other.to_string())),
        }
    }
}
