//! Corpus-level phrase (n-gram) detection
//!
//! This module provides the two-phase statistical bigram model: fit over
//! every token sequence in the corpus, then rewrite frequently
//! co-occurring adjacent pairs as single joined tokens.

pub mod model;

pub use model::{PhraseConfig, PhraseModel};
