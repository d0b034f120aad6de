//! Lexical resources loaded at pipeline construction
//!
//! This module provides the per-language acronym tables and the
//! stopword list loader. Both are immutable after load.

pub mod acronyms;
pub mod stopwords;

pub use acronyms::{AcronymRule, AcronymTable};
pub use stopwords::StopwordList;
