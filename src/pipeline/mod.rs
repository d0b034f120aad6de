//! Pipeline orchestration
//!
//! This module provides the [`Pipe`] orchestrator: per-document
//! normalization fanned out across a rayon pool, followed by the
//! corpus-wide phrase-detection barrier.

pub mod pipe;

pub use pipe::Pipe;
