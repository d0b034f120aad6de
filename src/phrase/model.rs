//! Statistical bigram phrase model.
//!
//! Fit phase: count corpus-wide unigrams and adjacent bigrams, then
//! select bigrams whose frequency-based score clears a threshold:
//!
//! ```text
//! score(a, b) = (count(a, b) − min_count) × corpus_size / (count(a) × count(b))
//! ```
//!
//! where `corpus_size` is the total token count. A bigram is selected
//! iff `count(a, b) >= min_count` and `score > threshold`.
//!
//! Apply phase: a single greedy non-overlapping left-to-right pass.
//! A selected pair `(a, b)` is emitted as one token `a_b` and the scan
//! advances past both, so a merged token is never itself a merge
//! candidate in the same call (single-level detection, not recursive).
//!
//! The model is corpus-scoped: it must only be applied to token
//! sequences drawn from the corpus it was fitted on.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Parameters for phrase detection.
#[derive(Debug, Clone)]
pub struct PhraseConfig {
    /// Minimum raw bigram co-occurrence count.
    pub min_count: u64,
    /// Score threshold a bigram must exceed to be merged.
    pub threshold: f64,
    /// Separator placed between the two halves of a merged token.
    pub delimiter: String,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            min_count: 2,
            threshold: 20.0,
            delimiter: "_".to_string(),
        }
    }
}

/// A fitted bigram model: the set of selected pairs plus the join
/// delimiter. Read-only after [`PhraseModel::fit`].
#[derive(Debug, Clone)]
pub struct PhraseModel {
    merges: FxHashMap<(String, String), f64>,
    delimiter: String,
}

impl PhraseModel {
    /// Fit a model over every token sequence in the corpus.
    ///
    /// An empty corpus, or one with no qualifying bigrams, yields a model
    /// that merges nothing — not an error.
    pub fn fit<S: AsRef<[String]>>(sequences: &[S], config: &PhraseConfig) -> Self {
        let mut unigrams: FxHashMap<&str, u64> = FxHashMap::default();
        let mut bigrams: FxHashMap<(&str, &str), u64> = FxHashMap::default();
        let mut corpus_size: u64 = 0;

        for seq in sequences {
            let tokens = seq.as_ref();
            corpus_size += tokens.len() as u64;
            for token in tokens {
                *unigrams.entry(token.as_str()).or_insert(0) += 1;
            }
            for pair in tokens.windows(2) {
                *bigrams.entry((pair[0].as_str(), pair[1].as_str())).or_insert(0) += 1;
            }
        }

        let mut merges = FxHashMap::default();
        for (&(a, b), &count) in &bigrams {
            if count < config.min_count {
                continue;
            }
            let count_a = unigrams[a];
            let count_b = unigrams[b];
            let score = (count - config.min_count) as f64 * corpus_size as f64
                / (count_a as f64 * count_b as f64);
            if score > config.threshold {
                debug!(bigram = %format!("{a} {b}"), score, count, "bigram selected");
                merges.insert((a.to_string(), b.to_string()), score);
            }
        }

        info!(
            phrases = merges.len(),
            corpus_tokens = corpus_size,
            "phrase model fitted"
        );

        Self {
            merges,
            delimiter: config.delimiter.clone(),
        }
    }

    /// A model that merges nothing.
    pub fn empty() -> Self {
        Self {
            merges: FxHashMap::default(),
            delimiter: PhraseConfig::default().delimiter,
        }
    }

    /// Number of selected bigrams.
    pub fn num_phrases(&self) -> usize {
        self.merges.len()
    }

    /// Returns `true` if the model merges nothing.
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// Score of a selected bigram, if present.
    pub fn score(&self, a: &str, b: &str) -> Option<f64> {
        self.merges.get(&(a.to_string(), b.to_string())).copied()
    }

    /// Rewrite one token sequence, merging selected adjacent pairs.
    ///
    /// Greedy, non-overlapping, left-to-right: given `[a, b, c]` where
    /// both `(a, b)` and `(b, c)` are selected, the output is
    /// `[a_b, c]`.
    pub fn apply(&self, tokens: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if i + 1 < tokens.len()
                && self
                    .merges
                    .contains_key(&(tokens[i].clone(), tokens[i + 1].clone()))
            {
                out.push(format!("{}{}{}", tokens[i], self.delimiter, tokens[i + 1]));
                i += 2;
            } else {
                out.push(tokens[i].clone());
                i += 1;
            }
        }
        out
    }

    /// Rewrite and space-join one token sequence.
    pub fn transform(&self, tokens: &[String]) -> String {
        self.apply(tokens).join(" ")
    }
}
