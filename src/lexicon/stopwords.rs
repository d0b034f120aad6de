//! Stopword list loading
//!
//! Merges one or more external stopword list files into a single
//! deduplicated, insertion-ordered set. Each file carries a fixed
//! 3-line header followed by one stopword per line.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::info;

use crate::error::ConfigurationError;

/// Number of header lines skipped at the top of every stopword file.
const HEADER_LINES: usize = 3;

/// A deduplicated, insertion-ordered stopword set.
///
/// Membership checks go through a side hash set; iteration order is the
/// first-seen order across the input files. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    ordered: Vec<String>,
    index: FxHashSet<String>,
}

impl StopwordList {
    /// An empty list (filters nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and merge stopword files.
    ///
    /// Each file's first [`HEADER_LINES`] lines are skipped; remaining
    /// non-empty lines are taken verbatim (trimmed, lowercased). A missing
    /// or unreadable file is fatal.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigurationError> {
        let mut list = Self::default();
        for path in paths {
            let path = path.as_ref();
            let content =
                fs::read_to_string(path).map_err(|source| ConfigurationError::StopwordFile {
                    path: PathBuf::from(path),
                    source,
                })?;
            for line in content.lines().skip(HEADER_LINES) {
                let word = line.trim();
                if !word.is_empty() {
                    list.insert(&word.to_lowercase());
                }
            }
        }
        info!(stopwords = list.len(), files = paths.len(), "stopword list loaded");
        Ok(list)
    }

    /// Build a list from an in-memory slice, preserving order.
    pub fn from_words(words: &[&str]) -> Self {
        let mut list = Self::default();
        for word in words {
            list.insert(&word.to_lowercase());
        }
        list
    }

    fn insert(&mut self, word: &str) {
        if self.index.insert(word.to_string()) {
            self.ordered.push(word.to_string());
        }
    }

    /// Check membership.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_stw_file(dir: &tempfile::TempDir, name: &str, words: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "# stopword list").unwrap();
        writeln!(f, "# source: test fixture").unwrap();
        writeln!(f, "#").unwrap();
        for w in words {
            writeln!(f, "{w}").unwrap();
        }
        path
    }

    #[test]
    fn test_header_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_stw_file(&dir, "en.txt", &["the", "an"]);

        let list = StopwordList::from_files(&[path]).unwrap();
        assert!(list.contains("the"));
        assert!(list.contains("an"));
        // Header lines must not leak into the set.
        assert!(!list.contains("# stopword list"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_merge_preserves_first_seen_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_stw_file(&dir, "a.txt", &["zebra", "apple", "mango"]);
        let b = write_stw_file(&dir, "b.txt", &["apple", "banana"]);

        let list = StopwordList::from_files(&[a, b]).unwrap();
        let order: Vec<_> = list.iter().collect();
        assert_eq!(order, vec!["zebra", "apple", "mango", "banana"]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = StopwordList::from_files(&[Path::new("/nonexistent/stw.txt")]).unwrap_err();
        assert!(matches!(err, ConfigurationError::StopwordFile { .. }));
    }

    #[test]
    fn test_words_lowercased() {
        let list = StopwordList::from_words(&["The", "AN"]);
        assert!(list.contains("the"));
        assert!(list.contains("an"));
        assert!(!list.contains("The"));
    }

    #[test]
    fn test_empty_list() {
        let list = StopwordList::empty();
        assert!(list.is_empty());
        assert!(!list.contains("the"));
    }
}
