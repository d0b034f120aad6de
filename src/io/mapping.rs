//! Dataset field-mapping config.
//!
//! Source files name their columns differently per dataset; a JSON
//! config maps a dataset name to the id/title/raw-text column names:
//!
//! ```json
//! {
//!   "cordis": { "id": "projectID", "title": "title", "raw_text": "objective" },
//!   "scholar": { "id": "doc_id", "title": "", "raw_text": "abstract" }
//! }
//! ```
//!
//! An empty `title` means the dataset has no title column and the raw
//! text field is used alone.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Column names for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Column holding the document identifier.
    pub id: String,
    /// Column holding the title; empty if the dataset has none.
    #[serde(default)]
    pub title: String,
    /// Column holding the document body.
    pub raw_text: String,
}

impl FieldMapping {
    /// Whether this dataset has a title column to concatenate.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

/// The full dataset-name → [`FieldMapping`] table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingConfig {
    datasets: BTreeMap<String, FieldMapping>,
}

impl MappingConfig {
    /// Load the mapping table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigurationError::MappingFile {
            path: PathBuf::from(path),
            source: e.into(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigurationError::MappingFile {
            path: PathBuf::from(path),
            source: e.into(),
        })
    }

    /// Look up the mapping for a dataset name.
    pub fn resolve(&self, dataset: &str) -> Result<&FieldMapping, ConfigurationError> {
        self.datasets
            .get(dataset)
            .ok_or_else(|| ConfigurationError::UnknownDataset(dataset.to_string()))
    }

    /// Insert a mapping (used by tests and embedders).
    pub fn insert(&mut self, dataset: impl Into<String>, mapping: FieldMapping) {
        self.datasets.insert(dataset.into(), mapping);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_and_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"cordis": {{"id": "projectID", "title": "title", "raw_text": "objective"}}}}"#
        )
        .unwrap();

        let config = MappingConfig::load(&path).unwrap();
        let mapping = config.resolve("cordis").unwrap();
        assert_eq!(mapping.id, "projectID");
        assert!(mapping.has_title());
    }

    #[test]
    fn test_unknown_dataset_is_fatal() {
        let config = MappingConfig::default();
        let err = config.resolve("nope").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownDataset(_)));
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let mapping: FieldMapping =
            serde_json::from_str(r#"{"id": "doc_id", "raw_text": "abstract"}"#).unwrap();
        assert!(!mapping.has_title());
    }
}
