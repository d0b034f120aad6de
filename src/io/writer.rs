//! Output writers.
//!
//! The preprocessed corpus is persisted as id + raw_text + lemmas, as
//! CSV or JSON-lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::corpus::Corpus;
use crate::error::DataError;

/// Write the corpus as CSV with an `id,raw_text,lemmas` header.
pub fn write_csv(path: &Path, corpus: &Corpus) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| DataError::Csv {
        path: PathBuf::from(path),
        source,
    })?;

    let wrap_csv = |source| DataError::Csv {
        path: PathBuf::from(path),
        source,
    };

    writer
        .write_record(["id", "raw_text", "lemmas"])
        .map_err(wrap_csv)?;
    for doc in corpus.iter() {
        writer
            .write_record([
                doc.id.as_str(),
                doc.raw_text.as_str(),
                doc.lemmas.as_deref().unwrap_or(""),
            ])
            .map_err(wrap_csv)?;
    }
    writer.flush().map_err(|source| DataError::Io {
        path: PathBuf::from(path),
        source,
    })?;

    info!(documents = corpus.len(), path = %path.display(), "csv corpus written");
    Ok(())
}

/// Write the corpus as JSON-lines, one document object per line.
pub fn write_jsonl(path: &Path, corpus: &Corpus) -> Result<(), DataError> {
    let file = File::create(path).map_err(|source| DataError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for (line, doc) in corpus.iter().enumerate() {
        let json = serde_json::to_string(doc).map_err(|source| DataError::Json {
            path: PathBuf::from(path),
            line: line + 1,
            source,
        })?;
        writeln!(writer, "{json}").map_err(|source| DataError::Io {
            path: PathBuf::from(path),
            source,
        })?;
    }
    writer.flush().map_err(|source| DataError::Io {
        path: PathBuf::from(path),
        source,
    })?;

    info!(documents = corpus.len(), path = %path.display(), "jsonl corpus written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;
    use crate::io::readers::{CorpusReader, CsvReader, JsonlReader};
    use crate::io::mapping::FieldMapping;

    fn processed_corpus() -> Corpus {
        let mut doc = Document::new("1", "The patient had an MRI scan.");
        doc.lemmas = Some("patient magnetic resonance image scan".into());
        Corpus::from_documents(vec![doc])
    }

    fn identity_mapping() -> FieldMapping {
        FieldMapping {
            id: "id".into(),
            title: String::new(),
            raw_text: "raw_text".into(),
        }
    }

    #[test]
    fn test_csv_write_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let corpus = processed_corpus();

        write_csv(&path, &corpus).unwrap();
        let back = CsvReader.read(&path, &identity_mapping()).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.documents[0].id, "1");
        assert_eq!(back.documents[0].raw_text, corpus.documents[0].raw_text);
    }

    #[test]
    fn test_jsonl_write_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let corpus = processed_corpus();

        write_jsonl(&path, &corpus).unwrap();
        let back = JsonlReader.read(&path, &identity_mapping()).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.documents[0].raw_text, corpus.documents[0].raw_text);
    }
}
