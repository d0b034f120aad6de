//! End-to-end pipeline scenarios: stopword files on disk, corpus read
//! through the registry, preprocessing, and output writing.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use nlpipe::annotate::RuleAnnotator;
use nlpipe::corpus::{Corpus, Document};
use nlpipe::io::{write_csv, CorpusReader, CsvReader, FieldMapping, JsonlReader};
use nlpipe::phrase::PhraseConfig;
use nlpipe::pipeline::Pipe;
use nlpipe::types::Language;

fn write_stopword_file(dir: &tempfile::TempDir, name: &str, words: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    // Fixed 3-line header, then one stopword per line.
    writeln!(f, "# stopword list").unwrap();
    writeln!(f, "# language: en").unwrap();
    writeln!(f, "#").unwrap();
    for w in words {
        writeln!(f, "{w}").unwrap();
    }
    path
}

fn english_pipe(stw_dir: &tempfile::TempDir) -> Pipe<RuleAnnotator> {
    let stw = write_stopword_file(stw_dir, "common.txt", &["the", "had", "an"]);
    Pipe::new(&[stw], Language::English, RuleAnnotator::new(Language::English)).unwrap()
}

#[test]
fn mri_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let pipe = english_pipe(&dir);

    let tokens = pipe.do_pipeline("The patient had an MRI scan.").unwrap();

    // Stopwords from the loaded list never survive.
    for stop in ["the", "had", "an"] {
        assert!(!tokens.contains(&stop.to_string()), "{stop:?} leaked into {tokens:?}");
    }
    // The acronym expansion and the content words come through lowercased.
    for expected in ["patient", "magnetic", "resonance", "image", "scan"] {
        assert!(
            tokens.contains(&expected.to_string()),
            "missing {expected:?} in {tokens:?}"
        );
    }
    for token in &tokens {
        assert_eq!(*token, token.to_lowercase());
        assert!(token.chars().all(|c| c.is_alphabetic()));
    }
}

#[test]
fn empty_text_yields_empty_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let pipe = english_pipe(&dir);
    assert!(pipe.do_pipeline("").unwrap().is_empty());
}

#[test]
fn skip_ngrams_is_plain_join_of_filtered_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let pipe = english_pipe(&dir);

    let mut corpus = Corpus::from_documents(vec![
        Document::new("1", "The patient had an MRI scan."),
        Document::new("2", "Blood pressure readings were stable."),
    ]);
    pipe.preproc(&mut corpus, true).unwrap();

    for doc in corpus.iter() {
        let expected = pipe.do_pipeline(&doc.raw_text).unwrap().join(" ");
        assert_eq!(doc.lemmas.as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn ngram_detection_merges_recurring_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let pipe = english_pipe(&dir).with_phrase_config(PhraseConfig {
        threshold: 1.0,
        ..PhraseConfig::default()
    });

    let mut docs: Vec<Document> = (0..30)
        .map(|i| Document::new(i.to_string(), "Neural networks improve."))
        .collect();
    docs.push(Document::new("other", "Topology matters."));
    let mut corpus = Corpus::from_documents(docs);

    pipe.preproc(&mut corpus, false).unwrap();

    let lemmas = corpus.documents[0].lemmas.as_deref().unwrap();
    assert!(
        lemmas.contains('_'),
        "expected a merged bigram in {lemmas:?}"
    );
}

#[test]
fn read_preprocess_write_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    // Source file with dataset-specific column names.
    let src = dir.path().join("source.jsonl");
    let mut f = File::create(&src).unwrap();
    writeln!(
        f,
        r#"{{"projectID": "p1", "title": "Imaging study", "objective": "The patient had an MRI scan."}}"#
    )
    .unwrap();
    writeln!(f, r#"{{"projectID": "p2", "title": "", "objective": ""}}"#).unwrap();

    let mapping = FieldMapping {
        id: "projectID".into(),
        title: "title".into(),
        raw_text: "objective".into(),
    };
    let mut corpus = JsonlReader.read(&src, &mapping).unwrap();
    assert_eq!(corpus.len(), 1, "blank row must be dropped at read time");
    assert!(corpus.documents[0].raw_text.starts_with("Imaging study "));

    let pipe = english_pipe(&dir);
    pipe.preproc(&mut corpus, true).unwrap();

    let out = dir.path().join("out.csv");
    write_csv(&out, &corpus).unwrap();

    let read_back = CsvReader
        .read(
            &out,
            &FieldMapping {
                id: "id".into(),
                title: String::new(),
                raw_text: "lemmas".into(),
            },
        )
        .unwrap();
    assert_eq!(read_back.len(), 1);
    assert!(read_back.documents[0].raw_text.contains("patient"));
}

#[test]
fn rerun_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let pipe = english_pipe(&dir);

    let base = Corpus::from_documents(vec![
        Document::new("1", "The patient had an MRI scan."),
        Document::new("2", "Computed tomography found nothing unusual."),
        Document::new("3", "Heart rate and blood pressure were monitored."),
    ]);

    let mut first = base.clone();
    let mut second = base.clone();
    pipe.preproc(&mut first, false).unwrap();
    pipe.preproc(&mut second, false).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.lemmas, b.lemmas);
    }
}
