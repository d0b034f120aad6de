//! nlpipe command-line interface.
//!
//! Thin orchestration around the library: resolve the dataset field
//! mapping, read the source file, filter to the target language, run
//! the preprocessing pipeline, and write the result.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nlpipe::annotate::RuleAnnotator;
use nlpipe::io::{write_csv, write_jsonl, MappingConfig, ReaderRegistry};
use nlpipe::lang::filter_language;
use nlpipe::pipeline::Pipe;
use nlpipe::types::Language;

#[derive(Debug, Parser)]
#[command(name = "nlpipe", about = "NLP preprocessing for topic-modeling corpora")]
struct Args {
    /// Path to the source file
    #[arg(long)]
    source_path: PathBuf,

    /// Source file format (csv/jsonl)
    #[arg(long, default_value = "csv")]
    source_type: String,

    /// Name of the dataset to be preprocessed (e.g. cordis, scholar)
    #[arg(long)]
    source: String,

    /// Path to save the preprocessed data
    #[arg(long)]
    destination_path: PathBuf,

    /// Destination file format (csv/jsonl)
    #[arg(long, default_value = "csv")]
    destination_type: String,

    /// Path to the dataset field-mapping config
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Folder holding per-language stopword lists
    #[arg(long, default_value = "data/stw_lists")]
    stw_path: PathBuf,

    /// Language of the text to be preprocessed (en/es)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Number of worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    nw: usize,

    /// Disable n-gram detection
    #[arg(long)]
    no_ngrams: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let language: Language = args
        .lang
        .parse()
        .with_context(|| format!("language `{}` is not supported", args.lang))?;

    if !args.source_path.exists() {
        bail!("source path {} does not exist", args.source_path.display());
    }

    if args.nw > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.nw)
            .build_global()
            .context("failed to configure worker pool")?;
    }

    // Resolve the dataset's column names and read the corpus.
    let mappings = MappingConfig::load(&args.config)?;
    let mapping = mappings.resolve(&args.source)?;
    let registry = ReaderRegistry::with_defaults();
    let reader = registry.get(&args.source_type)?;

    info!(dataset = %args.source, path = %args.source_path.display(), "reading corpus");
    let mut corpus = reader.read(&args.source_path, mapping)?;
    corpus.drop_blank_rows();

    info!("detecting language");
    filter_language(&mut corpus, language);

    // Collect the per-language stopword list files.
    let stw_dir = args.stw_path.join(language.code());
    let mut stw_files: Vec<PathBuf> = std::fs::read_dir(&stw_dir)
        .with_context(|| format!("cannot read stopword folder {}", stw_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    stw_files.sort();

    let engine = RuleAnnotator::new(language);
    let pipe = Pipe::new(&stw_files, language, engine)?;

    info!("NLP preprocessing starts");
    let start = std::time::Instant::now();
    pipe.preproc(&mut corpus, args.no_ngrams)?;
    info!(elapsed = ?start.elapsed(), "NLP preprocessing finished");

    match args.destination_type.as_str() {
        "csv" => write_csv(&args.destination_path, &corpus)?,
        "jsonl" => write_jsonl(&args.destination_path, &corpus)?,
        other => bail!("unsupported destination format: {other}"),
    }

    Ok(())
}
