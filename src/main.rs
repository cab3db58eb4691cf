use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use run_config::RunConfig;
use search::{Execution, Summary};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let config = opts.config()?;
    let codec = config
        .codec()
        .with_context(|| anyhow::anyhow!("Invalid alphabet {:?}", config.alphabet))?;

    let tokens = match words_list::load(&config.corpus) {
        Ok(tokens) => tokens,
        Err(e) if opts.strict => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "corpus unavailable, nothing to do");
            eprintln!("Usage: coverage [CORPUS] (no readable corpus at {})", e.path.display());
            return Ok(());
        }
    };

    let execution = if config.parallel {
        Execution::Parallel {
            chunk_size: config.chunk_size,
        }
    } else {
        Execution::Sequential
    };
    let summary = search::run(&codec, &tokens, execution);

    if opts.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("words: {}", summary.stats.words);
    println!("unique words: {}", summary.stats.unique_words);
    println!("unique masks: {}", summary.stats.unique_masks);
    println!("dominant masks: {}", summary.stats.dominant_masks);
    match &summary.report {
        Some(report) => println!("{}", report),
        None => println!("no pairs available"),
    }
}

/// Find the pairs of words in a corpus that together cover the most letters.
#[derive(Debug, clap::Parser)]
struct Opts {
    /// Corpus file, split on whitespace and `.,:;`.
    corpus: Option<PathBuf>,

    /// JSON file with run settings. Command line flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Letters to count, in bit order.
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Filter and score masks on all cores.
    #[arg(short, long)]
    parallel: bool,

    /// Masks per chunk for the parallel filter.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Fail instead of printing usage when the corpus cannot be read.
    #[arg(long)]
    strict: bool,
}

impl Opts {
    fn config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json(path)?,
            None => RunConfig::default(),
        };
        if let Some(corpus) = &self.corpus {
            config.corpus = corpus.clone();
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = alphabet.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        config.parallel |= self.parallel;
        Ok(config)
    }
}
