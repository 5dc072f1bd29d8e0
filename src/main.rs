//! lexirel CLI: Extended Lesk semantic relatedness.

use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use lexirel::lesk::{ExtendedLesk, LeskConfig};
use lexirel::lexicon::{CachedLexicon, Lexicon, MemoryLexicon};
use lexirel::relation::{RelationPair, default_pairs, read_relation_file};
use lexirel::stopwords::StopwordSet;

#[derive(Parser)]
#[command(name = "lexirel", version, about = "Extended Lesk semantic relatedness")]
struct Cli {
    /// Lexicon snapshot: a JSON array of sense records.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Relation file; defaults to the built-in adapted Lesk comparison set.
    #[arg(long, global = true)]
    relations: Option<PathBuf>,

    /// Stopword list, one word per line; defaults to built-in English.
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,

    /// Bound on cached entries per lookup table. Unbounded when omitted.
    #[arg(long, global = true)]
    cache_capacity: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the relatedness of two (possibly ambiguous) words.
    Score {
        word_a: String,
        word_b: String,
    },

    /// Score word pairs from a file in parallel.
    ///
    /// One pair per line, tab- or comma-separated.
    Batch {
        /// Path to the word-pair file.
        #[arg(long)]
        pairs: PathBuf,
    },

    /// List a word's candidate senses with their glosses.
    Senses {
        word: String,
    },

    /// Validate a relation file and print the compiled pairs.
    Check,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Score { word_a, word_b } => {
            let lesk = build_engine(&cli)?;
            let score = lesk.word_relatedness(word_a, word_b);
            println!("{word_a}\t{word_b}\t{score}");
        }

        Commands::Batch { pairs } => {
            let lesk = build_engine(&cli)?;
            let word_pairs = read_word_pairs(pairs)?;
            tracing::info!(pairs = word_pairs.len(), "scoring batch");
            let scores = lesk.batch_relatedness(&word_pairs);
            for ((a, b), score) in word_pairs.iter().zip(scores) {
                println!("{a}\t{b}\t{score}");
            }
        }

        Commands::Senses { word } => {
            let lesk = build_engine(&cli)?;
            let senses = lesk.senses_for(word);
            if senses.is_empty() {
                println!("no senses known for \"{word}\"");
            }
            for sense in senses {
                let key = lesk
                    .lexicon()
                    .inner()
                    .sense_key(sense)
                    .unwrap_or("<unknown>")
                    .to_string();
                println!("{key}: {}", lesk.lexicon().gloss(sense));
            }
        }

        Commands::Check => {
            let path = cli
                .relations
                .as_ref()
                .ok_or_else(|| miette::miette!("--relations is required for check"))?;
            let pairs = read_relation_file(path)?;
            println!("{} relation pair(s) compiled:", pairs.len());
            for pair in &pairs {
                println!("  {} - {}  (weight {})", pair.chain_a, pair.chain_b, pair.weight);
            }
        }
    }

    Ok(())
}

/// Assemble the engine from the global flags.
fn build_engine(cli: &Cli) -> Result<ExtendedLesk<CachedLexicon<MemoryLexicon>>> {
    let lexicon_path = cli
        .lexicon
        .as_ref()
        .ok_or_else(|| miette::miette!("--lexicon is required for this command"))?;
    let lexicon = MemoryLexicon::from_json_file(lexicon_path)?;
    tracing::info!(
        senses = lexicon.len(),
        path = %lexicon_path.display(),
        "loaded lexicon"
    );

    let pairs = load_pairs(cli)?;
    let stopwords = load_stopwords(cli)?;

    let cached = CachedLexicon::with_capacity(lexicon, cli.cache_capacity);
    Ok(ExtendedLesk::new(cached, LeskConfig { pairs, stopwords }))
}

fn load_pairs(cli: &Cli) -> Result<Vec<RelationPair>> {
    match &cli.relations {
        Some(path) => Ok(read_relation_file(path)?),
        None => Ok(default_pairs()),
    }
}

fn load_stopwords(cli: &Cli) -> Result<StopwordSet> {
    match &cli.stopwords {
        Some(path) => {
            let file = std::fs::File::open(path).into_diagnostic()?;
            StopwordSet::from_reader(BufReader::new(file)).into_diagnostic()
        }
        None => Ok(StopwordSet::default_english()),
    }
}

fn read_word_pairs(path: &PathBuf) -> Result<Vec<(String, String)>> {
    let src = std::fs::read_to_string(path).into_diagnostic()?;
    let mut pairs = Vec::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (a, b) = line
            .split_once('\t')
            .or_else(|| line.split_once(','))
            .ok_or_else(|| miette::miette!("word-pair line \"{line}\" has no tab or comma"))?;
        pairs.push((a.trim().to_string(), b.trim().to_string()));
    }
    Ok(pairs)
}
