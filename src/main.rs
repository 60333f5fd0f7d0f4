use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use shibboleth::config::Config;
use shibboleth::scoring::ExclusivePolicy;
use shibboleth::segment::{Segmenter, UnicodeSegmenter};
use shibboleth::{corpus, output, ranking, segment};

/// Shibboleth: characteristic vocabulary per document category.
///
/// Segments a corpus of raw text files into token files, then ranks the
/// terms that most distinctively mark each file against the rest of the
/// corpus.
#[derive(Parser)]
#[command(name = "shibboleth", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize raw corpus files into whitespace-separated token files
    Segment {
        /// Directory containing the raw text files
        dir: PathBuf,

        /// Extension for the tokenized output files (default: seg)
        #[arg(long)]
        ext: Option<String>,

        /// Drop stop words for this language (e.g. english, chinese)
        #[arg(long)]
        stop_words: Option<String>,
    },

    /// Rank each category's most characteristic terms
    Rank {
        /// Directory containing the tokenized category files
        dir: PathBuf,

        /// Extension of the tokenized category files (default: seg)
        #[arg(long)]
        ext: Option<String>,

        /// How many terms to print per category (default: 50)
        #[arg(long)]
        top_k: Option<usize>,

        /// What to do with terms exclusive to a single category
        #[arg(long, value_enum, default_value = "skip")]
        exclusive: ExclusiveArg,

        /// Also write the full report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show corpus statistics and run the count invariant check
    Stats {
        /// Directory containing the tokenized category files
        dir: PathBuf,

        /// Extension of the tokenized category files (default: seg)
        #[arg(long)]
        ext: Option<String>,
    },
}

/// CLI spelling of the exclusive-term policy.
#[derive(Clone, Copy, ValueEnum)]
enum ExclusiveArg {
    /// Leave category-exclusive terms out of the output
    Skip,
    /// Pin category-exclusive terms to the maximum score
    Max,
}

impl From<ExclusiveArg> for ExclusivePolicy {
    fn from(arg: ExclusiveArg) -> Self {
        match arg {
            ExclusiveArg::Skip => ExclusivePolicy::Skip,
            ExclusiveArg::Max => ExclusivePolicy::MaxScore,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shibboleth=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Segment {
            dir,
            ext,
            stop_words,
        } => {
            let config = Config::load()?;
            let ext = ext.unwrap_or(config.seg_ext);

            let segmenter: Box<dyn Segmenter> = match stop_words {
                Some(language) => Box::new(UnicodeSegmenter::with_stop_words(&language)?),
                None => Box::new(UnicodeSegmenter::new()),
            };

            let started = Instant::now();
            let count = segment::segment_corpus(&dir, &ext, segmenter.as_ref())?;
            info!(elapsed = ?started.elapsed(), "Segment stage finished");

            if count == 0 {
                println!("No raw files found in {}.", dir.display());
            } else {
                println!(
                    "{}",
                    format!("Segmented {count} files into .{ext} token files.").bold()
                );
                println!("Next: shibboleth rank {}", dir.display());
            }
        }

        Commands::Rank {
            dir,
            ext,
            top_k,
            exclusive,
            json,
        } => {
            let config = Config::load()?;
            let ext = ext.unwrap_or(config.seg_ext);
            let top_k = top_k.unwrap_or(config.top_k);
            if top_k == 0 {
                anyhow::bail!("--top-k must be at least 1");
            }

            let files = corpus::discover(&dir, &ext)?;
            if files.is_empty() {
                anyhow::bail!(
                    "no .{ext} files found in {} — run `shibboleth segment` first",
                    dir.display()
                );
            }

            let started = Instant::now();
            let counts = corpus::count_files(&files)?;
            info!(elapsed = ?started.elapsed(), "Counting finished");

            let started = Instant::now();
            let rankings = ranking::rank_corpus(&counts, exclusive.into(), top_k)?;
            info!(elapsed = ?started.elapsed(), "Scoring finished");

            output::terminal::display_rankings(&rankings);

            if let Some(path) = json {
                output::write_json_report(&path, &rankings)?;
                println!(
                    "\n{}",
                    format!("JSON report saved to: {}", path.display()).bold()
                );
            }
        }

        Commands::Stats { dir, ext } => {
            let config = Config::load()?;
            let ext = ext.unwrap_or(config.seg_ext);

            let files = corpus::discover(&dir, &ext)?;
            if files.is_empty() {
                anyhow::bail!("no .{ext} files found in {}", dir.display());
            }

            let counts = corpus::count_files(&files)?;
            counts.verify()?;
            output::terminal::display_stats(&counts);
        }
    }

    Ok(())
}
