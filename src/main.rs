//! Linkrank main entry point
//!
//! This is the command-line interface for the Linkrank PageRank estimator.

use anyhow::Context;
use clap::Parser;
use linkrank::config::{load_config_with_hash, validate, Config};
use linkrank::output::{
    print_statistics, publish, MarkdownReporter, RankReporter, StdoutReporter,
};
use linkrank::run_ranking;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkrank: PageRank for a directory of HTML pages
///
/// Linkrank reads every HTML page of a directory, keeps the links between
/// them, and estimates each page's PageRank twice: by sampling a random
/// surfer and by iterating the PageRank equation until it converges.
#[derive(Parser, Debug)]
#[command(name = "linkrank")]
#[command(version)]
#[command(about = "PageRank for a directory of HTML pages", long_about = None)]
struct Cli {
    /// Directory holding the corpus pages
    #[arg(value_name = "CORPUS")]
    corpus: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long, value_name = "FACTOR")]
    damping: Option<f64>,

    /// Number of random-walk steps
    #[arg(short = 'n', long, value_name = "N")]
    samples: Option<usize>,

    /// Seed for a reproducible random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Also write a markdown report to this file
    #[arg(long, value_name = "FILE")]
    markdown: Option<PathBuf>,

    /// Print corpus statistics before the reports
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = handle_rank(&cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout only carries the reports.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkrank=info,warn"),
            1 => EnvFilter::new("linkrank=debug,info"),
            2 => EnvFilter::new("linkrank=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<(Config, Option<String>)> {
    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if let Some(damping) = cli.damping {
        config.ranking.damping_factor = damping;
    }
    if let Some(samples) = cli.samples {
        config.ranking.samples = samples;
    }
    if let Some(seed) = cli.seed {
        config.ranking.seed = Some(seed);
    }
    if let Some(markdown) = &cli.markdown {
        config.output.markdown_path = Some(markdown.clone());
    }

    validate(&config).context("invalid command-line options")?;
    Ok((config, config_hash))
}

/// Handles the ranking run: load, estimate, report
fn handle_rank(cli: &Cli) -> anyhow::Result<()> {
    let (config, config_hash) = resolve_config(cli)?;

    tracing::info!("Ranking corpus: {}", cli.corpus.display());
    let summary = run_ranking(&cli.corpus, &config, config_hash)
        .with_context(|| format!("failed to rank {}", cli.corpus.display()))?;

    if cli.stats {
        print_statistics(&summary.statistics);
    }

    let precision = config.output.precision;
    let mut reporters: Vec<Box<dyn RankReporter>> = vec![Box::new(StdoutReporter::new(precision))];
    if let Some(path) = &config.output.markdown_path {
        reporters.push(Box::new(MarkdownReporter::new(path, precision)));
    }
    publish(&reporters, &summary).context("failed to write reports")?;

    Ok(())
}
