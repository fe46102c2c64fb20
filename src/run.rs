//! End-to-end ranking run: load the corpus, run both estimators, summarize

use crate::config::{validate, Config};
use crate::corpus::crawl;
use crate::output::{corpus_statistics, RankSummary};
use crate::rank::{iterate_with, IterationConfig, SamplingConfig};
use crate::Result;
use chrono::Utc;
use std::path::Path;

/// Ranks the corpus in `directory` with both estimators
///
/// # Arguments
///
/// * `directory` - The corpus directory
/// * `config` - Run configuration, validated before the corpus is read
/// * `config_hash` - Hash of the configuration file, if one was loaded
///
/// # Returns
///
/// * `Ok(RankSummary)` - Both rank tables plus run metadata
/// * `Err(RankError)` - Invalid configuration, unreadable corpus, or bad parameters
pub fn run_ranking(
    directory: &Path,
    config: &Config,
    config_hash: Option<String>,
) -> Result<RankSummary> {
    validate(config)?;
    let corpus = crawl(directory, &config.corpus.extension)?;
    let statistics = corpus_statistics(&corpus);

    let sampling = SamplingConfig::from(&config.ranking);
    tracing::info!(
        "Sampling {} steps (damping {})",
        sampling.samples,
        sampling.damping_factor
    );
    let sampled = sampling.run(&corpus)?;

    let iteration = IterationConfig::from(&config.ranking);
    tracing::info!(
        "Iterating to tolerance {} (at most {} passes)",
        iteration.tolerance,
        iteration.max_iterations
    );
    let iterated = iterate_with(&corpus, &iteration)?;

    Ok(RankSummary {
        corpus_path: directory.display().to_string(),
        generated_at: Utc::now(),
        config_hash,
        damping_factor: config.ranking.damping_factor,
        samples: sampling.samples,
        seed: sampling.seed,
        statistics,
        sampled,
        iterated,
    })
}
