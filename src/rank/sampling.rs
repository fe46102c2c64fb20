use super::{check_corpus, check_damping, transition_model, RankTable};
use crate::config::RankingConfig;
use crate::corpus::Corpus;
use crate::{RankError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Parameters of the random-walk estimator
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    pub damping_factor: f64,
    pub samples: usize,
    /// Fixed seed for a reproducible walk; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

impl From<&RankingConfig> for SamplingConfig {
    fn from(config: &RankingConfig) -> Self {
        Self {
            damping_factor: config.damping_factor,
            samples: config.samples,
            seed: config.seed,
        }
    }
}

impl SamplingConfig {
    /// Random source for the walk
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Runs the walk with the configured random source
    pub fn run(&self, corpus: &Corpus) -> Result<RankTable> {
        sample_pagerank(corpus, self.damping_factor, self.samples, &mut self.rng())
    }
}

/// Estimates PageRank by sampling a random walk of `samples` steps
///
/// The walk starts on a uniformly chosen page. Each step draws the next page
/// from [`transition_model`] of the current one. A page's rank is the share
/// of steps that landed on it; the starting page is not counted.
///
/// # Errors
///
/// * `InvalidParameter` - bad damping factor, empty corpus, or `samples == 0`
///
/// # Example
///
/// ```
/// use linkrank::{sample_pagerank, Corpus};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let ranks = sample_pagerank(&corpus, 0.85, 1000, &mut rng).unwrap();
/// assert!((ranks.total() - 1.0).abs() < 1e-9);
/// ```
pub fn sample_pagerank<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping_factor: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankTable> {
    check_damping(damping_factor)?;
    check_corpus(corpus)?;
    if samples == 0 {
        return Err(RankError::InvalidParameter(
            "samples must be >= 1".to_string(),
        ));
    }

    let mut current = corpus
        .pages()
        .choose(rng)
        .ok_or_else(|| RankError::InvalidParameter("corpus is empty".to_string()))?;
    tracing::debug!("Random walk of {} steps starting at {}", samples, current);

    let mut visits: HashMap<&str, usize> = corpus.pages().map(|page| (page, 0)).collect();
    for _ in 0..samples {
        let (pages, weights): (Vec<&str>, Vec<f64>) =
            transition_model(corpus, current, damping_factor)?
                .into_iter()
                .unzip();
        let index = WeightedIndex::new(&weights)
            .map_err(|e| RankError::InvalidParameter(format!("transition weights: {}", e)))?;
        current = pages[index.sample(rng)];
        *visits.entry(current).or_insert(0) += 1;
    }

    let n = samples as f64;
    Ok(visits
        .into_iter()
        .map(|(page, count)| (page, count as f64 / n))
        .collect())
}
