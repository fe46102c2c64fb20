use super::{check_corpus, check_damping, RankTable};
use crate::config::RankingConfig;
use crate::corpus::Corpus;
use crate::{RankError, Result};
use std::collections::BTreeMap;

/// Parameters of the iterative estimator
#[derive(Debug, Clone)]
pub struct IterationConfig {
    pub damping_factor: f64,
    /// A pass whose largest per-page change is below this value ends the run
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: 0.0001,
            max_iterations: 1_000,
        }
    }
}

impl From<&RankingConfig> for IterationConfig {
    fn from(config: &RankingConfig) -> Self {
        Self {
            damping_factor: config.damping_factor,
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }
}

/// Outcome of an iterative run
#[derive(Debug, Clone)]
pub struct Convergence {
    pub ranks: RankTable,
    /// Number of update passes performed
    pub passes: usize,
    /// Largest per-page change of the last pass
    pub max_delta: f64,
    /// False when `max_iterations` ran out first
    pub converged: bool,
}

/// Computes PageRank by iterating the PageRank equation with default settings
///
/// See [`iterate_with`].
///
/// # Example
///
/// ```
/// use linkrank::{iterate_pagerank, Corpus};
///
/// let corpus = Corpus::from_links([("A.html", vec!["B.html"]), ("B.html", vec!["A.html"])]);
/// let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
/// assert!((ranks.get("A.html").unwrap() - 0.5).abs() < 1e-4);
/// ```
pub fn iterate_pagerank(corpus: &Corpus, damping_factor: f64) -> Result<RankTable> {
    let config = IterationConfig {
        damping_factor,
        ..IterationConfig::default()
    };
    iterate_with(corpus, &config).map(|convergence| convergence.ranks)
}

/// Computes PageRank by repeated update passes until the ranks settle
///
/// Every page starts at `1/N`. Each pass computes, from the previous pass'
/// ranks,
///
/// ```text
/// PR(p) = (1 - d) / N + d * ( Σ PR(q) / L(q) + Σ PR(z) / N )
/// ```
///
/// where `q` ranges over the pages linking to `p`, `L(q)` is the number of
/// links of `q`, and `z` over the pages without links, which spread their
/// rank over the whole corpus. The run stops once no page changed by
/// `tolerance` or more, or after `max_iterations` passes.
///
/// # Errors
///
/// * `InvalidParameter` - bad damping factor, tolerance or iteration bound,
///   or empty corpus
pub fn iterate_with(corpus: &Corpus, config: &IterationConfig) -> Result<Convergence> {
    let damping = config.damping_factor;
    check_damping(damping)?;
    check_corpus(corpus)?;
    if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
        return Err(RankError::InvalidParameter(format!(
            "tolerance must be a positive number, got {}",
            config.tolerance
        )));
    }
    if config.max_iterations == 0 {
        return Err(RankError::InvalidParameter(
            "max_iterations must be >= 1".to_string(),
        ));
    }

    let n = corpus.len() as f64;
    let backlinks = corpus.backlinks();
    let out_degree: BTreeMap<&str, f64> = corpus
        .iter()
        .map(|(page, links)| (page, links.len() as f64))
        .collect();
    let dangling: Vec<&str> = corpus.dangling_pages().collect();

    let mut ranks: BTreeMap<&str, f64> = corpus.pages().map(|page| (page, 1.0 / n)).collect();
    let mut passes = 0;
    let mut max_delta = f64::INFINITY;

    while passes < config.max_iterations {
        let dangling_share: f64 = dangling.iter().map(|page| ranks[page]).sum::<f64>() / n;

        let mut next = BTreeMap::new();
        max_delta = 0.0;
        for (page, sources) in &backlinks {
            let inbound: f64 = sources
                .iter()
                .map(|source| ranks[source] / out_degree[source])
                .sum();
            let rank = (1.0 - damping) / n + damping * (inbound + dangling_share);
            max_delta = f64::max(max_delta, (rank - ranks[page]).abs());
            next.insert(*page, rank);
        }

        ranks = next;
        passes += 1;
        tracing::trace!("Pass {}: max delta {:.3e}", passes, max_delta);

        if max_delta < config.tolerance {
            break;
        }
    }

    let converged = max_delta < config.tolerance;
    if converged {
        tracing::debug!("Converged after {} passes", passes);
    } else {
        tracing::warn!(
            "No convergence after {} passes (max delta {:.3e}); using latest ranks",
            passes,
            max_delta
        );
    }

    Ok(Convergence {
        ranks: ranks.into_iter().collect(),
        passes,
        max_delta,
        converged,
    })
}
