//! Report sink trait and the data handed to it
//!
//! A run produces one [`RankSummary`]; every configured [`RankReporter`]
//! renders it in its own format.

use crate::output::stats::CorpusStatistics;
use crate::rank::{Convergence, RankTable};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything a report needs about one ranking run
#[derive(Debug, Clone)]
pub struct RankSummary {
    /// Corpus directory as given on the command line
    pub corpus_path: String,

    pub generated_at: DateTime<Utc>,

    /// SHA-256 of the configuration file, when one was used
    pub config_hash: Option<String>,

    pub damping_factor: f64,
    pub samples: usize,
    pub seed: Option<u64>,

    pub statistics: CorpusStatistics,

    /// Random-walk estimate
    pub sampled: RankTable,

    /// Iterative estimate with its convergence details
    pub iterated: Convergence,
}

impl RankSummary {
    /// Largest disagreement between the two estimators
    pub fn max_difference(&self) -> f64 {
        self.iterated.ranks.max_difference(&self.sampled)
    }
}

/// Trait for report sinks
pub trait RankReporter {
    /// Renders the summary of a finished run
    fn report(&self, summary: &RankSummary) -> OutputResult<()>;
}
