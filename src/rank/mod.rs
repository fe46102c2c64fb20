//! Ranking module: the two PageRank estimators
//!
//! - `transition`: where a random surfer goes next from a given page
//! - `sampling`: PageRank from the visit frequencies of a long random walk
//! - `iteration`: PageRank as the fixed point of the PageRank equation
//!
//! Both estimators are pure functions of the corpus (plus, for sampling, the
//! random source) and return a fresh [`RankTable`].

mod iteration;
mod sampling;
mod table;
mod transition;

pub use iteration::{iterate_pagerank, iterate_with, Convergence, IterationConfig};
pub use sampling::{sample_pagerank, SamplingConfig};
pub use table::RankTable;
pub use transition::{transition_model, TransitionDistribution};

use crate::corpus::Corpus;
use crate::{RankError, Result};

fn check_damping(damping_factor: f64) -> Result<()> {
    // NaN fails both comparisons
    if damping_factor > 0.0 && damping_factor < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidParameter(format!(
            "damping factor must be strictly between 0 and 1, got {}",
            damping_factor
        )))
    }
}

fn check_corpus(corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(RankError::InvalidParameter("corpus is empty".to_string()));
    }
    Ok(())
}
