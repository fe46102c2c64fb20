use super::{check_corpus, check_damping};
use crate::corpus::Corpus;
use crate::{RankError, Result};
use std::collections::BTreeMap;

/// Probability of visiting each page next, keyed by page id
pub type TransitionDistribution<'a> = BTreeMap<&'a str, f64>;

/// Returns the probability distribution over the next page of a random surfer
///
/// With probability `damping_factor` the surfer follows one of the links of
/// `page`, chosen uniformly; otherwise it jumps to any corpus page. A page
/// without links sends the surfer to every page (itself included) with
/// probability `1/N`.
///
/// # Errors
///
/// * `InvalidParameter` - `damping_factor` outside (0, 1), or empty corpus
/// * `InvalidPage` - `page` is not part of the corpus
///
/// # Example
///
/// ```
/// use linkrank::{transition_model, Corpus};
///
/// let corpus = Corpus::from_links([("a", vec![]), ("b", vec!["a"])]);
/// let next = transition_model(&corpus, "a", 0.85).unwrap();
/// assert_eq!(next["a"], 0.5);
/// assert_eq!(next["b"], 0.5);
/// ```
pub fn transition_model<'a>(
    corpus: &'a Corpus,
    page: &str,
    damping_factor: f64,
) -> Result<TransitionDistribution<'a>> {
    check_damping(damping_factor)?;
    check_corpus(corpus)?;
    let links = corpus
        .links(page)
        .ok_or_else(|| RankError::InvalidPage(page.to_string()))?;

    let n = corpus.len() as f64;
    if links.is_empty() {
        return Ok(corpus.pages().map(|p| (p, 1.0 / n)).collect());
    }

    let jump = (1.0 - damping_factor) / n;
    let follow = damping_factor / links.len() as f64;
    let distribution = corpus
        .pages()
        .map(|p| {
            if links.contains(p) {
                (p, jump + follow)
            } else {
                (p, jump)
            }
        })
        .collect();
    Ok(distribution)
}
