use crate::corpus::PageId;
use std::collections::HashMap;

/// PageRank estimate for every page of a corpus
///
/// Stored unordered; [`RankTable::sorted`] orders pages for printing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankTable {
    ranks: HashMap<PageId, f64>,
}

impl RankTable {
    /// Rank of `page`, if it is part of the table
    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sum of all ranks; 1.0 up to rounding for estimator output
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, rank)| (page.as_str(), *rank))
    }

    /// Entries in lexicographic page order
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Largest absolute difference between two tables over the pages of `self`
    ///
    /// Pages missing from `other` count as rank 0.
    pub fn max_difference(&self, other: &RankTable) -> f64 {
        self.iter()
            .map(|(page, rank)| (rank - other.get(page).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }
}

impl<P: Into<PageId>> FromIterator<(P, f64)> for RankTable {
    fn from_iter<I: IntoIterator<Item = (P, f64)>>(iter: I) -> Self {
        Self {
            ranks: iter
                .into_iter()
                .map(|(page, rank)| (page.into(), rank))
                .collect(),
        }
    }
}
