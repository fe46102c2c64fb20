//! Corpus module: the link graph the estimators rank
//!
//! A corpus maps every page to the set of pages it links to. Construction
//! through [`Corpus::from_links`] drops self-links and links to pages outside
//! the corpus, so every `Corpus` value satisfies both invariants.
//!
//! # Components
//!
//! - `Corpus`: immutable page → outbound links mapping
//! - `crawl`: builds a corpus from a directory of HTML files
//! - `extract_links`: pulls in-corpus link targets out of one HTML page

mod loader;
mod parser;

pub use loader::crawl;
pub use parser::extract_links;

use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a page, unique within a corpus
pub type PageId = String;

/// Page → outbound links mapping
///
/// Pages iterate in lexicographic order, which keeps seeded random walks
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pages: BTreeMap<PageId, BTreeSet<PageId>>,
}

impl Corpus {
    /// Builds a corpus from `(page, links)` pairs
    ///
    /// Links pointing at the page itself or at pages missing from the input
    /// are pruned. Repeated pages have their links merged.
    ///
    /// # Example
    ///
    /// ```
    /// use linkrank::Corpus;
    ///
    /// let corpus = Corpus::from_links([
    ///     ("a.html", vec!["a.html", "b.html", "elsewhere.html"]),
    ///     ("b.html", vec![]),
    /// ]);
    /// assert_eq!(corpus.links("a.html").unwrap().len(), 1);
    /// ```
    pub fn from_links<I, P, L, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PageId>,
        L: IntoIterator<Item = T>,
        T: Into<PageId>,
    {
        let mut raw: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
        for (page, links) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }

        let names: BTreeSet<PageId> = raw.keys().cloned().collect();
        let pages = raw
            .into_iter()
            .map(|(page, links)| {
                let links = links
                    .into_iter()
                    .filter(|link| *link != page && names.contains(link))
                    .collect();
                (page, links)
            })
            .collect();

        Self { pages }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Outbound links of `page`, or `None` when the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<PageId>> {
        self.pages.get(page)
    }

    /// Page identifiers in lexicographic order
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.keys().map(String::as_str)
    }

    /// `(page, outbound links)` pairs in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<PageId>)> + '_ {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Total number of links across all pages
    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }

    /// Pages without outbound links
    pub fn dangling_pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page)
    }

    /// Reverse index: every page mapped to the pages linking to it
    ///
    /// Pages nobody links to are present with an empty set.
    pub fn backlinks(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut backlinks: BTreeMap<&str, BTreeSet<&str>> =
            self.pages().map(|page| (page, BTreeSet::new())).collect();
        for (page, links) in self.iter() {
            for link in links {
                if let Some(sources) = backlinks.get_mut(link.as_str()) {
                    sources.insert(page);
                }
            }
        }
        backlinks
    }
}
