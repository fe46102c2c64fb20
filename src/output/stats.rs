//! Corpus statistics
//!
//! Shape of the link graph, printed with `--stats` and included in the
//! markdown report.

use crate::corpus::Corpus;

/// Link graph summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStatistics {
    /// Number of pages in the corpus
    pub total_pages: usize,

    /// Number of in-corpus links
    pub total_links: usize,

    /// Pages without outbound links
    pub pages_without_links: Vec<String>,

    /// Pages no other page links to
    pub pages_without_backlinks: Vec<String>,

    /// Page with the most inbound links and its count
    pub most_linked: Option<(String, usize)>,
}

/// Collects statistics from a corpus
pub fn corpus_statistics(corpus: &Corpus) -> CorpusStatistics {
    let backlinks = corpus.backlinks();

    let pages_without_backlinks = backlinks
        .iter()
        .filter(|(_, sources)| sources.is_empty())
        .map(|(page, _)| page.to_string())
        .collect();

    // Ties go to the lexicographically first page
    let most_linked = backlinks
        .iter()
        .filter(|(_, sources)| !sources.is_empty())
        .fold(None::<(&str, usize)>, |best, (page, sources)| match best {
            Some((_, count)) if count >= sources.len() => best,
            _ => Some((*page, sources.len())),
        })
        .map(|(page, count)| (page.to_string(), count));

    CorpusStatistics {
        total_pages: corpus.len(),
        total_links: corpus.link_count(),
        pages_without_links: corpus.dangling_pages().map(str::to_string).collect(),
        pages_without_backlinks,
        most_linked,
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CorpusStatistics) {
    println!("Corpus Statistics");
    println!("  Pages: {}", stats.total_pages);
    println!("  Links: {}", stats.total_links);
    if stats.total_pages > 0 {
        println!(
            "  Average links per page: {:.2}",
            stats.total_links as f64 / stats.total_pages as f64
        );
    }
    println!(
        "  Pages without links: {}",
        format_page_list(&stats.pages_without_links)
    );
    println!(
        "  Pages without backlinks: {}",
        format_page_list(&stats.pages_without_backlinks)
    );
    if let Some((page, count)) = &stats.most_linked {
        println!("  Most linked page: {} ({} backlinks)", page, count);
    }
    println!();
}

pub(crate) fn format_page_list(pages: &[String]) -> String {
    if pages.is_empty() {
        "none".to_string()
    } else {
        pages.join(", ")
    }
}
