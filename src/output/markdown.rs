//! Markdown summary generation
//!
//! This module renders a run as a markdown document: run information,
//! corpus statistics and both estimates side by side.

use crate::output::stats::format_page_list;
use crate::output::traits::{OutputResult, RankReporter, RankSummary};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the markdown summary of a run to a file
///
/// # Arguments
///
/// * `summary` - The run summary
/// * `output_path` - Path where the markdown file should be written
/// * `precision` - Decimal places for ranks
pub fn generate_markdown_summary(
    summary: &RankSummary,
    output_path: &Path,
    precision: usize,
) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary, precision);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    tracing::info!("Markdown report written to {}", output_path.display());
    Ok(())
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &RankSummary, precision: usize) -> String {
    let mut md = String::new();

    md.push_str("# PageRank Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Corpus**: {}\n", summary.corpus_path));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "- **Damping Factor**: {}\n",
        summary.damping_factor
    ));
    md.push_str(&format!("- **Samples**: {}\n", summary.samples));
    if let Some(seed) = summary.seed {
        md.push_str(&format!("- **Seed**: {}\n", seed));
    }
    let iterated = &summary.iterated;
    if iterated.converged {
        md.push_str(&format!(
            "- **Iteration**: converged after {} passes\n",
            iterated.passes
        ));
    } else {
        md.push_str(&format!(
            "- **Iteration**: stopped after {} passes without converging (max delta {:.3e})\n",
            iterated.passes, iterated.max_delta
        ));
    }
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Corpus statistics
    let stats = &summary.statistics;
    md.push_str("## Corpus\n\n");
    md.push_str(&format!("- **Pages**: {}\n", stats.total_pages));
    md.push_str(&format!("- **Links**: {}\n", stats.total_links));
    md.push_str(&format!(
        "- **Pages Without Links**: {}\n",
        format_page_list(&stats.pages_without_links)
    ));
    md.push_str(&format!(
        "- **Pages Without Backlinks**: {}\n",
        format_page_list(&stats.pages_without_backlinks)
    ));
    if let Some((page, count)) = &stats.most_linked {
        md.push_str(&format!(
            "- **Most Linked**: {} ({} backlinks)\n",
            page, count
        ));
    }
    md.push('\n');

    // Ranks side by side
    md.push_str("## Ranks\n\n");
    md.push_str("| Page | Sampling | Iteration | Difference |\n");
    md.push_str("|------|----------|-----------|------------|\n");

    let pages: BTreeSet<&str> = summary
        .sampled
        .iter()
        .chain(iterated.ranks.iter())
        .map(|(page, _)| page)
        .collect();
    for page in pages {
        let sampled = summary.sampled.get(page).unwrap_or(0.0);
        let iterative = iterated.ranks.get(page).unwrap_or(0.0);
        md.push_str(&format!(
            "| {} | {:.*} | {:.*} | {:.*} |\n",
            escape_cell(page),
            precision,
            sampled,
            precision,
            iterative,
            precision,
            (sampled - iterative).abs()
        ));
    }
    md.push('\n');

    md.push_str(&format!(
        "Largest difference between the estimators: {:.*}\n",
        precision,
        summary.max_difference()
    ));

    md
}

/// Escapes a page name for use inside a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Writes the markdown summary to a fixed path
#[derive(Debug, Clone)]
pub struct MarkdownReporter {
    path: PathBuf,
    precision: usize,
}

impl MarkdownReporter {
    pub fn new(path: impl Into<PathBuf>, precision: usize) -> Self {
        Self {
            path: path.into(),
            precision,
        }
    }
}

impl RankReporter for MarkdownReporter {
    fn report(&self, summary: &RankSummary) -> OutputResult<()> {
        generate_markdown_summary(summary, &self.path, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::stats::CorpusStatistics;
    use crate::rank::Convergence;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn summary(converged: bool) -> RankSummary {
        RankSummary {
            corpus_path: "demos/corpus0".to_string(),
            generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            config_hash: Some("abc123".to_string()),
            damping_factor: 0.85,
            samples: 1000,
            seed: Some(7),
            statistics: CorpusStatistics {
                total_pages: 2,
                total_links: 1,
                pages_without_links: vec!["b.html".to_string()],
                pages_without_backlinks: vec!["a.html".to_string()],
                most_linked: Some(("b.html".to_string(), 1)),
            },
            sampled: [("a.html", 0.3), ("b.html", 0.7)].into_iter().collect(),
            iterated: Convergence {
                ranks: [("a.html", 0.35), ("b.html", 0.65)].into_iter().collect(),
                passes: 12,
                max_delta: 0.00005,
                converged,
            },
        }
    }

    #[test]
    fn test_markdown_contains_run_information() {
        let md = format_markdown_summary(&summary(true), 4);

        assert!(md.starts_with("# PageRank Summary\n"));
        assert!(md.contains("- **Corpus**: demos/corpus0\n"));
        assert!(md.contains("- **Generated**: 2024-05-01 12:30:00 UTC\n"));
        assert!(md.contains("- **Seed**: 7\n"));
        assert!(md.contains("converged after 12 passes"));
        assert!(md.contains("- **Config Hash**: abc123\n"));
        assert!(md.contains("- **Most Linked**: b.html (1 backlinks)\n"));
    }

    #[test]
    fn test_markdown_rank_table() {
        let md = format_markdown_summary(&summary(true), 4);

        assert!(md.contains("| a.html | 0.3000 | 0.3500 | 0.0500 |\n"));
        assert!(md.contains("| b.html | 0.7000 | 0.6500 | 0.0500 |\n"));
        assert!(md.contains("Largest difference between the estimators: 0.0500\n"));
        let a = md.find("| a.html").unwrap();
        let b = md.find("| b.html").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_markdown_escapes_pipes_in_page_names() {
        let mut run = summary(true);
        run.sampled = [("a|b.html", 1.0)].into_iter().collect();
        run.iterated.ranks = [("a|b.html", 1.0)].into_iter().collect();

        let md = format_markdown_summary(&run, 2);
        assert!(md.contains("| a\\|b.html | 1.00 | 1.00 | 0.00 |\n"));
    }

    #[test]
    fn test_markdown_reports_missing_convergence() {
        let md = format_markdown_summary(&summary(false), 4);
        assert!(md.contains("stopped after 12 passes without converging"));
    }

    #[test]
    fn test_markdown_reporter_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranks.md");

        MarkdownReporter::new(&path, 3)
            .report(&summary(true))
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("| a.html | 0.300 | 0.350 | 0.050 |\n"));
    }

    #[test]
    fn test_markdown_reporter_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("ranks.md");

        let result = MarkdownReporter::new(&path, 3).report(&summary(true));
        assert!(matches!(result, Err(crate::output::OutputError::Io(_))));
    }
}
