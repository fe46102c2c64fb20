//! Plain-text rank reports for standard output

use crate::output::traits::{OutputResult, RankReporter, RankSummary};
use crate::rank::RankTable;
use std::io::Write;

/// Formats one labeled rank report
///
/// Pages are listed in lexicographic order, one per line, with `precision`
/// decimals.
///
/// # Example
///
/// ```
/// use linkrank::output::format_report;
/// use linkrank::RankTable;
///
/// let ranks: RankTable = [("b.html", 0.25), ("a.html", 0.75)].into_iter().collect();
/// assert_eq!(
///     format_report("Ranks", &ranks, 4),
///     "Ranks\n  a.html: 0.7500\n  b.html: 0.2500\n"
/// );
/// ```
pub fn format_report(title: &str, ranks: &RankTable, precision: usize) -> String {
    let mut report = format!("{}\n", title);
    for (page, rank) in ranks.sorted() {
        report.push_str(&format!("  {}: {:.*}\n", page, precision, rank));
    }
    report
}

/// Title of the random-walk report
pub fn sampling_title(samples: usize) -> String {
    format!("PageRank Results from Sampling (n = {})", samples)
}

/// Title of the iterative report
pub fn iteration_title() -> &'static str {
    "PageRank Results from Iteration"
}

/// Formats both reports of a run, sampling first
pub fn format_text_summary(summary: &RankSummary, precision: usize) -> String {
    let mut text = format_report(
        &sampling_title(summary.samples),
        &summary.sampled,
        precision,
    );
    text.push_str(&format_report(
        iteration_title(),
        &summary.iterated.ranks,
        precision,
    ));
    text
}

/// Writes both reports to standard output
#[derive(Debug, Clone)]
pub struct StdoutReporter {
    precision: usize,
}

impl StdoutReporter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl RankReporter for StdoutReporter {
    fn report(&self, summary: &RankSummary) -> OutputResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(format_text_summary(summary, self.precision).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
