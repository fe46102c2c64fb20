//! Output module for rank reports
//!
//! This module handles:
//! - The two labeled plain-text reports on standard output
//! - An optional markdown report comparing both estimators
//! - Corpus statistics

mod markdown;
mod report;
pub mod stats;
mod traits;

pub use markdown::{format_markdown_summary, generate_markdown_summary, MarkdownReporter};
pub use report::{
    format_report, format_text_summary, iteration_title, sampling_title, StdoutReporter,
};
pub use stats::{corpus_statistics, print_statistics, CorpusStatistics};
pub use traits::{OutputError, OutputResult, RankReporter, RankSummary};

/// Hands the summary to every reporter in order, stopping at the first failure
pub fn publish(reporters: &[Box<dyn RankReporter>], summary: &RankSummary) -> OutputResult<()> {
    for reporter in reporters {
        reporter.report(summary)?;
    }
    Ok(())
}
