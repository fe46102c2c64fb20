//! Integration tests for corpus loading and ranking
//!
//! These tests run the estimators end to end over on-disk corpora: the demo
//! corpora shipped in `demos/` and small directories built in temp dirs.

use linkrank::config::{parse_config, Config};
use linkrank::output::format_text_summary;
use linkrank::{crawl, iterate_pagerank, run_ranking, sample_pagerank, CorpusError, RankError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn seeded_config(seed: u64) -> Config {
    parse_config(&format!("[ranking]\nseed = {}\n", seed)).expect("valid config")
}

#[test]
fn test_demo_corpus_links() {
    let corpus = crawl(&demo("corpus1"), "html").expect("demo corpus loads");

    let pages: Vec<_> = corpus.pages().collect();
    assert_eq!(
        pages,
        vec![
            "graphs.html",
            "index.html",
            "parsing.html",
            "ranking.html",
            "tokens.html"
        ]
    );
    // External, missing and self links are gone; fragments are stripped
    assert_eq!(corpus.link_count(), 6);
    assert!(corpus.links("parsing.html").unwrap().contains("tokens.html"));
    assert!(corpus.links("tokens.html").unwrap().contains("parsing.html"));
    assert!(!corpus.links("tokens.html").unwrap().contains("tokens.html"));
    assert!(corpus.links("ranking.html").unwrap().is_empty());
}

#[test]
fn test_estimators_agree_on_demo_corpus() {
    let corpus = crawl(&demo("corpus0"), "html").unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let sampled = sample_pagerank(&corpus, 0.85, 10_000, &mut rng).unwrap();
    let iterated = iterate_pagerank(&corpus, 0.85).unwrap();

    assert!((sampled.total() - 1.0).abs() < 1e-9);
    assert!((iterated.total() - 1.0).abs() < 1e-3);
    assert!(
        sampled.max_difference(&iterated) < 0.05,
        "sampled={:?} iterated={:?}",
        sampled,
        iterated
    );
}

#[test]
fn test_page_without_links_on_disk() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("A.html"), "<p>dead end</p>").unwrap();
    fs::write(dir.path().join("B.html"), r#"<a href="A.html">A</a>"#).unwrap();

    let corpus = crawl(dir.path(), "html").unwrap();
    let next = linkrank::transition_model(&corpus, "A.html", 0.85).unwrap();
    assert_eq!(next["A.html"], 0.5);
    assert_eq!(next["B.html"], 0.5);
}

#[test]
fn test_single_page_corpus_on_disk() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("A.html"), r#"<a href="A.html">me</a>"#).unwrap();

    let summary = run_ranking(dir.path(), &seeded_config(1), None).unwrap();
    assert_eq!(summary.sampled.get("A.html"), Some(1.0));
    assert!((summary.iterated.ranks.get("A.html").unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn test_run_ranking_is_reproducible_with_seed() {
    let first = run_ranking(&demo("corpus1"), &seeded_config(99), None).unwrap();
    let second = run_ranking(&demo("corpus1"), &seeded_config(99), None).unwrap();

    assert_eq!(first.sampled, second.sampled);
    assert_eq!(first.iterated.ranks, second.iterated.ranks);
    assert!(first.iterated.converged);
    assert_eq!(first.statistics.total_pages, 5);
    assert_eq!(first.statistics.pages_without_links, vec!["ranking.html"]);
    assert_eq!(
        format_text_summary(&first, 4),
        format_text_summary(&second, 4)
    );
}

#[test]
fn test_run_ranking_report_layout() {
    let summary = run_ranking(&demo("corpus0"), &seeded_config(5), None).unwrap();
    let text = format_text_summary(&summary, 4);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "PageRank Results from Sampling (n = 10000)");
    assert!(lines[1].starts_with("  1.html: 0."));
    assert!(lines[4].starts_with("  4.html: 0."));
    assert_eq!(lines[5], "PageRank Results from Iteration");
    assert_eq!(lines[7], "  2.html: 0.4292");
}

#[test]
fn test_run_ranking_missing_directory() {
    let result = run_ranking(Path::new("/nonexistent/corpus"), &Config::default(), None);
    assert!(matches!(
        result,
        Err(RankError::Corpus(CorpusError::Io { .. }))
    ));
}

#[test]
fn test_run_ranking_directory_without_pages() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "nothing to rank").unwrap();

    let result = run_ranking(dir.path(), &Config::default(), None);
    assert!(matches!(
        result,
        Err(RankError::Corpus(CorpusError::Empty { .. }))
    ));
}

#[test]
fn test_run_ranking_rejects_invalid_config() {
    let mut config = Config::default();
    config.ranking.samples = 0;

    let result = run_ranking(&demo("corpus0"), &config, None);
    assert!(matches!(result, Err(RankError::Config(_))));
}
