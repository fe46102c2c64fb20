//! Command-line tests for the `linkrank` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn linkrank() -> Command {
    Command::cargo_bin("linkrank").unwrap()
}

#[test]
fn test_prints_both_reports() {
    linkrank()
        .arg(demo("corpus0"))
        .args(["--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)\n  1.html: ",
        ))
        .stdout(predicate::str::contains(
            "PageRank Results from Iteration\n  1.html: 0.2199\n  2.html: 0.4292\n",
        ));
}

#[test]
fn test_missing_corpus_argument_is_a_usage_error() {
    linkrank()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument_is_a_usage_error() {
    linkrank()
        .arg(demo("corpus0"))
        .arg(demo("corpus1"))
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_unreadable_corpus_fails() {
    linkrank()
        .arg("/nonexistent/corpus")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_damping_fails() {
    linkrank()
        .arg(demo("corpus0"))
        .args(["--damping", "1.5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("damping_factor"));
}

#[test]
fn test_samples_option_changes_title() {
    linkrank()
        .arg(demo("corpus0"))
        .args(["-n", "500", "--seed", "1", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 500)\n",
        ));
}

#[test]
fn test_same_seed_same_output() {
    let run = || {
        linkrank()
            .arg(demo("corpus1"))
            .args(["--seed", "11", "-q"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_stats_flag() {
    linkrank()
        .arg(demo("corpus1"))
        .args(["--stats", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Corpus Statistics\n  Pages: 5\n  Links: 6\n"))
        .stdout(predicate::str::contains("Pages without links: ranking.html"));
}

#[test]
fn test_config_file_and_markdown_report() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("linkrank.toml");
    let markdown_path = dir.path().join("ranks.md");
    fs::write(
        &config_path,
        format!(
            "[ranking]\nsamples = 2000\nseed = 8\n\n[output]\nprecision = 3\nmarkdown-path = \"{}\"\n",
            markdown_path.display()
        ),
    )
    .unwrap();

    linkrank()
        .arg(demo("corpus0"))
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(n = 2000)"))
        .stdout(predicate::str::contains("  2.html: 0.429\n"));

    let markdown = fs::read_to_string(&markdown_path).unwrap();
    assert!(markdown.contains("# PageRank Summary"));
    assert!(markdown.contains("- **Samples**: 2000\n"));
    assert!(markdown.contains("- **Config Hash**: "));
}

#[cfg(unix)]
#[test]
fn test_markdown_path_keeps_raw_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let markdown_path = dir.path().join(OsStr::from_bytes(b"ranks-\xff.md"));

    linkrank()
        .arg(demo("corpus0"))
        .args(["--seed", "1", "-q", "--markdown"])
        .arg(&markdown_path)
        .assert()
        .success();

    let markdown = fs::read_to_string(&markdown_path).unwrap();
    assert!(markdown.contains("# PageRank Summary"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("linkrank.toml");
    fs::write(&config_path, "[ranking]\nsamples = 0\n").unwrap();

    linkrank()
        .arg(demo("corpus0"))
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("samples"));
}
