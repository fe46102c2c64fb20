//! Linkrank: PageRank for small hyperlink corpora
//!
//! This crate loads a directory of HTML pages into a link graph and estimates
//! the PageRank of every page twice: once by sampling a long random walk and
//! once by iterating the PageRank equation until it converges.

pub mod config;
pub mod corpus;
pub mod output;
pub mod rank;
mod run;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ranking operations
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Page not in corpus: {0}")]
    InvalidPage(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while reading a corpus directory
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No .{} pages found in {}", .extension, .path.display())]
    Empty { path: PathBuf, extension: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for ranking operations
pub type Result<T> = std::result::Result<T, RankError>;

/// Result type alias for corpus loading
pub type CorpusResult<T> = std::result::Result<T, CorpusError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use corpus::{crawl, Corpus, PageId};
pub use rank::{
    iterate_pagerank, iterate_with, sample_pagerank, transition_model, Convergence,
    IterationConfig, RankTable, SamplingConfig,
};
pub use run::run_ranking;
