use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Linkrank
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Estimator parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Probability of following a link instead of jumping to a random page
    #[serde(rename = "damping-factor")]
    pub damping_factor: f64,

    /// Number of pages visited by the random walk
    pub samples: usize,

    /// Largest per-page change that still counts as converged
    pub tolerance: f64,

    /// Upper bound on iteration passes
    #[serde(rename = "max-iterations")]
    pub max_iterations: usize,

    /// Seed for the random walk; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            samples: 10_000,
            tolerance: 0.0001,
            max_iterations: 1_000,
            seed: None,
        }
    }
}

/// Corpus discovery configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// File extension (without the dot) of the pages to load
    pub extension: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extension: "html".to_string(),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places printed for each rank
    pub precision: usize,

    /// Optional path of a markdown report
    #[serde(rename = "markdown-path")]
    pub markdown_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            markdown_path: None,
        }
    }
}
