//! Configuration module for Linkrank
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; a missing file section falls back to the defaults
//! (damping 0.85, 10000 samples, tolerance 0.0001).
//!
//! # Example
//!
//! ```no_run
//! use linkrank::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkrank.toml")).unwrap();
//! println!("Random walk length: {}", config.ranking.samples);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CorpusConfig, OutputConfig, RankingConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
