use crate::config::types::{Config, CorpusConfig, OutputConfig, RankingConfig};
use crate::ConfigError;

/// Most decimal places a report may ask for
const MAX_PRECISION: usize = 10;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_ranking_config(&config.ranking)?;
    validate_corpus_config(&config.corpus)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates estimator parameters
fn validate_ranking_config(config: &RankingConfig) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if !(config.damping_factor > 0.0 && config.damping_factor < 1.0) {
        return Err(ConfigError::Validation(format!(
            "damping_factor must be strictly between 0 and 1, got {}",
            config.damping_factor
        )));
    }

    if config.samples < 1 {
        return Err(ConfigError::Validation(format!(
            "samples must be >= 1, got {}",
            config.samples
        )));
    }

    if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
        return Err(ConfigError::Validation(format!(
            "tolerance must be a positive number, got {}",
            config.tolerance
        )));
    }

    if config.max_iterations < 1 {
        return Err(ConfigError::Validation(format!(
            "max_iterations must be >= 1, got {}",
            config.max_iterations
        )));
    }

    Ok(())
}

/// Validates corpus discovery settings
fn validate_corpus_config(config: &CorpusConfig) -> Result<(), ConfigError> {
    if config.extension.is_empty() {
        return Err(ConfigError::Validation(
            "extension cannot be empty".to_string(),
        ));
    }

    if config
        .extension
        .chars()
        .any(|c| c == '.' || c == '/' || c == '\\' || c.is_whitespace())
    {
        return Err(ConfigError::Validation(format!(
            "extension must be a bare suffix such as 'html', got '{}'",
            config.extension
        )));
    }

    Ok(())
}

/// Validates report settings
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.precision > MAX_PRECISION {
        return Err(ConfigError::Validation(format!(
            "precision must be <= {}, got {}",
            MAX_PRECISION, config.precision
        )));
    }

    if let Some(path) = &config.markdown_path {
        if path.to_str().is_some_and(|p| p.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "markdown_path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}
