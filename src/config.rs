//! Configuration management for the text summarization server
//!
//! Holds the sentence-count defaults and bounds applied at the tool boundary,
//! with optional overrides from environment variables.

use validator::Validate;

use crate::error::{ConfigError, Result, TextSumError};
use crate::summarizer::DEFAULT_MAX_SENTENCES;

/// Environment variable names
pub mod env {
    pub const DEFAULT_MAX_SENTENCES: &str = "TEXTSUM_DEFAULT_MAX_SENTENCES";
    pub const MIN_SENTENCES: &str = "TEXTSUM_MIN_SENTENCES";
    pub const MAX_SENTENCES: &str = "TEXTSUM_MAX_SENTENCES";
    pub const MAX_INPUT_BYTES: &str = "TEXTSUM_MAX_INPUT_BYTES";
}

/// Lower bound for a requested sentence count
pub const MIN_SENTENCES: usize = 1;

/// Upper bound for a requested sentence count
pub const MAX_SENTENCES: usize = 10;

/// Largest accepted input, in bytes
pub const MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Configuration for the text summarization server
#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// Sentence count used when a caller does not ask for one
    #[validate(range(min = 1))]
    pub default_max_sentences: usize,

    /// Smallest sentence count a caller may request
    #[validate(range(min = 1))]
    pub min_max_sentences: usize,

    /// Largest sentence count a caller may request
    #[validate(range(min = 1))]
    pub max_max_sentences: usize,

    /// Texts larger than this are rejected before summarizing
    #[validate(range(min = 1))]
    pub max_input_bytes: usize,
}

impl Config {
    /// Create a configuration from defaults and environment overrides
    pub fn new() -> Result<Self> {
        let config = Self {
            default_max_sentences: env_usize(env::DEFAULT_MAX_SENTENCES, DEFAULT_MAX_SENTENCES)?,
            min_max_sentences: env_usize(env::MIN_SENTENCES, MIN_SENTENCES)?,
            max_max_sentences: env_usize(env::MAX_SENTENCES, MAX_SENTENCES)?,
            max_input_bytes: env_usize(env::MAX_INPUT_BYTES, MAX_INPUT_BYTES)?,
        };

        config.ensure_valid()?;
        Ok(config)
    }

    /// Check field ranges and that the default lies within the bounds
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate().map_err(|e| {
            TextSumError::Config(ConfigError::InvalidConfig {
                message: e.to_string(),
            })
        })?;

        if self.min_max_sentences > self.max_max_sentences {
            return Err(ConfigError::InvalidConfig {
                message: format!(
                    "minimum sentence count {} is greater than maximum {}",
                    self.min_max_sentences, self.max_max_sentences
                ),
            }
            .into());
        }

        if !(self.min_max_sentences..=self.max_max_sentences).contains(&self.default_max_sentences)
        {
            return Err(ConfigError::InvalidConfig {
                message: format!(
                    "default sentence count {} is outside {}..={}",
                    self.default_max_sentences, self.min_max_sentences, self.max_max_sentences
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Resolve a caller-requested sentence count.
    ///
    /// `None` yields the default; anything else is clamped into the
    /// configured bounds.
    pub fn resolve_max_sentences(&self, requested: Option<i64>) -> usize {
        match requested {
            None => self.default_max_sentences,
            Some(n) => {
                let min = i64::try_from(self.min_max_sentences).unwrap_or(i64::MAX);
                let max = i64::try_from(self.max_max_sentences).unwrap_or(i64::MAX);
                // `clamp` panics when min > max, and the fields are public
                let clamped = n.max(min).min(max);
                usize::try_from(clamped).unwrap_or(self.min_max_sentences)
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_max_sentences: DEFAULT_MAX_SENTENCES,
            min_max_sentences: MIN_SENTENCES,
            max_max_sentences: MAX_SENTENCES,
            max_input_bytes: MAX_INPUT_BYTES,
        }
    }
}

fn env_usize(var: &str, default: usize) -> Result<usize> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            TextSumError::Config(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                value: raw,
            })
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_max_sentences, 3);
        assert_eq!(config.min_max_sentences, 1);
        assert_eq!(config.max_max_sentences, 10);
        assert!(config.ensure_valid().is_ok());
    }

    #[test]
    fn test_resolve_defaults_when_absent() {
        let config = Config::default();
        assert_eq!(config.resolve_max_sentences(None), 3);
    }

    #[test]
    fn test_resolve_clamps_into_bounds() {
        let config = Config::default();
        assert_eq!(config.resolve_max_sentences(Some(0)), 1);
        assert_eq!(config.resolve_max_sentences(Some(-4)), 1);
        assert_eq!(config.resolve_max_sentences(Some(5)), 5);
        assert_eq!(config.resolve_max_sentences(Some(10)), 10);
        assert_eq!(config.resolve_max_sentences(Some(11)), 10);
        assert_eq!(config.resolve_max_sentences(Some(i64::MAX)), 10);
    }

    #[test]
    fn test_zero_field_is_rejected() {
        let config = Config {
            max_input_bytes: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.ensure_valid(),
            Err(TextSumError::Config(ConfigError::InvalidConfig { .. }))
        ));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let config = Config {
            min_max_sentences: 8,
            max_max_sentences: 4,
            default_max_sentences: 5,
            ..Config::default()
        };
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn test_default_outside_bounds_is_rejected() {
        let config = Config {
            default_max_sentences: 12,
            ..Config::default()
        };
        let err = config.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("outside"));
    }
}
