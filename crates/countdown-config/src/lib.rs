//! Configuration system for Countdown.
//!
//! Load solver and round-generation settings from TOML or YAML files.
//! Every field has a default matching the standard game, so an empty file
//! (or no file at all) gives the standard behavior.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use countdown_config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     pass_limit = 4
//!
//!     [round]
//!     min_paths = 3
//!     max_paths = 12
//! "#).unwrap();
//!
//! assert_eq!(config.pass_limit(6), 4);
//! assert_eq!(config.round.min_paths, 3);
//! assert_eq!(config.round.small_count, 4);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use countdown_config::SolverConfig;
//!
//! let config = SolverConfig::load("countdown.toml").unwrap_or_default();
//! assert_eq!(config.pass_limit(6), 6);
//! ```

use std::collections::HashSet;
use std::path::Path;

use countdown_core::SOURCE_COUNT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible rounds.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Search termination configuration.
    #[serde(default)]
    pub termination: TerminationConfig,

    /// Round generation configuration.
    #[serde(default)]
    pub round: RoundConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML or YAML file, chosen
    /// by extension (`.yaml`/`.yml` are YAML, anything else is TOML).
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Overrides the maximum number of combination passes.
    pub fn with_pass_limit(mut self, passes: usize) -> Self {
        self.termination.pass_limit = Some(passes);
        self
    }

    /// Replaces the round configuration.
    pub fn with_round(mut self, round: RoundConfig) -> Self {
        self.round = round;
        self
    }

    /// Returns the pass limit for a search over `source_count` numbers.
    ///
    /// Defaults to the source count.
    pub fn pass_limit(&self, source_count: usize) -> usize {
        self.termination.pass_limit.unwrap_or(source_count)
    }

    /// Checks the configuration for inconsistent settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.termination.pass_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "termination.pass_limit must be at least 1".to_string(),
            ));
        }
        self.round.validate()
    }
}

/// Search termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of combination passes. `None` means one pass per
    /// source number.
    #[serde(default)]
    pub pass_limit: Option<usize>,
}

/// Round generation configuration.
///
/// The defaults describe the standard round: four small numbers from 1 to 9
/// and two distinct large numbers from {10, 25, 50, 75, 100}. A target is
/// "reasonable" when it has between 2 and 10 paths with a mean difficulty
/// between 3 and 8.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RoundConfig {
    /// How many small numbers to draw (with repetition).
    pub small_count: usize,

    /// Smallest small number.
    pub small_min: u32,

    /// Largest small number.
    pub small_max: u32,

    /// Pool of large numbers, drawn without repetition.
    pub large_pool: Vec<u32>,

    /// How many large numbers to draw.
    pub large_count: usize,

    /// Fewest paths a reasonable target may have.
    pub min_paths: usize,

    /// Most paths a reasonable target may have.
    pub max_paths: usize,

    /// Lowest mean difficulty of a reasonable target.
    pub min_difficulty: f64,

    /// Highest mean difficulty of a reasonable target.
    pub max_difficulty: f64,

    /// Number sets to try before giving up on a round.
    pub max_attempts: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            small_count: 4,
            small_min: 1,
            small_max: 9,
            large_pool: vec![10, 25, 50, 75, 100],
            large_count: 2,
            min_paths: 2,
            max_paths: 10,
            min_difficulty: 3.0,
            max_difficulty: 8.0,
            max_attempts: 10,
        }
    }
}

impl RoundConfig {
    /// Returns true if a target with these statistics is reasonable.
    pub fn is_reasonable(&self, path_count: usize, average_difficulty: f64) -> bool {
        (self.min_paths..=self.max_paths).contains(&path_count)
            && average_difficulty >= self.min_difficulty
            && average_difficulty <= self.max_difficulty
    }

    /// Checks the round settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.small_count + self.large_count != SOURCE_COUNT {
            return invalid(format!(
                "round.small_count + round.large_count must be {}, got {}",
                SOURCE_COUNT,
                self.small_count + self.large_count
            ));
        }
        if self.small_min == 0 || self.small_min > self.small_max {
            return invalid(format!(
                "round small range {}..={} is empty or not positive",
                self.small_min, self.small_max
            ));
        }
        if self.large_pool.contains(&0) {
            return invalid("round.large_pool must hold positive numbers".to_string());
        }
        let distinct: HashSet<u32> = self.large_pool.iter().copied().collect();
        if distinct.len() != self.large_pool.len() {
            return invalid("round.large_pool must not repeat numbers".to_string());
        }
        if self.large_count > self.large_pool.len() {
            return invalid(format!(
                "round.large_count {} exceeds the pool of {}",
                self.large_count,
                self.large_pool.len()
            ));
        }
        if self.min_paths > self.max_paths {
            return invalid(format!(
                "round.min_paths {} exceeds round.max_paths {}",
                self.min_paths, self.max_paths
            ));
        }
        if self.min_difficulty.is_nan()
            || self.max_difficulty.is_nan()
            || self.min_difficulty > self.max_difficulty
        {
            return invalid(format!(
                "round.min_difficulty {} exceeds round.max_difficulty {}",
                self.min_difficulty, self.max_difficulty
            ));
        }
        if self.max_attempts == 0 {
            return invalid("round.max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
