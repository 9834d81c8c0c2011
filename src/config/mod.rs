//! Configuration for the bucketed strategies and the benchmark driver
//!
//! Every configuration type implements [`Config`], which covers validation,
//! initialization from `FILTER_UNIQ_`-prefixed environment variables and JSON
//! persistence.
//!
//! # Core Configuration Types
//!
//! - [`HashTableConfig`]: outer bucket count and inner domain of the hash tables
//! - [`BenchmarkConfig`]: sizes and seed used to generate benchmark inputs
//!
//! ```rust
//! use filter_uniq::config::{Config, HashTableConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HashTableConfig::builder()
//!     .outer_buckets(64)
//!     .domain(1 << 20)
//!     .build()?;
//! assert_eq!(config.outer_buckets, 64);
//!
//! // FILTER_UNIQ_TABLE_OUTER_BUCKETS / FILTER_UNIQ_TABLE_DOMAIN
//! let from_env = HashTableConfig::from_env()?;
//! from_env.validate()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{DedupError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::Path;

pub mod benchmark;
pub mod hash_table;


pub use benchmark::BenchmarkConfig;
pub use hash_table::{HashTableConfig, HashTableConfigBuilder};

/// Prefix used by [`Config::from_env`]
pub const ENV_PREFIX: &str = "FILTER_UNIQ_";

/// Common configuration trait providing validation, environment
/// initialization and file persistence.
pub trait Config: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Short name used in error messages
    const NAME: &'static str;

    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the
    /// `FILTER_UNIQ_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables fall back to the default value; the
    /// result is validated before it is returned.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            DedupError::configuration(format!("Failed to serialize {} config: {}", Self::NAME, e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            DedupError::configuration(format!("Failed to write {} config file: {}", Self::NAME, e))
        })?;
        Ok(())
    }

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DedupError::configuration(format!("Failed to read {} config file: {}", Self::NAME, e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            DedupError::configuration(format!("Failed to parse {} config file: {}", Self::NAME, e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation error details.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// The invalid value
    pub value: String,
    /// Description of why the value is invalid
    pub reason: String,
    /// Suggested valid values or ranges
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: &str, value: impl fmt::Display, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            suggestion: None,
        }
    }

    /// Add a suggestion for valid values.
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid configuration for field '{}': value '{}' is invalid ({})",
            self.field, self.value, self.reason
        )?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". Suggested values: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for DedupError {
    fn from(err: ValidationError) -> Self {
        DedupError::configuration(err.to_string())
    }
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
