//! Sizing of the sign-partitioned bucket tables.

use super::{parse_env_var, Config, ValidationError};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default outer bucket count of the sparse table
pub const DEFAULT_OUTER_BUCKETS: usize = 32;

/// Default inner domain; magnitudes that agree modulo this value alias
pub const DEFAULT_DOMAIN: usize = 65536;

/// Largest accepted inner domain (2^24)
///
/// The bitmap table keeps one outer slot per domain index, so the domain also
/// bounds the slot array.
pub const MAX_DOMAIN: usize = 1 << 24;

/// Sizing of the bucket tables
///
/// The sparse table uses both fields. The bitmap table uses `domain` for its
/// outer slot count as well as its inner store size. The two tables agree on
/// every input when `domain` is a multiple of `outer_buckets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashTableConfig {
    /// Number of lazily allocated outer buckets in the sparse table
    pub outer_buckets: usize,
    /// Number of magnitude indices per presence store
    pub domain: usize,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            outer_buckets: DEFAULT_OUTER_BUCKETS,
            domain: DEFAULT_DOMAIN,
        }
    }
}

impl HashTableConfig {
    /// Create a configuration builder starting from the defaults.
    pub fn builder() -> HashTableConfigBuilder {
        HashTableConfigBuilder::new()
    }

    /// Whether the sparse and bitmap tables alias the same values under this
    /// configuration.
    pub fn tables_agree(&self) -> bool {
        self.outer_buckets != 0 && self.domain % self.outer_buckets == 0
    }
}

impl Config for HashTableConfig {
    const NAME: &'static str = "hash table";

    fn validate(&self) -> Result<()> {
        if self.outer_buckets == 0 {
            return Err(ValidationError::new(
                "outer_buckets",
                self.outer_buckets,
                "must be at least 1",
            )
            .with_suggestion("32")
            .into());
        }
        if self.domain == 0 || self.domain > MAX_DOMAIN {
            return Err(ValidationError::new(
                "domain",
                self.domain,
                "must be between 1 and 2^24",
            )
            .with_suggestion("65536")
            .into());
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.outer_buckets =
            parse_env_var(&format!("{}TABLE_OUTER_BUCKETS", prefix), config.outer_buckets);
        config.domain = parse_env_var(&format!("{}TABLE_DOMAIN", prefix), config.domain);
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`HashTableConfig`].
#[derive(Debug, Clone, Default)]
pub struct HashTableConfigBuilder {
    config: HashTableConfig,
}

impl HashTableConfigBuilder {
    /// Start from the default sizing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer bucket count.
    pub fn outer_buckets(mut self, outer_buckets: usize) -> Self {
        self.config.outer_buckets = outer_buckets;
        self
    }

    /// Set the inner domain.
    pub fn domain(mut self, domain: usize) -> Self {
        self.config.domain = domain;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<HashTableConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
