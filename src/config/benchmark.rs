//! Benchmark input sizing for the demo driver.

use super::{parse_env_var, Config, ValidationError};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Parameters used to generate the synthetic benchmark inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Length of each generated sequence
    pub length: usize,
    /// Exclusive bound on the magnitude of random values
    pub max_magnitude: i64,
    /// Number of distinct values in the arithmetic sequence
    pub distinct_count: usize,
    /// Seed for the pseudo-random source
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            length: 10_000,
            max_magnitude: 65_536,
            distinct_count: 100,
            seed: 42,
        }
    }
}

impl Config for BenchmarkConfig {
    const NAME: &'static str = "benchmark";

    fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(ValidationError::new("length", self.length, "must be at least 1").into());
        }
        if self.max_magnitude < 1 {
            return Err(
                ValidationError::new("max_magnitude", self.max_magnitude, "must be at least 1")
                    .into(),
            );
        }
        if self.distinct_count == 0 {
            return Err(ValidationError::new(
                "distinct_count",
                self.distinct_count,
                "must be at least 1",
            )
            .into());
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.length = parse_env_var(&format!("{}BENCH_LENGTH", prefix), config.length);
        config.max_magnitude =
            parse_env_var(&format!("{}BENCH_MAX_MAGNITUDE", prefix), config.max_magnitude);
        config.distinct_count =
            parse_env_var(&format!("{}BENCH_DISTINCT", prefix), config.distinct_count);
        config.seed = parse_env_var(&format!("{}BENCH_SEED", prefix), config.seed);
        config.validate()?;
        Ok(config)
    }
}
