//! Order-preserving integer deduplication
//!
//! Every strategy returns the first occurrence of each value, in input order.
//! They differ only in how "seen before" is answered:
//!
//! - [`QuadraticDeduper`]: scan the output so far, O(n²); optionally tracks
//!   the value range as an informational side result
//! - [`LinearDeduper`]: hash set of seen values, O(n) expected
//! - [`SparseHashDeduper`]: few lazily allocated buckets of byte flags
//! - [`BitmapHashDeduper`]: one lazily allocated bucket per domain index,
//!   each store bit-packed
//!
//! The two bucketed strategies only distinguish magnitudes modulo the
//! configured domain (65536 by default): `1` and `65537` are treated as the
//! same value. Inside `[-65535, 65535]` every strategy produces identical
//! output.
//!
//! # Examples
//!
//! ```rust
//! use filter_uniq::dedup::{dedupe_bitmap_hash_default, dedupe_linear, dedupe_naive};
//!
//! let input = [16, 17, 2, 17, 4, 2, 97, 4, 17];
//! assert_eq!(dedupe_naive(&input), vec![16, 17, 2, 4, 97]);
//! assert_eq!(dedupe_linear(&input), dedupe_bitmap_hash_default(&input));
//! ```

use crate::config::HashTableConfig;
use crate::containers::{BucketTable, PresenceStore};
use crate::error::{DedupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod bitmap_hash;
pub mod linear;
pub mod occurrence;
pub mod quadratic;
pub mod sparse_hash;

pub use bitmap_hash::BitmapHashDeduper;
pub use linear::LinearDeduper;
pub use occurrence::OccurrenceCounter;
pub use quadratic::QuadraticDeduper;
pub use sparse_hash::SparseHashDeduper;

/// A deduplication strategy
///
/// Working structures are built fresh inside every [`dedupe`](Deduper::dedupe)
/// call and dropped before it returns; only the statistics of the most recent
/// call are kept.
pub trait Deduper {
    /// Short identifier of the strategy
    fn name(&self) -> &'static str;

    /// Return the first occurrence of each value of `input`, in input order
    fn dedupe(&mut self, input: &[i64]) -> Vec<i64>;

    /// Statistics of the most recent call
    fn stats(&self) -> &DedupStats;

    /// Clear recorded statistics
    fn reset_stats(&mut self);
}

/// Statistics from a deduplication call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupStats {
    /// Input elements examined
    pub elements_examined: usize,
    /// Elements written to the output
    pub output_elements: usize,
    /// Equality comparisons performed (quadratic strategies only)
    pub comparisons: u64,
    /// Outer buckets allocated (bucketed strategies only)
    pub buckets_allocated: usize,
    /// Bytes held by allocated buckets (bucketed strategies only)
    pub bytes_allocated: usize,
    /// Smallest and largest value seen (tracked quadratic strategy only)
    pub value_range: Option<(i64, i64)>,
    /// Processing time in microseconds
    pub processing_time_us: u64,
}

impl DedupStats {
    /// Input elements dropped as duplicates
    pub fn duplicates_removed(&self) -> usize {
        self.elements_examined - self.output_elements
    }

    /// Processing rate in elements per second
    pub fn items_per_second(&self) -> f64 {
        if self.processing_time_us == 0 {
            return 0.0;
        }
        (self.elements_examined as f64) / (self.processing_time_us as f64 / 1_000_000.0)
    }
}

/// Run `input` through a bucket table, keeping values on first insertion
pub(crate) fn filter_through_table<S: PresenceStore>(
    table: &mut BucketTable<S>,
    input: &[i64],
) -> Vec<i64> {
    let mut output = Vec::new();
    for &value in input {
        if table.insert(value) {
            output.push(value);
        }
    }
    output
}

/// The available deduplication strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Quadratic scan of the output
    Naive,
    /// Quadratic scan with min/max tracking
    NaiveTracked,
    /// Hash set baseline
    Linear,
    /// Sparse byte-flag bucket table
    SparseHash,
    /// Bit-packed bucket table
    BitmapHash,
}

impl Strategy {
    /// Every strategy, in presentation order
    pub const ALL: [Strategy; 5] = [
        Strategy::Naive,
        Strategy::NaiveTracked,
        Strategy::Linear,
        Strategy::SparseHash,
        Strategy::BitmapHash,
    ];

    /// Short identifier, matching [`Deduper::name`]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::NaiveTracked => "naive_tracked",
            Strategy::Linear => "linear",
            Strategy::SparseHash => "sparse_hash",
            Strategy::BitmapHash => "bitmap_hash",
        }
    }

    /// Whether the strategy aliases magnitudes outside the configured domain
    pub fn is_domain_bounded(self) -> bool {
        matches!(self, Strategy::SparseHash | Strategy::BitmapHash)
    }

    /// Build a deduper for this strategy
    ///
    /// `config` only affects the bucketed strategies.
    pub fn deduper(self, config: &HashTableConfig) -> Result<Box<dyn Deduper>> {
        Ok(match self {
            Strategy::Naive => Box::new(QuadraticDeduper::new()),
            Strategy::NaiveTracked => Box::new(QuadraticDeduper::tracked()),
            Strategy::Linear => Box::new(LinearDeduper::new()),
            Strategy::SparseHash => Box::new(SparseHashDeduper::with_config(*config)?),
            Strategy::BitmapHash => Box::new(BitmapHashDeduper::with_domain(config.domain)?),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = DedupError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| DedupError::invalid_argument(format!("unknown strategy '{}'", s)))
    }
}

/// Quadratic deduplication
pub fn dedupe_naive(input: &[i64]) -> Vec<i64> {
    QuadraticDeduper::new().dedupe(input)
}

/// Quadratic deduplication with informational min/max tracking
pub fn dedupe_naive_tracked(input: &[i64]) -> Vec<i64> {
    QuadraticDeduper::tracked().dedupe(input)
}

/// Hash set deduplication
pub fn dedupe_linear(input: &[i64]) -> Vec<i64> {
    LinearDeduper::new().dedupe(input)
}

/// Sparse bucket table deduplication
///
/// An unusable sizing (zero buckets, zero or oversized domain) is logged and
/// replaced by the default 32 x 65536 sizing, keeping this function total.
pub fn dedupe_sparse_hash(input: &[i64], outer_buckets: usize, inner_domain: usize) -> Vec<i64> {
    let config = HashTableConfig {
        outer_buckets,
        domain: inner_domain,
    };
    let mut deduper = SparseHashDeduper::with_config(config).unwrap_or_else(|err| {
        log::warn!("{}; using default sparse table sizing", err);
        SparseHashDeduper::new()
    });
    deduper.dedupe(input)
}

/// Sparse bucket table deduplication with 32 buckets over a 65536 domain
pub fn dedupe_sparse_hash_default(input: &[i64]) -> Vec<i64> {
    SparseHashDeduper::new().dedupe(input)
}

/// Bit-packed bucket table deduplication
///
/// An unusable domain is logged and replaced by 65536.
pub fn dedupe_bitmap_hash(input: &[i64], domain: usize) -> Vec<i64> {
    let mut deduper = BitmapHashDeduper::with_domain(domain).unwrap_or_else(|err| {
        log::warn!("{}; using default bitmap table domain", err);
        BitmapHashDeduper::new()
    });
    deduper.dedupe(input)
}

/// Bit-packed bucket table deduplication over a 65536 domain
pub fn dedupe_bitmap_hash_default(input: &[i64]) -> Vec<i64> {
    BitmapHashDeduper::new().dedupe(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i64; 9] = [16, 17, 2, 17, 4, 2, 97, 4, 17];

    #[test]
    fn test_sample_through_every_strategy() {
        let config = HashTableConfig::default();
        for strategy in Strategy::ALL {
            let mut deduper = strategy.deduper(&config).unwrap();
            assert_eq!(deduper.name(), strategy.name());
            assert_eq!(deduper.dedupe(&SAMPLE), vec![16, 17, 2, 4, 97], "{}", strategy);

            let stats = deduper.stats();
            assert_eq!(stats.elements_examined, 9);
            assert_eq!(stats.output_elements, 5);
            assert_eq!(stats.duplicates_removed(), 4);
        }
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("naive".parse::<Strategy>().unwrap(), Strategy::Naive);
        assert_eq!("Sparse-Hash".parse::<Strategy>().unwrap(), Strategy::SparseHash);
        assert_eq!(" bitmap_hash ".parse::<Strategy>().unwrap(), Strategy::BitmapHash);

        let err = "bloom".parse::<Strategy>().unwrap_err();
        assert_eq!(err.category(), "argument");
        assert!(err.to_string().contains("bloom"));
    }

    #[test]
    fn test_strategy_display_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
        assert!(Strategy::SparseHash.is_domain_bounded());
        assert!(!Strategy::Linear.is_domain_bounded());
    }

    #[test]
    fn test_invalid_sizing_falls_back_to_defaults() {
        assert_eq!(dedupe_sparse_hash(&SAMPLE, 0, 65536), vec![16, 17, 2, 4, 97]);
        assert_eq!(dedupe_sparse_hash(&SAMPLE, 32, 0), vec![16, 17, 2, 4, 97]);
        assert_eq!(dedupe_bitmap_hash(&SAMPLE, 0), vec![16, 17, 2, 4, 97]);
    }

    #[test]
    fn test_deduper_rejects_invalid_sizing() {
        let config = HashTableConfig {
            outer_buckets: 0,
            domain: 16,
        };
        assert!(Strategy::SparseHash.deduper(&config).is_err());
        assert!(Strategy::Linear.deduper(&config).is_ok());
    }

    #[test]
    fn test_stats_rates() {
        let stats = DedupStats {
            elements_examined: 1000,
            processing_time_us: 500,
            ..Default::default()
        };
        assert_eq!(stats.items_per_second(), 2_000_000.0);
        assert_eq!(DedupStats::default().items_per_second(), 0.0);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = DedupStats {
            elements_examined: 3,
            output_elements: 2,
            value_range: Some((-1, 5)),
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"elements_examined\":3"));
        let back: DedupStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
