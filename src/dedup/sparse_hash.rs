//! Dynamic hash table deduplication.
//!
//! A small number of outer buckets (32 by default) is allocated on demand.
//! Each bucket holds a byte flag per magnitude index for each sign, so a
//! touched bucket costs `2 * domain` bytes: 128 KiB with the default sizing.
//! That allocation dominates the memory profile of this strategy; the slot
//! array itself is one pointer per outer bucket.

use super::{filter_through_table, DedupStats, Deduper};
use crate::config::{Config, HashTableConfig};
use crate::containers::{BucketTable, ByteStore};
use crate::error::Result;
use std::time::Instant;

/// Deduper over a sparse table of byte-flag buckets
///
/// Values of the same sign whose magnitudes agree modulo
/// `lcm(outer_buckets, domain)` are indistinguishable; with the default
/// sizing that is modulo 65536.
#[derive(Debug, Clone, Default)]
pub struct SparseHashDeduper {
    config: HashTableConfig,
    stats: DedupStats,
}

impl SparseHashDeduper {
    /// 32 outer buckets over a 65536 domain
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom sizing; fails if the configuration does not validate
    pub fn with_config(config: HashTableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: DedupStats::default(),
        })
    }

    /// Active sizing
    pub fn config(&self) -> &HashTableConfig {
        &self.config
    }
}

impl Deduper for SparseHashDeduper {
    fn name(&self) -> &'static str {
        "sparse_hash"
    }

    fn dedupe(&mut self, input: &[i64]) -> Vec<i64> {
        let start = Instant::now();
        let mut table =
            BucketTable::<ByteStore>::new(self.config.outer_buckets, self.config.domain);
        let output = filter_through_table(&mut table, input);

        self.stats = DedupStats {
            elements_examined: input.len(),
            output_elements: output.len(),
            buckets_allocated: table.allocated_buckets(),
            bytes_allocated: table.memory_usage(),
            processing_time_us: start.elapsed().as_micros() as u64,
            ..Default::default()
        };
        log::debug!(
            "sparse table: {} -> {} values, {} of {} buckets ({} bytes)",
            input.len(),
            output.len(),
            table.allocated_buckets(),
            table.outer_buckets(),
            table.memory_usage()
        );
        output
    }

    fn stats(&self) -> &DedupStats {
        &self.stats
    }

    fn reset_stats(&mut self) {
        self.stats = DedupStats::default();
    }
}
