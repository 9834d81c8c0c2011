//! Bit hash table deduplication.
//!
//! The memory-optimized sibling of the sparse table. It keeps one outer slot
//! per domain index and packs each presence store eight indices per byte.
//! A touched bucket costs `2 * ceil(domain / 8)` bytes and every slot, touched
//! or not, costs one pointer. For equal domains its output matches the sparse
//! table, false positives included.

use super::{filter_through_table, DedupStats, Deduper};
use crate::config::hash_table::DEFAULT_DOMAIN;
use crate::config::{Config, HashTableConfig};
use crate::containers::BucketTable;
use crate::error::Result;
use crate::succinct::BitSet;
use std::time::Instant;

/// Deduper over a table of bit-packed buckets
#[derive(Debug, Clone)]
pub struct BitmapHashDeduper {
    domain: usize,
    stats: DedupStats,
}

impl Default for BitmapHashDeduper {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN,
            stats: DedupStats::default(),
        }
    }
}

impl BitmapHashDeduper {
    /// 65536 slots over a 65536 domain
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom domain; fails outside `1..=2^24`
    pub fn with_domain(domain: usize) -> Result<Self> {
        HashTableConfig {
            outer_buckets: domain,
            domain,
        }
        .validate()?;
        Ok(Self {
            domain,
            stats: DedupStats::default(),
        })
    }

    /// Active domain
    pub fn domain(&self) -> usize {
        self.domain
    }
}

impl Deduper for BitmapHashDeduper {
    fn name(&self) -> &'static str {
        "bitmap_hash"
    }

    fn dedupe(&mut self, input: &[i64]) -> Vec<i64> {
        let start = Instant::now();
        let mut table = BucketTable::<BitSet>::new(self.domain, self.domain);
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
            "bitmap table: {} -> {} values, {} buckets ({} bytes)",
            input.len(),
            output.len(),
            table.allocated_buckets(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::ByteStore;
    use crate::dedup::SparseHashDeduper;

    fn slots(domain: usize) -> usize {
        BucketTable::<BitSet>::slot_bytes(domain)
    }

    #[test]
    fn test_sample() {
        let mut deduper = BitmapHashDeduper::new();
        assert_eq!(deduper.dedupe(&[16, 17, 2, 17, 4, 2, 97, 4, 17]), vec![16, 17, 2, 4, 97]);
        assert_eq!(deduper.stats().buckets_allocated, 5);
        assert_eq!(deduper.stats().bytes_allocated, slots(65536) + 5 * 2 * 8192);
    }

    #[test]
    fn test_eight_fold_saving_per_bucket() {
        let input = [3, -3, 3];
        let mut sparse = SparseHashDeduper::new();
        let mut bitmap = BitmapHashDeduper::new();
        assert_eq!(sparse.dedupe(&input), bitmap.dedupe(&input));
        assert_eq!(sparse.stats().buckets_allocated, 1);
        assert_eq!(bitmap.stats().buckets_allocated, 1);

        let sparse_buckets =
            sparse.stats().bytes_allocated - BucketTable::<ByteStore>::slot_bytes(32);
        let bitmap_buckets = bitmap.stats().bytes_allocated - slots(65536);
        assert_eq!(sparse_buckets, 8 * bitmap_buckets);
    }

    #[test]
    fn test_slot_array_is_counted() {
        let domain = 1 << 20;
        let mut deduper = BitmapHashDeduper::with_domain(domain).unwrap();
        assert_eq!(deduper.dedupe(&[1]), vec![1]);
        assert_eq!(deduper.stats().buckets_allocated, 1);

        // One pointer per slot, plus one bucket of two 128 KiB bit sets
        let expected = domain * std::mem::size_of::<usize>() + 2 * (domain / 8);
        assert_eq!(deduper.stats().bytes_allocated, expected);
    }

    #[test]
    fn test_domain_aliasing_matches_sparse_table() {
        let input = [1, 65537, -65537, -1, 131072, 0, i64::MIN, i64::MAX, 65535];
        let mut sparse = SparseHashDeduper::new();
        let mut bitmap = BitmapHashDeduper::new();
        let expected = vec![1, -65537, 131072, i64::MIN, i64::MAX];
        assert_eq!(bitmap.dedupe(&input), expected);
        assert_eq!(sparse.dedupe(&input), expected);
    }

    #[test]
    fn test_custom_domain() {
        let mut deduper = BitmapHashDeduper::with_domain(10).unwrap();
        assert_eq!(deduper.domain(), 10);
        assert_eq!(deduper.dedupe(&[3, 13, -3, 4]), vec![3, -3, 4]);

        assert!(BitmapHashDeduper::with_domain(0).is_err());
    }
}
