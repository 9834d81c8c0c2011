//! Hash set deduplication; the reference the bucketed strategies are
//! checked against.

use super::{DedupStats, Deduper};
use ahash::AHashSet;
use std::time::Instant;

/// O(n) expected deduper backed by a hash set of seen values
#[derive(Debug, Clone, Default)]
pub struct LinearDeduper {
    stats: DedupStats,
}

impl LinearDeduper {
    /// Create a new linear deduper
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deduper for LinearDeduper {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn dedupe(&mut self, input: &[i64]) -> Vec<i64> {
        let start = Instant::now();
        let mut seen = AHashSet::with_capacity(input.len());
        let mut output = Vec::new();

        for &value in input {
            if seen.insert(value) {
                output.push(value);
            }
        }

        self.stats = DedupStats {
            elements_examined: input.len(),
            output_elements: output.len(),
            processing_time_us: start.elapsed().as_micros() as u64,
            ..Default::default()
        };
        output
    }

    fn stats(&self) -> &DedupStats {
        &self.stats
    }

    fn reset_stats(&mut self) {
        self.stats = DedupStats::default();
    }
}
