//! Quadratic deduplication by scanning the output built so far.
//!
//! The tracked variant also records the smallest and largest value it sees.
//! The range is reported in [`DedupStats::value_range`] and plays no part in
//! the comparisons, so both variants do the same O(n²) work.

use super::{DedupStats, Deduper};
use std::time::Instant;

/// Naive O(n²) deduper
#[derive(Debug, Clone, Default)]
pub struct QuadraticDeduper {
    track_range: bool,
    stats: DedupStats,
}

impl QuadraticDeduper {
    /// Plain quadratic scan
    pub fn new() -> Self {
        Self::default()
    }

    /// Quadratic scan that also reports the min/max of the input
    pub fn tracked() -> Self {
        Self {
            track_range: true,
            stats: DedupStats::default(),
        }
    }

    /// Whether min/max tracking is enabled
    pub fn tracks_range(&self) -> bool {
        self.track_range
    }
}

impl Deduper for QuadraticDeduper {
    fn name(&self) -> &'static str {
        if self.track_range {
            "naive_tracked"
        } else {
            "naive"
        }
    }

    fn dedupe(&mut self, input: &[i64]) -> Vec<i64> {
        let start = Instant::now();
        let mut output: Vec<i64> = Vec::new();
        let mut comparisons = 0u64;
        let mut range: Option<(i64, i64)> = None;

        for &value in input {
            if self.track_range {
                range = Some(match range {
                    None => (value, value),
                    Some((min, max)) => (min.min(value), max.max(value)),
                });
            }

            let seen = output.iter().any(|&kept| {
                comparisons += 1;
                kept == value
            });
            if !seen {
                output.push(value);
            }
        }

        self.stats = DedupStats {
            elements_examined: input.len(),
            output_elements: output.len(),
            comparisons,
            value_range: range,
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
