//! Ordered occurrence tally
//!
//! Where the dedupers answer "which values, in first-seen order", the counter
//! answers "how often": it keeps a count per distinct value in an ordered tree,
//! so every report comes out in ascending value order.

use std::collections::BTreeMap;
use std::fmt;

/// Occurrence counts per distinct value
///
/// # Examples
///
/// ```rust
/// use filter_uniq::dedup::OccurrenceCounter;
///
/// let counter: OccurrenceCounter = [1, 2, 3, 2, 4, 5, 1, 6].into_iter().collect();
/// assert_eq!(counter.unique(), vec![3, 4, 5, 6]);
/// assert_eq!(counter.repeated(), vec![(1, 2), (2, 2)]);
/// assert_eq!(counter.total(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceCounter {
    counts: BTreeMap<i64, usize>,
    total: usize,
}

impl OccurrenceCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every value of `values`
    pub fn from_values(values: &[i64]) -> Self {
        values.iter().copied().collect()
    }

    /// Count one more occurrence of `value`, returning its new count
    pub fn record(&mut self, value: i64) -> usize {
        self.total += 1;
        let count = self.counts.entry(value).or_insert(0);
        *count += 1;
        *count
    }

    /// Occurrences of `value`
    pub fn count(&self, value: i64) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Values recorded, duplicates included
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Distinct values in ascending order
    pub fn distinct(&self) -> Vec<i64> {
        self.counts.keys().copied().collect()
    }

    /// Values seen exactly once, ascending
    pub fn unique(&self) -> Vec<i64> {
        self.counts
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(&value, _)| value)
            .collect()
    }

    /// Values seen more than once with their counts, ascending
    pub fn repeated(&self) -> Vec<(i64, usize)> {
        self.counts
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(&value, &count)| (value, count))
            .collect()
    }

    /// Iterate `(value, count)` pairs in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }
}

/// Two-line report: values seen once, then repeated values with their counts
///
/// ```rust
/// use filter_uniq::dedup::OccurrenceCounter;
///
/// let counter = OccurrenceCounter::from_values(&[4, 1, 4, 9]);
/// assert_eq!(counter.to_string(), "Unique: [1, 9]\nRepeated: 4 (x2)");
/// ```
impl fmt::Display for OccurrenceCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Unique: {:?}", self.unique())?;
        write!(f, "Repeated:")?;
        let mut first = true;
        for (value, count) in self.repeated() {
            let sep = if first { " " } else { ", " };
            write!(f, "{}{} (x{})", sep, value, count)?;
            first = false;
        }
        if first {
            write!(f, " none")?;
        }
        Ok(())
    }
}

impl Extend<i64> for OccurrenceCounter {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.record(value);
        }
    }
}

impl FromIterator<i64> for OccurrenceCounter {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let counter = OccurrenceCounter::new();
        assert_eq!(counter.total(), 0);
        assert!(counter.unique().is_empty());
        assert!(counter.repeated().is_empty());
        assert_eq!(counter.count(3), 0);
    }

    #[test]
    fn test_record_returns_running_count() {
        let mut counter = OccurrenceCounter::new();
        assert_eq!(counter.record(-4), 1);
        assert_eq!(counter.record(-4), 2);
        assert_eq!(counter.record(9), 1);
        assert_eq!(counter.count(-4), 2);
        assert_eq!(counter.distinct_len(), 2);
    }

    #[test]
    fn test_sample_report() {
        let counter = OccurrenceCounter::from_values(&[16, 17, 2, 17, 4, 2, 97, 4, 17]);
        assert_eq!(counter.distinct(), vec![2, 4, 16, 17, 97]);
        assert_eq!(counter.unique(), vec![16, 97]);
        assert_eq!(counter.repeated(), vec![(2, 2), (4, 2), (17, 3)]);
        assert_eq!(counter.total(), 9);
    }

    #[test]
    fn test_report_display() {
        let counter = OccurrenceCounter::from_values(&[16, 17, 2, 17, 4, 2, 97, 4, 17]);
        assert_eq!(
            counter.to_string(),
            "Unique: [16, 97]\nRepeated: 2 (x2), 4 (x2), 17 (x3)"
        );

        let all_unique = OccurrenceCounter::from_values(&[3, -1]);
        assert_eq!(all_unique.to_string(), "Unique: [-1, 3]\nRepeated: none");
    }

    #[test]
    fn test_iter_is_ordered() {
        let counter: OccurrenceCounter = [5, -1, 5, 0].into_iter().collect();
        let pairs: Vec<(i64, usize)> = counter.iter().collect();
        assert_eq!(pairs, vec![(-1, 1), (0, 1), (5, 2)]);
    }
}
