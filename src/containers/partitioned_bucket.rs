//! Sign-partitioned bucket
//!
//! A bucket carries two independent presence stores so that `x` and `-x`,
//! which share the same magnitude index, never collide.

use super::presence::PresenceStore;

/// Two presence stores keyed by `|value| mod domain`, split on sign
///
/// Zero and positive values go to the non-negative store; everything below
/// zero goes to the negative store.
///
/// # Examples
///
/// ```rust
/// use filter_uniq::containers::{ByteStore, PartitionedBucket};
///
/// let mut bucket = PartitionedBucket::<ByteStore>::new(16);
/// assert!(bucket.insert(5));
/// assert!(bucket.insert(-5));
/// assert!(!bucket.insert(5));
///
/// // 21 and 5 share the index 5 in a domain of 16
/// assert!(bucket.contains(21));
/// assert!(!bucket.contains(6));
/// ```
#[derive(Debug, Clone)]
pub struct PartitionedBucket<S> {
    non_negative: S,
    negative: S,
}

impl<S: PresenceStore> PartitionedBucket<S> {
    /// Allocate a bucket whose stores each address `domain` indices
    pub fn new(domain: usize) -> Self {
        Self {
            non_negative: S::with_domain(domain),
            negative: S::with_domain(domain),
        }
    }

    /// Index shared by both stores
    #[inline]
    pub fn domain(&self) -> usize {
        self.non_negative.domain()
    }

    /// Index a value maps to inside its store
    #[inline]
    pub fn inner_index(&self, value: i64) -> usize {
        magnitude_index(value, self.domain())
    }

    /// Whether `value`, or an alias of it, has been seen
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        let index = self.inner_index(value);
        self.store(value).contains(index)
    }

    /// Record `value`, returning `true` if neither it nor an alias was seen before
    #[inline]
    pub fn insert(&mut self, value: i64) -> bool {
        let index = self.inner_index(value);
        self.store_mut(value).mark(index)
    }

    /// Store that holds values of this sign
    #[inline]
    pub fn store(&self, value: i64) -> &S {
        if value >= 0 {
            &self.non_negative
        } else {
            &self.negative
        }
    }

    #[inline]
    fn store_mut(&mut self, value: i64) -> &mut S {
        if value >= 0 {
            &mut self.non_negative
        } else {
            &mut self.negative
        }
    }

    /// Bytes held by both stores
    pub fn memory_usage(&self) -> usize {
        self.non_negative.memory_usage() + self.negative.memory_usage()
    }
}

/// `|value| mod modulus`, well defined for `i64::MIN`
#[inline(always)]
pub fn magnitude_index(value: i64, modulus: usize) -> usize {
    (value.unsigned_abs() % modulus as u64) as usize
}
