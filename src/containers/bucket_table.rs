//! Lazily populated table of sign-partitioned buckets
//!
//! The table holds a fixed number of outer slots. A slot stays unallocated
//! until the first value hashing to it arrives; from then on the bucket lives
//! as long as the table. An empty slot is a single pointer. Allocation is the
//! dominant memory cost: each bucket owns two presence stores of `domain`
//! indices.

use super::partitioned_bucket::{magnitude_index, PartitionedBucket};
use super::presence::PresenceStore;
use std::mem;

/// Fixed array of optional buckets, keyed by `|value| mod outer_buckets`
///
/// # Examples
///
/// ```rust
/// use filter_uniq::containers::{BucketTable, ByteStore};
///
/// let mut table = BucketTable::<ByteStore>::new(32, 65536);
/// assert_eq!(table.allocated_buckets(), 0);
///
/// assert!(table.insert(16));
/// assert!(table.insert(48));
/// assert!(!table.insert(16));
///
/// assert!(table.is_allocated(16));
/// assert_eq!(table.allocated_buckets(), 1);
/// ```
#[derive(Debug)]
pub struct BucketTable<S> {
    slots: Vec<Option<Box<PartitionedBucket<S>>>>,
    domain: usize,
    allocated: usize,
}

impl<S: PresenceStore> BucketTable<S> {
    /// Create a table with `outer_buckets` empty slots whose buckets will
    /// address `domain` indices per sign
    ///
    /// Both sizes must be non-zero; configuration validation guarantees this
    /// for every caller in the crate.
    pub fn new(outer_buckets: usize, domain: usize) -> Self {
        debug_assert!(outer_buckets > 0 && domain > 0);
        let mut slots = Vec::with_capacity(outer_buckets);
        slots.resize_with(outer_buckets, || None);
        Self {
            slots,
            domain,
            allocated: 0,
        }
    }

    /// Number of outer slots
    #[inline]
    pub fn outer_buckets(&self) -> usize {
        self.slots.len()
    }

    /// Indices addressable inside each bucket store
    #[inline]
    pub fn domain(&self) -> usize {
        self.domain
    }

    /// Outer slot a value hashes to
    #[inline]
    pub fn bucket_index(&self, value: i64) -> usize {
        magnitude_index(value, self.slots.len())
    }

    /// Record `value`, returning `true` on its first appearance
    ///
    /// Allocates the bucket for the value's slot if this is the first value to
    /// reach it.
    pub fn insert(&mut self, value: i64) -> bool {
        let outer = self.bucket_index(value);
        let domain = self.domain;
        let allocated = &mut self.allocated;
        let bucket = self.slots[outer].get_or_insert_with(|| {
            log::trace!("allocating bucket {} (domain {})", outer, domain);
            *allocated += 1;
            Box::new(PartitionedBucket::new(domain))
        });
        bucket.insert(value)
    }

    /// Whether `value`, or an alias of it, has been recorded
    pub fn contains(&self, value: i64) -> bool {
        self.slots[self.bucket_index(value)]
            .as_ref()
            .is_some_and(|bucket| bucket.contains(value))
    }

    /// Whether the slot at `outer` holds a bucket
    pub fn is_allocated(&self, outer: usize) -> bool {
        self.slots.get(outer).is_some_and(Option::is_some)
    }

    /// Number of slots that hold a bucket
    #[inline]
    pub fn allocated_buckets(&self) -> usize {
        self.allocated
    }

    /// Bytes held by the slot array and the allocated buckets
    pub fn memory_usage(&self) -> usize {
        Self::slot_bytes(self.slots.len()) + self.bucket_memory()
    }

    /// Bytes held by allocated buckets alone
    pub fn bucket_memory(&self) -> usize {
        self.allocated * Self::bucket_bytes(self.domain)
    }

    /// Bytes a slot array of `outer_buckets` empty slots costs
    pub fn slot_bytes(outer_buckets: usize) -> usize {
        outer_buckets * mem::size_of::<Option<Box<PartitionedBucket<S>>>>()
    }

    /// Bytes a single bucket of `domain` costs
    pub fn bucket_bytes(domain: usize) -> usize {
        2 * S::bytes_for_domain(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::ByteStore;
    use crate::succinct::BitSet;

    #[test]
    fn test_lazy_allocation() {
        let mut table = BucketTable::<ByteStore>::new(32, 65536);
        for outer in 0..32 {
            assert!(!table.is_allocated(outer));
        }

        for value in [16, 17, 2, 17, 4, 2, 97, 4, 17] {
            table.insert(value);
        }

        let allocated: Vec<usize> = (0..32).filter(|&i| table.is_allocated(i)).collect();
        assert_eq!(allocated, vec![1, 2, 4, 16, 17]);
        assert_eq!(table.allocated_buckets(), 5);
        assert_eq!(table.bucket_memory(), 5 * 2 * 65536);
        assert_eq!(
            table.memory_usage(),
            BucketTable::<ByteStore>::slot_bytes(32) + 5 * 2 * 65536
        );
    }

    #[test]
    fn test_negative_values_share_outer_slot() {
        let mut table = BucketTable::<BitSet>::new(8, 64);
        assert!(table.insert(-3));
        assert!(table.insert(3));
        assert_eq!(table.allocated_buckets(), 1);
        assert!(table.is_allocated(3));
        assert!(table.contains(-3));
        assert!(table.contains(3));
        assert!(!table.contains(-4));
    }

    #[test]
    fn test_contains_does_not_allocate() {
        let table = BucketTable::<ByteStore>::new(4, 16);
        assert!(!table.contains(7));
        assert_eq!(table.allocated_buckets(), 0);
        assert!(!table.is_allocated(3));
        assert!(!table.is_allocated(100));
    }

    #[test]
    fn test_bucket_bytes() {
        assert_eq!(BucketTable::<ByteStore>::bucket_bytes(65536), 131072);
        assert_eq!(BucketTable::<BitSet>::bucket_bytes(65536), 16384);
    }

    #[test]
    fn test_empty_slot_is_one_pointer() {
        assert_eq!(
            BucketTable::<BitSet>::slot_bytes(1),
            mem::size_of::<usize>()
        );
        assert_eq!(
            BucketTable::<ByteStore>::slot_bytes(65536),
            65536 * mem::size_of::<usize>()
        );

        let table = BucketTable::<BitSet>::new(65536, 65536);
        assert_eq!(table.allocated_buckets(), 0);
        assert_eq!(table.memory_usage(), BucketTable::<BitSet>::slot_bytes(65536));
    }

    #[test]
    fn test_domain_aliasing() {
        let mut table = BucketTable::<BitSet>::new(65536, 65536);
        assert!(table.insert(1));
        assert!(!table.insert(65537));
        assert!(table.insert(-65537));
    }
}
