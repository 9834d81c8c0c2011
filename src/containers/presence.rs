//! Presence stores: "has index X been seen" over a bounded domain
//!
//! A store is monotone. Indices start unset and, once marked, stay marked
//! for the lifetime of the store. There is no clear operation.

use crate::succinct::BitSet;

/// Membership over the index domain `[0, domain)`
pub trait PresenceStore {
    /// Create a store where every index in `[0, domain)` is unset
    fn with_domain(domain: usize) -> Self
    where
        Self: Sized;

    /// Number of addressable indices
    fn domain(&self) -> usize;

    /// Whether `index` has been marked
    ///
    /// Panics if `index >= self.domain()`.
    fn contains(&self, index: usize) -> bool;

    /// Mark `index`, returning `true` if it was not already marked
    ///
    /// Panics if `index >= self.domain()`.
    fn mark(&mut self, index: usize) -> bool;

    /// Bytes held by the backing storage
    fn memory_usage(&self) -> usize;

    /// Backing bytes a store of the given domain would allocate
    fn bytes_for_domain(domain: usize) -> usize
    where
        Self: Sized;
}

/// One byte per index, mirroring a plain flag array
#[derive(Clone, PartialEq, Eq)]
pub struct ByteStore {
    flags: Box<[u8]>,
}

impl PresenceStore for ByteStore {
    fn with_domain(domain: usize) -> Self {
        Self {
            flags: vec![0u8; domain].into_boxed_slice(),
        }
    }

    #[inline]
    fn domain(&self) -> usize {
        self.flags.len()
    }

    #[inline]
    fn contains(&self, index: usize) -> bool {
        self.flags[index] != 0
    }

    #[inline]
    fn mark(&mut self, index: usize) -> bool {
        let flag = &mut self.flags[index];
        let fresh = *flag == 0;
        *flag = 1;
        fresh
    }

    fn memory_usage(&self) -> usize {
        self.flags.len()
    }

    fn bytes_for_domain(domain: usize) -> usize {
        domain
    }
}

impl std::fmt::Debug for ByteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marked = self.flags.iter().filter(|&&flag| flag != 0).count();
        write!(f, "ByteStore {{ domain: {}, marked: {} }}", self.flags.len(), marked)
    }
}

impl PresenceStore for BitSet {
    fn with_domain(domain: usize) -> Self {
        BitSet::new(domain)
    }

    #[inline]
    fn domain(&self) -> usize {
        self.len()
    }

    #[inline]
    fn contains(&self, index: usize) -> bool {
        BitSet::contains(self, index)
    }

    #[inline]
    fn mark(&mut self, index: usize) -> bool {
        self.insert(index)
    }

    fn memory_usage(&self) -> usize {
        self.byte_len()
    }

    fn bytes_for_domain(domain: usize) -> usize {
        crate::succinct::bytes_for_bits(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_monotone<S: PresenceStore>() {
        let mut store = S::with_domain(100);
        assert_eq!(store.domain(), 100);
        assert!(!store.contains(0));
        assert!(!store.contains(99));

        assert!(store.mark(42));
        assert!(store.contains(42));
        assert!(!store.mark(42));
        assert!(store.contains(42));

        assert!(store.mark(99));
        assert!(!store.contains(41));
        assert!(!store.contains(43));
    }

    #[test]
    fn test_byte_store_monotone() {
        exercise_monotone::<ByteStore>();
    }

    #[test]
    fn test_bit_set_monotone() {
        exercise_monotone::<BitSet>();
    }

    #[test]
    fn test_memory_footprint() {
        let bytes = ByteStore::with_domain(65536);
        let bits = <BitSet as PresenceStore>::with_domain(65536);
        assert_eq!(bytes.memory_usage(), 65536);
        assert_eq!(bits.memory_usage(), 8192);
        assert_eq!(bytes.memory_usage(), 8 * bits.memory_usage());

        assert_eq!(ByteStore::bytes_for_domain(65536), 65536);
        assert_eq!(<BitSet as PresenceStore>::bytes_for_domain(65536), 8192);
        assert_eq!(<BitSet as PresenceStore>::bytes_for_domain(9), 2);
    }

    #[test]
    #[should_panic]
    fn test_byte_store_out_of_domain_panics() {
        let store = ByteStore::with_domain(4);
        store.contains(4);
    }

    #[test]
    fn test_byte_store_debug() {
        let mut store = ByteStore::with_domain(8);
        store.mark(3);
        let debug_str = format!("{:?}", store);
        assert!(debug_str.contains("domain: 8"));
        assert!(debug_str.contains("marked: 1"));
    }
}
