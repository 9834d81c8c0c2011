//! Fixed-size bit set with byte-granular packing
//!
//! Each index occupies a single bit: index `i` lives in byte `i / 8` at bit
//! offset `i % 8`. The set never grows or shrinks after construction, which is
//! what the bucket tables need from a presence store.

use crate::error::{check_bounds, Result};
use std::fmt;

const BITS_PER_BYTE: usize = 8;

/// A compact, fixed-length bit set backed by `ceil(len / 8)` bytes
///
/// # Examples
///
/// ```rust
/// use filter_uniq::BitSet;
///
/// let mut bits = BitSet::new(100);
/// assert!(bits.insert(42));
/// assert!(!bits.insert(42));
///
/// assert_eq!(bits.get(42), Some(true));
/// assert_eq!(bits.get(43), Some(false));
/// assert_eq!(bits.get(100), None);
/// assert_eq!(bits.byte_len(), 13);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BitSet {
    bytes: Box<[u8]>,
    len: usize,
}

/// Number of bytes needed to hold `bits` bits
#[inline]
pub const fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(BITS_PER_BYTE)
}

impl BitSet {
    /// Create a bit set with `len` addressable bits, all clear
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0u8; bytes_for_bits(len)].into_boxed_slice(),
            len,
        }
    }

    /// Number of addressable bits
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the set has no addressable bits
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the backing storage in bytes
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Get the bit at `index`, or `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.contains(index))
    }

    /// Set the bit at `index`
    pub fn set(&mut self, index: usize) -> Result<()> {
        check_bounds(index, self.len)?;
        self.insert(index);
        Ok(())
    }

    /// Test the bit at `index`
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range for length {}", index, self.len);
        let (byte, mask) = Self::locate(index);
        self.bytes[byte] & mask != 0
    }

    /// Set the bit at `index`, returning `true` if it was previously clear
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range for length {}", index, self.len);
        let (byte, mask) = Self::locate(index);
        let slot = &mut self.bytes[byte];
        let fresh = *slot & mask == 0;
        *slot |= mask;
        fresh
    }

    /// Count the number of set bits
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate over the indices of set bits in ascending order
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &byte)| byte != 0)
            .flat_map(|(byte_index, &byte)| {
                (0..BITS_PER_BYTE)
                    .filter(move |bit| byte & (1u8 << bit) != 0)
                    .map(move |bit| byte_index * BITS_PER_BYTE + bit)
            })
    }

    /// Raw access to the packed bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    fn locate(index: usize) -> (usize, u8) {
        (index / BITS_PER_BYTE, 1u8 << (index % BITS_PER_BYTE))
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet {{ len: {}, ones: {} }}", self.len, self.count_ones())
    }
}
