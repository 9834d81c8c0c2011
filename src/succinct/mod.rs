//! Bit-packed presence structures
//!
//! This module provides the bit-level storage used by the memory-optimized
//! bucket table: one bit per tracked index instead of one byte.

pub mod bit_set;

pub use bit_set::{bytes_for_bits, BitSet};
