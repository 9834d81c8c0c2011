//! # filter-uniq: order-preserving integer deduplication
//!
//! This crate compares strategies for dropping repeated integers from a
//! sequence while keeping the first occurrence of each value in place.
//!
//! ## Strategies
//!
//! - **Naive**: scan the output for every element, O(n²)
//! - **Naive, tracked**: the same scan, also reporting the input's min/max
//! - **Linear**: hash set of seen values, O(n) expected
//! - **Sparse hash**: 32 lazily allocated buckets, each holding two byte-flag
//!   stores (one per sign) over a 65536 magnitude domain
//! - **Bitmap hash**: one lazily allocated bucket per domain index with
//!   bit-packed stores, an 8x saving per bucket
//!
//! The two bucketed strategies only distinguish magnitudes modulo their domain;
//! values outside `[-65535, 65535]` may alias with smaller ones of the same
//! sign.
//!
//! ## Quick Start
//!
//! ```rust
//! use filter_uniq::{dedupe_linear, dedupe_sparse_hash_default, SequenceGenerator};
//!
//! let input = [16, 17, 2, 17, 4, 2, 97, 4, 17];
//! assert_eq!(dedupe_linear(&input), vec![16, 17, 2, 4, 97]);
//! assert_eq!(dedupe_sparse_hash_default(&input), vec![16, 17, 2, 4, 97]);
//!
//! let mut generator = SequenceGenerator::new(42);
//! let random = generator.random(1_000, 65_536)?;
//! assert_eq!(dedupe_linear(&random), dedupe_sparse_hash_default(&random));
//! # Ok::<(), filter_uniq::DedupError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod containers;
pub mod dedup;
pub mod error;
pub mod generator;
pub mod succinct;

pub use config::{BenchmarkConfig, Config, HashTableConfig};
pub use containers::{BucketTable, ByteStore, PartitionedBucket, PresenceStore};
pub use dedup::{
    dedupe_bitmap_hash, dedupe_bitmap_hash_default, dedupe_linear, dedupe_naive,
    dedupe_naive_tracked, dedupe_sparse_hash, dedupe_sparse_hash_default, BitmapHashDeduper,
    DedupStats, Deduper, LinearDeduper, OccurrenceCounter, QuadraticDeduper, SparseHashDeduper,
    Strategy,
};
pub use error::{DedupError, Result};
pub use generator::{generate_arithmetic, generate_random, SequenceGenerator};
pub use succinct::BitSet;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sample sequence used by the demo driver and the tests
pub const SAMPLE_INPUT: [i64; 9] = [16, 17, 2, 17, 4, 2, 97, 4, 17];
