//! Presence containers backing the bucketed deduplication strategies
//!
//! - [`PresenceStore`]: monotone membership over a bounded index domain, with
//!   a byte-per-index [`ByteStore`] and the bit-packed [`BitSet`](crate::BitSet)
//! - [`PartitionedBucket`]: a pair of stores split on the sign of the value
//! - [`BucketTable`]: a fixed array of lazily allocated buckets

pub mod bucket_table;
pub mod partitioned_bucket;
pub mod presence;

pub use bucket_table::BucketTable;
pub use partitioned_bucket::{magnitude_index, PartitionedBucket};
pub use presence::{ByteStore, PresenceStore};
