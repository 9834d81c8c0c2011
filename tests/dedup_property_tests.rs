//! Property-based testing for the deduplication strategies
//!
//! Every strategy must keep first occurrences in input order. The bucketed
//! strategies only agree with the exact ones inside the magnitude domain, and
//! agree with each other everywhere while the outer bucket count divides the
//! domain.

use proptest::prelude::*;
use filter_uniq::{
    dedupe_bitmap_hash, dedupe_bitmap_hash_default, dedupe_linear, dedupe_naive,
    dedupe_naive_tracked, dedupe_sparse_hash, dedupe_sparse_hash_default, Deduper,
    HashTableConfig, OccurrenceCounter, Strategy as DedupStrategy,
};
use std::collections::HashSet;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Values the bucketed tables store exactly
fn in_domain_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-65_535i64..=65_535, 0..2000)
}

/// Small alphabet, so most inputs carry many duplicates
fn duplicate_heavy_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..500)
}

/// Reference result built without any of the crate's code
fn first_occurrences(input: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    input.iter().copied().filter(|v| seen.insert(*v)).collect()
}

// =============================================================================
// EXACT STRATEGIES
// =============================================================================

proptest! {
    #[test]
    fn prop_exact_strategies_match_reference(
        input in prop::collection::vec(any::<i64>(), 0..400)
    ) {
        let expected = first_occurrences(&input);
        prop_assert_eq!(dedupe_linear(&input), expected.clone());
        prop_assert_eq!(dedupe_naive(&input), expected.clone());
        prop_assert_eq!(dedupe_naive_tracked(&input), expected);
    }

    #[test]
    fn prop_output_is_distinct_ordered_subsequence(input in duplicate_heavy_values()) {
        let output = dedupe_linear(&input);

        let distinct: HashSet<i64> = output.iter().copied().collect();
        prop_assert_eq!(distinct.len(), output.len());

        // Each output value sits at its first input position, in order
        let positions: Vec<usize> = output
            .iter()
            .map(|v| input.iter().position(|x| x == v).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let counter = OccurrenceCounter::from_values(&input);
        prop_assert_eq!(counter.distinct_len(), output.len());
    }

    #[test]
    fn prop_dedupe_is_idempotent(input in duplicate_heavy_values()) {
        for strategy in DedupStrategy::ALL {
            let mut deduper = strategy.deduper(&HashTableConfig::default()).unwrap();
            let once = deduper.dedupe(&input);
            let twice = deduper.dedupe(&once);
            prop_assert_eq!(&once, &twice, "{} is not idempotent", strategy);
        }
    }
}

// =============================================================================
// BUCKETED STRATEGIES
// =============================================================================

proptest! {
    #[test]
    fn prop_bucketed_match_linear_in_domain(input in in_domain_values()) {
        let expected = dedupe_linear(&input);
        prop_assert_eq!(dedupe_sparse_hash_default(&input), expected.clone());
        prop_assert_eq!(dedupe_bitmap_hash_default(&input), expected);
    }

    #[test]
    fn prop_sparse_matches_bitmap_everywhere(
        input in prop::collection::vec(any::<i64>(), 0..1000)
    ) {
        prop_assert_eq!(
            dedupe_sparse_hash_default(&input),
            dedupe_bitmap_hash_default(&input)
        );
    }

    #[test]
    fn prop_dividing_bucket_count_keeps_agreement(
        input in prop::collection::vec(-5000i64..5000, 0..500),
        shift in 0u32..8,
    ) {
        let domain = 256;
        let outer = 1usize << shift;
        prop_assert_eq!(
            dedupe_sparse_hash(&input, outer, domain),
            dedupe_bitmap_hash(&input, domain)
        );
    }

    #[test]
    fn prop_bucketed_output_never_grows(
        input in prop::collection::vec(any::<i64>(), 0..500)
    ) {
        let exact = dedupe_linear(&input);
        let sparse = dedupe_sparse_hash_default(&input);
        // Aliasing only ever drops values, and what is kept is a subset
        prop_assert!(sparse.len() <= exact.len());
        let exact_set: HashSet<i64> = exact.into_iter().collect();
        prop_assert!(sparse.iter().all(|v| exact_set.contains(v)));
    }

    #[test]
    fn prop_stats_account_for_every_element(input in duplicate_heavy_values()) {
        let mut deduper = DedupStrategy::SparseHash
            .deduper(&HashTableConfig::default())
            .unwrap();
        let output = deduper.dedupe(&input);
        let stats = deduper.stats();
        prop_assert_eq!(stats.elements_examined, input.len());
        prop_assert_eq!(stats.output_elements, output.len());
        prop_assert_eq!(stats.duplicates_removed(), input.len() - output.len());
    }
}
