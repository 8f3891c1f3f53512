#![cfg(feature = "sequence")]
//! Property-based tests relating the lazy streams to the eager combinators.
//!
//! - **Agreement**: every lazy adaptor yields what its eager counterpart returns
//! - **Lookahead**: `has_next` never changes what `next` yields

use functional_utils::control::Maybe;
use functional_utils::sequence::{self, stream, stream::Stream};
use proptest::prelude::*;

fn keep_positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::some(n) } else { Maybe::none() }
}

proptest! {
    #[test]
    fn prop_lazy_map_agrees(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let lazy: Vec<i64> = stream::map(i64::from, stream::from(values.clone())).collect();
        prop_assert_eq!(lazy, sequence::map(i64::from, values));
    }

    #[test]
    fn prop_lazy_filter_agrees(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let lazy: Vec<i32> = stream::filter(|n: &i32| n % 2 == 0, stream::from(values.clone())).collect();
        prop_assert_eq!(lazy, sequence::filter(|n: &i32| n % 2 == 0, values));
    }

    #[test]
    fn prop_lazy_choose_agrees(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let lazy: Vec<i32> = stream::choose(keep_positive, stream::from(values.clone())).collect();
        prop_assert_eq!(lazy, sequence::choose(keep_positive, values));
    }

    #[test]
    fn prop_lazy_collect_agrees(lengths in prop::collection::vec(0usize..5, 0..16)) {
        let lazy: Vec<usize> = stream::collect(|n: usize| 0..n, stream::from(lengths.clone())).collect();
        prop_assert_eq!(lazy, sequence::collect(|n: usize| 0..n, lengths));
    }

    #[test]
    fn prop_lazy_concat_agrees(
        first in prop::collection::vec(any::<u8>(), 0..16),
        second in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let lazy: Vec<u8> = stream::concat(stream::from(first.clone()), stream::from(second.clone())).collect();
        prop_assert_eq!(lazy, sequence::concat(first, second));
    }

    #[test]
    fn prop_lazy_skip_agrees(values in prop::collection::vec(any::<i32>(), 0..32), count in 0usize..40) {
        let lazy: Vec<i32> = stream::skip(count, stream::from(values.clone())).collect();
        prop_assert_eq!(lazy.as_slice(), sequence::skip(count, &values));
    }

    #[test]
    fn prop_lazy_init_agrees(count in 1usize..64) {
        let lazy: Vec<usize> = stream::init(|i| i * 3, count).unwrap().collect();
        prop_assert_eq!(lazy, sequence::init(|i| i * 3, count).unwrap());
    }
}

proptest! {
    /// Interleaving `has_next` calls between `next` calls changes nothing.
    #[test]
    fn prop_has_next_is_transparent(
        values in prop::collection::vec(any::<i32>(), 0..32),
        peeks in prop::collection::vec(0usize..3, 0..40),
    ) {
        let mut filtered = stream::filter(|n: &i32| n % 3 != 0, stream::from(values.clone()));
        let mut observed = Vec::new();
        let mut peeks = peeks.into_iter();
        loop {
            for _ in 0..peeks.next().unwrap_or(0) {
                filtered.has_next();
            }
            match filtered.next() {
                Some(value) => observed.push(value),
                None => break,
            }
        }
        prop_assert_eq!(observed, sequence::filter(|n: &i32| n % 3 != 0, values));
    }
}
