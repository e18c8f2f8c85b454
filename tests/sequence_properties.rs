//! Property-based tests for lazy and eager sequences

use proptest::prelude::*;
use std::cell::Cell;
use steams::seq::{self, SeqExt};
use steams::List;

fn lists<T: Arbitrary>() -> impl Strategy<Value = List<T>> {
    prop::collection::vec(any::<T>(), 0..40).prop_map(List::from)
}

proptest! {
    #[test]
    fn prop_filter_keeps_matching_in_order(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let filtered = seq::of(values.clone()).filter(|x| x % 3 == 0).collect();
        let expected: Vec<i32> = values.into_iter().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn prop_map_fusion(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let f = |x: i16| i32::from(x) * 2;
        let g = |x: i32| x - 7;

        let staged = seq::of(values.clone()).map(f).map(g).collect();
        let fused = seq::of(values).map(move |x| g(f(x))).collect();
        prop_assert_eq!(staged, fused);
    }

    #[test]
    fn prop_take_counts_min(
        values in prop::collection::vec(any::<u8>(), 0..50),
        n in 0usize..80
    ) {
        let s = seq::of(values.clone());
        prop_assert_eq!((&s).take(n).count(), n.min(values.len()));
    }

    #[test]
    fn prop_take_chain_skip_rebuilds(
        values in prop::collection::vec(any::<u8>(), 0..50),
        n in 0usize..80
    ) {
        let s = seq::of(values.clone());
        let rebuilt = (&s).take(n).chain((&s).skip(n)).collect();
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn prop_take_never_over_consumes(
        values in prop::collection::vec(any::<u8>(), 0..50),
        n in 0usize..80
    ) {
        let pulled = Cell::new(0usize);
        let s = seq::of(values.clone())
            .peek(|_| pulled.set(pulled.get() + 1))
            .take(n);
        let _ = s.collect();
        prop_assert_eq!(pulled.get(), n.min(values.len()));
    }

    #[test]
    fn prop_distinct_is_idempotent(values in prop::collection::vec(0u8..10, 0..60)) {
        let once = seq::distinct(seq::of(values.clone())).collect();
        let twice = seq::distinct(seq::distinct(seq::of(values))).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_redriving_is_deterministic(values in prop::collection::vec(any::<i32>(), 0..60)) {
        let s = seq::of(values)
            .filter(|x| x % 2 == 0)
            .sort_by(|a, b| b.cmp(a))
            .distinct();
        prop_assert_eq!(s.collect(), s.collect());
    }

    #[test]
    fn prop_lazy_and_eager_agree(
        list in lists::<i32>(),
        n in 0usize..40
    ) {
        let values = list.clone().into_vec();
        let lazy = seq::of(values)
            .filter(|x| x % 2 != 0)
            .map(|x| x.wrapping_mul(3))
            .skip(1)
            .take(n)
            .collect();
        let eager = list
            .filter(|x| x % 2 != 0)
            .map(|x| x.wrapping_mul(3))
            .skip(1)
            .take(n)
            .into_vec();
        prop_assert_eq!(lazy, eager);
    }

    #[test]
    fn prop_lazy_and_eager_lookups_agree(list in lists::<i8>()) {
        let s = seq::of(list.clone().into_vec());
        prop_assert_eq!(s.first().into_option(), list.first().copied().into_option());
        prop_assert_eq!(s.last().into_option(), list.last().copied().into_option());
        prop_assert_eq!(s.max().into_option(), list.max().copied().into_option());
        prop_assert_eq!(s.min().into_option(), list.min().copied().into_option());
        prop_assert_eq!(
            s.rposition(|x| *x > 0).into_option(),
            list.rposition(|x| *x > 0).into_option()
        );
        prop_assert_eq!(s.count(), list.len());
    }

    #[test]
    fn prop_zip_equal_lengths_pairs_everything(
        values in prop::collection::vec(any::<u16>(), 0..40)
    ) {
        let labels: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let pairs = seq::zip(seq::of(values.clone()), seq::of(labels)).unwrap();
        prop_assert_eq!(pairs.count(), values.len());
    }

    #[test]
    fn prop_zip_unequal_lengths_fails(
        left in prop::collection::vec(any::<u8>(), 0..20),
        extra in 1usize..5
    ) {
        let right: Vec<u8> = std::iter::repeat_n(0, left.len() + extra).collect();
        let err = seq::of(left.clone()).zip(seq::of(right)).unwrap_err();
        prop_assert_eq!(err.left, left.len());
        prop_assert_eq!(err.right, left.len() + extra);
    }

    #[test]
    fn prop_group_by_counting_sums_to_total(
        values in prop::collection::vec(any::<u8>(), 0..80)
    ) {
        let counts = seq::of(values.clone()).group_by_counting(|x| x % 4);
        let total: usize = counts.values().sum();
        prop_assert_eq!(total, values.len());
    }
}
