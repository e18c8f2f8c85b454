use std::cell::Cell;
use std::ops::ControlFlow;

use super::*;
use crate::Optional;

fn counted<'a>(items: Vec<i32>, pulled: &'a Cell<usize>) -> impl Seq<Item = i32> + 'a {
    of(items).peek(move |_| pulled.set(pulled.get() + 1))
}

#[test]
fn test_nothing_runs_before_terminal() {
    let pulled = Cell::new(0);
    let _pipeline = counted(vec![1, 2, 3], &pulled)
        .filter(|x| x % 2 == 1)
        .map(|x| x * 10);
    assert_eq!(pulled.get(), 0);
}

#[test]
fn test_flat_map_stops_inner_and_outer() {
    let outer_pulled = Cell::new(0);
    let inner_pulled = Cell::new(0);
    let inner_counter = &inner_pulled;

    let pipeline = from_iter(0..3)
        .peek(|_| outer_pulled.set(outer_pulled.get() + 1))
        .flat_map(move |outer| {
            from_iter(0..5)
                .peek(move |_| inner_counter.set(inner_counter.get() + 1))
                .map(move |inner| (outer, inner))
        });

    assert_eq!(pipeline.take(2).collect(), vec![(0, 0), (0, 1)]);
    assert_eq!(inner_pulled.get(), 2);
    assert_eq!(outer_pulled.get(), 1);
}

#[test]
fn test_flat_map_stop_in_second_inner_sequence() {
    let inner_pulled = Cell::new(0);
    let inner_counter = &inner_pulled;
    let pipeline = from_iter(0..3).flat_map(move |outer| {
        from_iter(0..5)
            .peek(move |_| inner_counter.set(inner_counter.get() + 1))
            .map(move |inner| outer * 10 + inner)
    });

    assert_eq!(pipeline.find(|x| *x == 12).get(), 12);
    assert_eq!(inner_pulled.get(), 8);
}

#[test]
fn test_flatten_concatenates_in_order() {
    let rows = of(vec![of(vec![1, 2]), of(vec![]), of(vec![3, 4])]);
    assert_eq!(rows.flatten().collect(), vec![1, 2, 3, 4]);
}

#[test]
fn test_flatten_stop_in_inner_halts_outer() {
    let outer_pulled = Cell::new(0);
    let inner_pulled = Cell::new(0);
    let inner_counter = &inner_pulled;

    let nested = from_iter(0..4)
        .peek(|_| outer_pulled.set(outer_pulled.get() + 1))
        .map(move |row| {
            from_iter(0..3)
                .peek(move |_| inner_counter.set(inner_counter.get() + 1))
                .map(move |col| row * 10 + col)
        })
        .flatten();

    assert_eq!(nested.find(|x| *x == 11).get(), 11);
    assert_eq!(outer_pulled.get(), 2);
    assert_eq!(inner_pulled.get(), 5);
}

#[test]
fn test_flat_map_full_drain() {
    let pipeline = of(vec![1, 2, 3]).flat_map(|x| of(vec![x; 5]));
    assert_eq!(pipeline.count(), 15);
    assert_eq!(pipeline.last().get(), 3);
}

#[test]
fn test_take_does_not_over_consume() {
    let pulled = Cell::new(0);
    let s = counted(vec![1, 2, 3, 4, 5], &pulled).take(2);
    assert_eq!(s.collect(), vec![1, 2]);
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_take_zero_pulls_nothing() {
    let pulled = Cell::new(0);
    let s = counted(vec![1, 2, 3], &pulled).take(0);
    assert_eq!(s.count(), 0);
    assert_eq!(pulled.get(), 0);
}

#[test]
fn test_take_more_than_available() {
    assert_eq!(of(vec![1, 2]).take(10).collect(), vec![1, 2]);
}

#[test]
fn test_take_while_stops_upstream() {
    let pulled = Cell::new(0);
    let s = counted(vec![1, 2, 7, 3, 4], &pulled).take_while(|x| *x < 5);
    assert_eq!(s.collect(), vec![1, 2]);
    // The failing element is pulled to be tested, nothing after it.
    assert_eq!(pulled.get(), 3);
}

#[test]
fn test_take_then_chain_continues() {
    let s = of(vec![1, 2, 3, 4, 5]);
    let rebuilt = (&s).take(2).chain((&s).skip(2));
    assert_eq!(rebuilt.collect(), s.collect());
}

#[test]
fn test_take_while_then_chain_continues() {
    let s = of(vec![1, 2, 9, 4]);
    let rebuilt = (&s).take_while(|x| *x < 5).chain((&s).skip_while(|x| *x < 5));
    assert_eq!(rebuilt.collect(), vec![1, 2, 9, 4]);
}

#[test]
fn test_chain_skips_second_after_stop() {
    let second_pulled = Cell::new(0);
    let s = of(vec![1, 2]).chain(counted(vec![3, 4], &second_pulled));
    assert_eq!(s.first().get(), 1);
    assert_eq!(second_pulled.get(), 0);
    assert_eq!(s.nth(2).get(), 3);
    assert_eq!(second_pulled.get(), 1);
}

#[test]
fn test_skip_and_skip_while() {
    assert_eq!(of(vec![1, 2, 3]).skip(0).collect(), vec![1, 2, 3]);
    assert_eq!(of(vec![1, 2, 3]).skip(5).count(), 0);
    assert_eq!(
        of(vec![1, 2, 5, 1, 2]).skip_while(|x| *x < 3).collect(),
        vec![5, 1, 2]
    );
}

#[test]
fn test_enumerate_restarts_each_drive() {
    let s = of(vec!['a', 'b', 'c']).enumerate();
    assert_eq!(s.collect(), vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    assert_eq!(s.nth(1).get(), (1, 'b'));
}

#[test]
fn test_redrive_yields_identical_results() {
    let s = of(vec![3, 1, 2, 1, 3])
        .distinct()
        .sort_by(|a, b| b.cmp(a))
        .take(2);
    assert_eq!(s.collect(), vec![3, 2]);
    assert_eq!(s.collect(), vec![3, 2]);
}

#[test]
fn test_any_all_short_circuit() {
    let pulled = Cell::new(0);
    let s = counted(vec![1, 2, 3, 4], &pulled);

    assert!(s.any(|x| *x == 2));
    assert_eq!(pulled.get(), 2);

    pulled.set(0);
    assert!(!s.all(|x| *x < 2));
    assert_eq!(pulled.get(), 2);

    pulled.set(0);
    assert!(!s.none(|x| *x == 1));
    assert_eq!(pulled.get(), 1);
}

#[test]
fn test_all_any_none_on_empty() {
    let e = empty::<i32>();
    assert!(e.all(|_| false));
    assert!(!e.any(|_| true));
    assert!(e.none(|_| true));
}

#[test]
fn test_terminals_on_empty_are_absent() {
    let e = empty::<i32>();
    assert_eq!(e.first(), Optional::Empty);
    assert_eq!(e.last(), Optional::Empty);
    assert_eq!(e.find(|_| true), Optional::Empty);
    assert_eq!(e.nth(0), Optional::Empty);
    assert_eq!(e.position(|_| true), Optional::Empty);
    assert_eq!(e.rposition(|_| true), Optional::Empty);
    assert_eq!(e.compare(|a, b| a < b), Optional::Empty);
    assert_eq!(e.reduce(|a, b| a + b), Optional::Empty);
    assert_eq!(e.count(), 0);
    assert_eq!(e.sum(), 0);
}

#[test]
fn test_first_pulls_one() {
    let pulled = Cell::new(0);
    let s = counted(vec![5, 6, 7], &pulled);
    assert_eq!(s.first().get(), 5);
    assert_eq!(pulled.get(), 1);
}

#[test]
fn test_position_and_rposition() {
    let s = of(vec![1, 2, 3, 2, 1]);
    assert_eq!(s.position(|x| *x == 2).get(), 1);
    assert_eq!(s.rposition(|x| *x == 2).get(), 3);
    assert!(s.position(|x| *x == 9).is_empty());
}

#[test]
fn test_fold_and_rfold() {
    let s = of(vec![1, 2, 3]);
    assert_eq!(s.fold(0, |acc, x| acc + x), 6);
    assert_eq!(
        s.fold(String::new(), |acc, x| format!("{}{}", acc, x)),
        "123"
    );
    assert_eq!(
        s.rfold(String::new(), |x, acc| format!("{}{}", acc, x)),
        "321"
    );
}

#[test]
fn test_compare_keeps_earliest_on_ties() {
    let s = of(vec![("a", 2), ("b", 1), ("c", 1)]);
    assert_eq!(s.compare(|x, y| x.1 < y.1).get(), ("b", 1));
    assert_eq!(of(vec![3, 9, 1, 9]).max().get(), 9);
    assert_eq!(of(vec![3, 9, 1, 9]).min().get(), 1);
}

#[test]
fn test_reverse_and_sorted() {
    assert_eq!(of(vec![1, 2, 3]).reverse().collect(), vec![3, 2, 1]);
    assert_eq!(
        of(vec![3, 1, 2]).sorted(|a, b| a < b).collect(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_sort_is_stable() {
    let s = of(vec![("b", 1), ("a", 2), ("c", 1), ("d", 2)]).sort_by(|x, y| x.1.cmp(&y.1));
    assert_eq!(s.collect(), vec![("b", 1), ("c", 1), ("a", 2), ("d", 2)]);
}

#[test]
fn test_reverse_stops_replay_on_break() {
    let s = of(vec![1, 2, 3, 4]).reverse();
    assert_eq!(s.take(2).collect(), vec![4, 3]);
}

#[test]
fn test_from_fn_honors_stop() {
    let produced = Cell::new(0);
    let s = from_fn(|step| {
        for n in 0..100 {
            produced.set(produced.get() + 1);
            step(n)?;
        }
        ControlFlow::Continue(())
    });
    assert_eq!(s.take(3).collect(), vec![0, 1, 2]);
    assert_eq!(produced.get(), 3);
}

#[test]
fn test_filter_map() {
    let s = of(vec!["1", "two", "3"]).filter_map(|x| x.parse::<i32>().ok());
    assert_eq!(s.collect(), vec![1, 3]);
}

#[test]
fn test_distinct_streams() {
    let pulled = Cell::new(0);
    let s = counted(vec![1, 1, 2, 3, 3], &pulled).distinct();
    assert_eq!(s.take(2).collect(), vec![1, 2]);
    assert_eq!(pulled.get(), 3);
}

#[test]
fn test_partition() {
    let (small, large) = from_iter(1..=6).partition(|x| *x <= 3);
    assert_eq!(small.into_vec(), vec![1, 2, 3]);
    assert_eq!(large.into_vec(), vec![4, 5, 6]);
}

#[test]
fn test_group_by_keeps_encounter_order() {
    let names = of(vec!["Alice", "Bob", "Brian", "Charlie"]);
    let groups = names.group_by(|n| n.chars().next().unwrap_or_default());
    assert_eq!(groups.count(), 3);
    assert_eq!(groups[&'B'].clone().into_vec(), vec!["Bob", "Brian"]);

    let counts = group_by_counting(&names, |n| n.chars().next().unwrap_or_default());
    assert_eq!(counts[&'B'], 2);
    assert_eq!(counts[&'A'], 1);
}

#[test]
fn test_zip_equal_lengths() {
    let pairs = zip(of(vec![1, 2, 3]), of(vec!["a", "b", "c"])).unwrap();
    assert_eq!(pairs.collect(), vec![(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn test_zip_length_mismatch() {
    let err = of(vec![1, 2, 3, 4]).zip(of(vec!["a", "b", "c"])).unwrap_err();
    assert_eq!(err, crate::LengthMismatchError::new(4, 3));
}

#[test]
fn test_zip_empty() {
    let pairs = zip(empty::<i32>(), empty::<char>()).unwrap();
    assert_eq!(pairs.count(), 0);
}

#[test]
fn test_boxed_is_shared_description() {
    let boxed = from_iter(1..=3).map(|x| x * 2).boxed();
    let copy = boxed.clone();
    assert_eq!(boxed.collect(), vec![2, 4, 6]);
    assert_eq!(copy.collect(), vec![2, 4, 6]);
}

#[test]
fn test_for_each_indexed() {
    let mut seen = Vec::new();
    of(vec!["x", "y"]).for_each_indexed(|i, s| seen.push((i, s)));
    assert_eq!(seen, vec![(0, "x"), (1, "y")]);
}

#[test]
fn test_to_map_last_value_wins() {
    let m = of(vec![("a", 1), ("b", 2), ("a", 3)]).to_map(|p| p.0, |p| p.1);
    assert_eq!(m.count(), 2);
    assert_eq!(m[&"a"], 3);
}
