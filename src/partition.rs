//! Predicate-priority partitioning.
//!
//! Reorders a sequence into buckets chosen by an ordered list of predicates.
//! An element lands in the bucket of the *first* predicate it satisfies;
//! elements matching none form a final remainder bucket. Within every bucket
//! the original relative order is kept.
//!
//! Placement is tracked by position, so duplicate values are neither lost nor
//! repeated and `T` needs no `Eq` bound. For pure predicates this is the same
//! as checking "already placed" by value.
//!
//! Cost is one predicate call per unplaced element per predicate, plus a
//! stable sort of the bucket keys. Fine for the handful of predicates this is
//! meant for.

use log::trace;

use crate::error::{Error, Result};

/// A boxed predicate, for lists mixing closures of different types.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Reorder `sequence` into buckets selected by `predicates`.
///
/// The result is the elements matching `predicates[0]`, then the not yet
/// placed elements matching `predicates[1]`, and so on, followed by every
/// element no predicate matched. It is always a permutation of the input.
///
/// With no predicates the input order is returned unchanged.
///
/// ```
/// let preds: [fn(&i32) -> bool; 2] = [|x| x % 2 == 0, |x| *x > 4];
/// let out = junban::partition([1, 2, 3, 4, 5, 6], preds);
/// assert_eq!(out, [2, 4, 6, 5, 1, 3]);
/// ```
pub fn partition<I, P, F>(sequence: I, predicates: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: IntoIterator<Item = F>,
    F: FnMut(&I::Item) -> bool,
{
    let items: Vec<I::Item> = sequence.into_iter().collect();

    // rank[i] is the index of the first predicate that claimed items[i].
    let mut rank: Vec<Option<usize>> = vec![None; items.len()];
    let mut unplaced = items.len();

    for (r, mut predicate) in predicates.into_iter().enumerate() {
        if unplaced == 0 {
            break;
        }
        for (slot, item) in rank.iter_mut().zip(&items) {
            if slot.is_none() && predicate(item) {
                *slot = Some(r);
                unplaced -= 1;
            }
        }
    }

    trace!(
        "partition: {} elements, {} placed by predicates, {} in remainder",
        items.len(),
        items.len() - unplaced,
        unplaced
    );

    if unplaced == items.len() {
        return items;
    }

    let mut keyed: Vec<(usize, I::Item)> = rank
        .into_iter()
        .map(|r| r.unwrap_or(usize::MAX))
        .zip(items)
        .collect();
    // `sort_by_key` is stable, which is what keeps each bucket in input order.
    keyed.sort_by_key(|&(r, _)| r);
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Like [`partition`], for callers holding an optional sequence.
///
/// Fails with [`Error::InvalidArgument`] when `sequence` is `None`.
pub fn try_partition<I, P, F>(sequence: Option<I>, predicates: P) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    P: IntoIterator<Item = F>,
    F: FnMut(&I::Item) -> bool,
{
    let sequence = sequence.ok_or(Error::InvalidArgument { name: "sequence" })?;
    Ok(partition(sequence, predicates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn even(x: &i32) -> bool {
        x % 2 == 0
    }

    fn above_four(x: &i32) -> bool {
        *x > 4
    }

    #[test]
    fn evens_then_large_then_rest() {
        let preds: [fn(&i32) -> bool; 2] = [even, above_four];
        assert_eq!(partition(1..=6, preds), vec![2, 4, 6, 5, 1, 3]);
    }

    #[test]
    fn no_predicates_is_identity() {
        let preds: Vec<fn(&i32) -> bool> = Vec::new();
        assert_eq!(partition(vec![3, 1, 2], preds), vec![3, 1, 2]);
    }

    #[test]
    fn empty_sequence() {
        let preds: [fn(&i32) -> bool; 1] = [even];
        assert!(partition(Vec::<i32>::new(), preds).is_empty());
    }

    #[test]
    fn first_matching_predicate_wins() {
        // 6 matches both; it must appear once, in the even bucket.
        let preds: [fn(&i32) -> bool; 2] = [even, above_four];
        let out = partition([6, 5, 7, 2], preds);
        assert_eq!(out, vec![6, 2, 5, 7]);
    }

    #[test]
    fn later_predicate_order_matters() {
        let preds: [fn(&i32) -> bool; 2] = [above_four, even];
        assert_eq!(partition(1..=6, preds), vec![5, 6, 2, 4, 1, 3]);
    }

    #[test]
    fn duplicate_values_are_kept() {
        let preds: [fn(&i32) -> bool; 1] = [even];
        assert_eq!(
            partition([2, 1, 2, 1, 2], preds),
            vec![2, 2, 2, 1, 1]
        );
    }

    #[test]
    fn boxed_predicates_capture_state() {
        let limit = 3;
        let preds: Vec<Predicate<'_, &str>> = vec![
            Box::new(|s: &&str| s.starts_with('b')),
            Box::new(move |s: &&str| s.len() > limit),
        ];
        let out = partition(["apple", "bob", "cat", "banana", "dog"], preds);
        assert_eq!(out, vec!["bob", "banana", "apple", "cat", "dog"]);
    }

    #[test]
    fn placed_elements_are_not_offered_again() {
        let calls = Cell::new(0usize);
        let count_even = |x: &i32| {
            calls.set(calls.get() + 1);
            x % 2 == 0
        };
        let count_any = |_: &i32| {
            calls.set(calls.get() + 1);
            true
        };
        let preds: [&dyn Fn(&i32) -> bool; 2] = [&count_even, &count_any];
        let out = partition(1..=6, preds);
        assert_eq!(out, vec![2, 4, 6, 1, 3, 5]);
        // Six calls for the first pass, three for the odd leftovers.
        assert_eq!(calls.get(), 9);
    }

    #[test]
    fn stops_once_everything_is_placed() {
        let called = Cell::new(false);
        let never = |_: &i32| {
            called.set(true);
            false
        };
        let always = |_: &i32| true;
        let preds: [&dyn Fn(&i32) -> bool; 2] = [&always, &never];
        assert_eq!(partition([1, 2], preds), vec![1, 2]);
        assert!(!called.get());
    }

    #[test]
    fn works_with_non_clone_elements() {
        #[derive(Debug, PartialEq)]
        struct Job(u8);
        let preds: [fn(&Job) -> bool; 1] = [|j| j.0 > 1];
        let out = partition(vec![Job(1), Job(2), Job(3)], preds);
        assert_eq!(out, vec![Job(2), Job(3), Job(1)]);
    }

    #[test]
    fn try_partition_rejects_missing_sequence() {
        let preds: [fn(&i32) -> bool; 1] = [even];
        let err = try_partition(None::<Vec<i32>>, preds).expect_err("missing sequence");
        assert_eq!(err, Error::InvalidArgument { name: "sequence" });

        let ok = try_partition(Some(vec![1, 2]), preds).expect("present sequence");
        assert_eq!(ok, vec![2, 1]);
    }
}
