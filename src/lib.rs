//! `junban`: reordering and random selection over sequences.
//!
//! Two algorithms with real content, plus a few helpers around them:
//!
//! - `partition`: predicate-priority reordering. Elements go to the bucket of
//!   the first predicate they satisfy; unmatched elements come last; order is
//!   stable within each bucket.
//! - `reservoir`: uniform choice of one element in a single pass, with a fast
//!   path for sequences of known length.
//! - `seq`: eager for-each, emptiness check, separator join, integer parsing.
//!
//! Randomness is always supplied by the caller (any `rand::Rng`, or a custom
//! [`RandomSource`]).

#![forbid(unsafe_code)]

pub mod error;
pub mod partition;
pub mod reservoir;
pub mod seq;

pub use error::{Error, Result};
pub use partition::{partition, try_partition, Predicate};
pub use reservoir::{sample, try_sample, RandomSource, UniformReservoir};
pub use seq::{
    for_each_eager, is_any, join, join_or_empty, join_with, parse_ints, DEFAULT_SEPARATOR,
};

use std::fmt::Display;

/// Method-call forms of the crate's operations, for any iterator.
///
/// ```
/// use junban::SequenceExt;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
/// let words = ["kiwi", "apple", "fig", "banana"];
///
/// let short_first = words.iter().copied().priority_partition([|w: &&str| w.len() <= 4]);
/// assert_eq!(short_first, ["kiwi", "fig", "apple", "banana"]);
///
/// let pick = words.iter().choose_uniform(&mut rng).unwrap();
/// assert!(words.contains(pick));
/// assert_eq!(words.iter().join_with("/"), "kiwi/apple/fig/banana");
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// See [`partition()`].
    fn priority_partition<P, F>(self, predicates: P) -> Vec<Self::Item>
    where
        P: IntoIterator<Item = F>,
        F: FnMut(&Self::Item) -> bool,
    {
        partition(self, predicates)
    }

    /// See [`sample()`].
    fn choose_uniform<R>(self, rng: &mut R) -> Result<Self::Item>
    where
        R: RandomSource + ?Sized,
    {
        sample(self, rng)
    }

    /// See [`for_each_eager()`].
    fn for_each_eager<F>(self, action: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item),
    {
        for_each_eager(self, action)
    }

    /// See [`join_with()`].
    fn join_with(self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        join_with(self, separator)
    }
}

impl<I: Iterator> SequenceExt for I {}
