//! Uniform selection of one element.
//!
//! Picks a single element of a sequence with probability `1/n` each, reading
//! the sequence at most once.
//!
//! - If the iterator reports an exact length through [`Iterator::size_hint`],
//!   one index is drawn and the element is fetched with [`Iterator::nth`].
//! - Otherwise a reservoir of size one is kept ("Algorithm R" with `k = 1`,
//!   Vitter 1985): the `k`-th element replaces the current choice with
//!   probability `1/k`. By induction every element seen so far is the current
//!   choice with probability `1/k`.
//!
//! Randomness always comes from the caller through [`RandomSource`]. Nothing
//! in this module seeds or constructs an RNG, so results are reproducible with
//! a seeded generator and scriptable in tests.

use log::trace;
use rand::Rng;

use crate::error::{Error, Result};

/// A source of uniformly distributed indices.
///
/// Implemented for every [`rand::Rng`], including `dyn RngCore`. Implement it
/// directly to script draws in tests.
pub trait RandomSource {
    /// Return an integer uniformly distributed in `[0, bound)`.
    ///
    /// Callers in this crate always pass `bound > 0`.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// A reservoir holding one uniformly chosen element of a stream.
#[derive(Debug, Clone)]
pub struct UniformReservoir<T> {
    seen: usize,
    chosen: Option<T>,
}

impl<T> Default for UniformReservoir<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UniformReservoir<T> {
    /// Create an empty reservoir.
    pub fn new() -> Self {
        Self {
            seen: 0,
            chosen: None,
        }
    }

    /// Offer the next item of the stream.
    ///
    /// The first item is always kept without consulting `rng`; the `k`-th
    /// replaces the current choice when `rng.below(k) == 0`.
    #[inline]
    pub fn add_with_rng<R: RandomSource + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;
        if self.seen == 1 || rng.below(self.seen) == 0 {
            self.chosen = Some(item);
        }
    }

    /// The current choice, if any item has been offered.
    pub fn chosen(&self) -> Option<&T> {
        self.chosen.as_ref()
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Consume the reservoir, returning the chosen item.
    pub fn into_chosen(self) -> Result<T> {
        self.chosen.ok_or(Error::EmptySequence)
    }
}

/// Choose one element of `sequence` uniformly at random.
///
/// The sequence is iterated once. Sequences with an exact `size_hint` (slices,
/// `Vec`, ranges, ...) cost a single draw; anything else costs one draw per
/// element after the first.
///
/// A one-element sequence returns its element without drawing. Fails with
/// [`Error::EmptySequence`] when there is nothing to choose from, including
/// the case of an iterator that yields fewer items than its exact
/// `size_hint` promised.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let pick = junban::sample(["a", "b", "c"], &mut rng).unwrap();
/// assert!(["a", "b", "c"].contains(&pick));
///
/// assert_eq!(
///     junban::sample(Vec::<u8>::new(), &mut rng),
///     Err(junban::Error::EmptySequence)
/// );
/// ```
pub fn sample<I, R>(sequence: I, rng: &mut R) -> Result<I::Item>
where
    I: IntoIterator,
    R: RandomSource + ?Sized,
{
    let mut iter = sequence.into_iter();

    match iter.size_hint() {
        (len, Some(upper)) if len == upper => {
            trace!("sample: exact length {len}, drawing one index");
            let found = match len {
                0 => None,
                1 => iter.next(),
                _ => iter.nth(rng.below(len)),
            };
            found.ok_or(Error::EmptySequence)
        }
        _ => {
            let mut reservoir = UniformReservoir::new();
            for item in iter {
                reservoir.add_with_rng(item, rng);
            }
            trace!("sample: single pass over {} elements", reservoir.seen());
            reservoir.into_chosen()
        }
    }
}

/// Like [`sample`], for callers holding optional arguments.
///
/// Fails with [`Error::InvalidArgument`] naming the first absent argument.
pub fn try_sample<I, R>(sequence: Option<I>, rng: Option<&mut R>) -> Result<I::Item>
where
    I: IntoIterator,
    R: RandomSource + ?Sized,
{
    let sequence = sequence.ok_or(Error::InvalidArgument { name: "sequence" })?;
    let rng = rng.ok_or(Error::InvalidArgument { name: "randomness" })?;
    sample(sequence, rng)
}
