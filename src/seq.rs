//! Small sequence helpers: eager iteration, emptiness checks, joining and
//! integer parsing.

use std::fmt::{Display, Write as _};

use log::trace;

/// Separator used by [`join`].
pub const DEFAULT_SEPARATOR: &str = ",";

/// Apply `action` to every element in order and return the elements.
///
/// The sequence is materialized first, so a lazy source is read exactly once
/// and the returned `Vec` can be iterated again.
pub fn for_each_eager<I, F>(sequence: I, mut action: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item),
{
    let items: Vec<I::Item> = sequence.into_iter().collect();
    for item in &items {
        action(item);
    }
    items
}

/// Whether `sequence` yields at least one element.
///
/// `None` counts as empty. At most one element is pulled.
pub fn is_any<I: IntoIterator>(sequence: Option<I>) -> bool {
    sequence.is_some_and(|s| s.into_iter().next().is_some())
}

/// Concatenate the `Display` form of every element, separated by `separator`.
///
/// ```
/// assert_eq!(junban::join_with([1, 2, 3], " | "), "1 | 2 | 3");
/// assert_eq!(junban::join_with(Vec::<u8>::new(), "-"), "");
/// ```
pub fn join_with<I>(sequence: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in sequence.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{item}");
    }
    out
}

/// [`join_with`] using [`DEFAULT_SEPARATOR`].
pub fn join<I>(sequence: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join_with(sequence, DEFAULT_SEPARATOR)
}

/// [`join_with`], treating `None` as an empty sequence.
pub fn join_or_empty<I>(sequence: Option<I>, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    match sequence {
        Some(s) => join_with(s, separator),
        None => String::new(),
    }
}

/// Keep the entries that parse as an `i32`, in order, skipping the rest.
///
/// Surrounding whitespace and a leading sign are accepted.
///
/// ```
/// assert_eq!(junban::parse_ints([" 12", "x", "-3", "4.5", "+7"]), [12, -3, 7]);
/// ```
pub fn parse_ints<I>(sequence: I) -> Vec<i32>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut skipped = 0usize;
    let out: Vec<i32> = sequence
        .into_iter()
        .filter_map(|s| {
            let parsed = s.as_ref().trim().parse::<i32>().ok();
            if parsed.is_none() {
                skipped += 1;
            }
            parsed
        })
        .collect();
    trace!("parse_ints: kept {}, skipped {}", out.len(), skipped);
    out
}
