//! Fuzzy ranking of named items by edit distance.
//!
//! Tolerance grows with the length of the query: one edit is allowed per five
//! characters, so short names must match exactly while longer names forgive
//! a typo or two.

use super::distance::distance;

/// Divisor applied to the query length to get the maximum accepted distance.
const CHARS_PER_EDIT: usize = 5;

/// An item that survived ranking, with its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub distance: usize,
}

/// Maximum edit distance accepted for `target`: `floor(chars / 5)`.
pub fn threshold(target: &str) -> usize {
    target.chars().count() / CHARS_PER_EDIT
}

/// Keep the items whose name is within [`threshold`] of `target`, closest first.
///
/// Every item within the threshold is returned, sorted by non-decreasing
/// distance. The sort is stable, so items at equal distance keep their input
/// order. No items, or none close enough, yields an empty vector.
pub fn rank<'a, T, F>(target: &str, items: &'a [T], name_of: F) -> Vec<Ranked<'a, T>>
where
    F: Fn(&T) -> &str,
{
    let limit = threshold(target);

    let mut ranked: Vec<Ranked<'a, T>> = items
        .iter()
        .filter_map(|item| {
            let distance = distance(target, name_of(item));
            (distance <= limit).then_some(Ranked { item, distance })
        })
        .collect();

    ranked.sort_by_key(|r| r.distance);
    ranked
}
