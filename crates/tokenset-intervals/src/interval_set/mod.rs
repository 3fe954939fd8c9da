//! # IntervalSet - Sorted, Merged Ranges
//!
//! An [`IntervalSet`] owns a `Vec<Interval>` that satisfies, after every
//! public mutation:
//!
//! 1. intervals are sorted ascending by `start`;
//! 2. no two intervals overlap;
//! 3. no two neighbours touch (`intervals[k].stop == intervals[k + 1].start`
//!    is always merged into one interval);
//! 4. the empty set holds no intervals at all, never degenerate ones.
//!
//! Interval counts are expected to be small (tens, not millions), so a plain
//! vector with O(n) insertion and removal in the middle is sufficient.
//!
//! ## Read-only Sets
//!
//! Sets shared by a grammar engine are often frozen after construction. A set
//! marked read-only with [`IntervalSet::set_read_only`] refuses every mutator
//! with [`IntervalSetError::ReadOnly`] and is left untouched.
//!
//! ## Submodules
//!
//! - `insert` - `add_one`, `add_range`, `add_interval`, `add_set`
//! - `remove` - `remove_one`, `remove_range`
//! - `algebra` - `complement`, `subtract`, `intersection`, `union_all`

mod algebra;
mod insert;
mod remove;

use serde::{Deserialize, Serialize};

use crate::error::IntervalSetError;
use crate::interval::Interval;
use crate::token::TOKEN_INVALID_TYPE;

/// An ordered set of integers stored as disjoint, non-adjacent intervals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct IntervalSet {
    intervals: Vec<Interval>,
    read_only: bool,
}

impl IntervalSet {
    /// Creates an empty, mutable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding the single pair `{start, stop}`.
    pub fn of(start: isize, stop: isize) -> Self {
        let mut set = Self::new();
        set.insert_interval(Interval::new(start, stop));
        set
    }

    /// Creates a set holding the single identifier `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is `isize::MAX`, which has no exclusive stop. Use
    /// [`IntervalSet::add_one`] to get an error instead.
    pub fn of_one(v: isize) -> Self {
        let Some(stop) = v.checked_add(1) else {
            panic!("token type {v} has no representable exclusive stop");
        };
        Self::of(v, stop)
    }

    /// Returns true if any interval contains `item`.
    #[must_use]
    pub fn contains(&self, item: isize) -> bool {
        self.intervals.iter().any(|interval| interval.contains(item))
    }

    /// Sum of [`Interval::length`] over all intervals.
    #[must_use]
    pub fn length(&self) -> usize {
        self.intervals.iter().map(Interval::length).sum()
    }

    /// Start of the first interval, or [`TOKEN_INVALID_TYPE`] when empty.
    #[must_use]
    pub fn first(&self) -> isize {
        self.intervals
            .first()
            .map_or(TOKEN_INVALID_TYPE, |interval| interval.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The intervals in ascending order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Smallest contained identifier.
    pub fn min_element(&self) -> Option<isize> {
        self.intervals.first().map(|interval| interval.start)
    }

    /// Largest contained identifier (one below the last `stop`).
    pub fn max_element(&self) -> Option<isize> {
        self.intervals.last().map(|interval| interval.stop - 1)
    }

    /// Returns the identifier if the set holds exactly one.
    pub fn single_element(&self) -> Option<isize> {
        match self.intervals.as_slice() {
            [only] if only.stop == only.start + 1 => Some(only.start),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Marks the set read-only (or mutable again).
    ///
    /// The flag itself is always writable; it only guards the set's contents.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Removes every interval.
    pub fn clear(&mut self) -> Result<(), IntervalSetError> {
        self.ensure_mutable("clear")?;
        self.intervals.clear();
        Ok(())
    }

    fn ensure_mutable(&self, operation: &str) -> Result<(), IntervalSetError> {
        if self.read_only {
            log::debug!("Refusing {operation} on read-only interval set {}", self);
            return Err(IntervalSetError::ReadOnly);
        }
        Ok(())
    }
}

/// Equality compares contents only; the read-only flag is not part of a set's value.
impl PartialEq for IntervalSet {
    fn eq(&self, other: &Self) -> bool {
        self.intervals == other.intervals
    }
}

impl Eq for IntervalSet {}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut set = Self::new();
        for interval in iter {
            set.insert_interval(interval);
        }
        set
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        intervals.into_iter().collect()
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Self {
        set.intervals
    }
}

/// Test helper asserting the structural invariants listed in the module docs.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
#[cfg(test)]
pub(crate) fn check_invariants(set: &IntervalSet) {
    for interval in set.intervals() {
        assert!(
            !interval.is_empty(),
            "degenerate interval {interval:?} in {:?}",
            set.intervals()
        );
    }
    for pair in set.intervals().windows(2) {
        assert!(
            pair[0].stop < pair[1].start,
            "intervals out of order, overlapping or touching: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}
