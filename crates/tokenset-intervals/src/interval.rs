use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A contiguous range of token identifiers.
///
/// `start` is always inclusive. How `stop` is read depends on the operation:
/// [`contains`](Self::contains) treats it as exclusive while
/// [`length`](Self::length) counts it as inclusive. Both readings are part of
/// the observable behavior the grammar engine relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: isize,
    pub stop: isize,
}

impl Interval {
    pub fn new(start: isize, stop: isize) -> Self {
        Self { start, stop }
    }

    /// Returns true if `start <= item < stop`.
    #[must_use]
    pub fn contains(&self, item: isize) -> bool {
        item >= self.start && item < self.stop
    }

    /// Returns `max(stop - start + 1, 0)`.
    ///
    /// Inverted pairs count as zero. Uses saturating arithmetic so extreme
    /// bounds cannot overflow.
    #[must_use]
    pub fn length(&self) -> usize {
        let len = self.stop.saturating_sub(self.start).saturating_add(1);
        usize::try_from(len).unwrap_or(0)
    }

    /// Returns true when no identifier satisfies [`contains`](Self::contains).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    /// Iterates over the contained identifiers, `start..stop`.
    pub fn iter(&self) -> Range<isize> {
        self.start..self.stop
    }
}

impl From<Range<isize>> for Interval {
    fn from(range: Range<isize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.stop {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.stop)
        }
    }
}
