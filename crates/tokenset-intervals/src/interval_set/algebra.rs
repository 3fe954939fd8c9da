use super::IntervalSet;
use crate::interval::Interval;

impl IntervalSet {
    /// Identifiers in the closed range `[start, stop]` that are not in this set.
    ///
    /// The bounding range is built as `{start, stop + 1}` and every interval of
    /// the receiver is subtracted from it. With `stop == isize::MAX` the bound
    /// saturates, which loses nothing since no set can hold `isize::MAX`.
    #[must_use]
    pub fn complement(&self, start: isize, stop: isize) -> IntervalSet {
        let result = IntervalSet::of(start, stop.saturating_add(1)).subtract(self);
        log::trace!("complement of {} within [{start}, {stop}] is {}", self, result);
        result
    }

    /// Identifiers in this set that are not in `other`.
    ///
    /// The result is a fresh, mutable set.
    #[must_use]
    pub fn subtract(&self, other: &IntervalSet) -> IntervalSet {
        let mut result = IntervalSet {
            intervals: self.intervals.clone(),
            read_only: false,
        };
        for interval in &other.intervals {
            result.delete_range(*interval);
        }
        result
    }

    /// Identifiers present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &IntervalSet) -> IntervalSet {
        let mut result = IntervalSet::new();
        let (mut i, mut j) = (0, 0);
        while i < self.intervals.len() && j < other.intervals.len() {
            let (mine, theirs) = (self.intervals[i], other.intervals[j]);
            let overlap = Interval::new(mine.start.max(theirs.start), mine.stop.min(theirs.stop));
            if !overlap.is_empty() {
                result.intervals.push(overlap);
            }
            // advance whichever interval ends first; the other may still
            // overlap the next one
            if mine.stop < theirs.stop {
                i += 1;
            } else {
                j += 1;
            }
        }
        result
    }

    /// Union of all `sets` as a new set.
    #[must_use]
    pub fn union_all<'a, I>(sets: I) -> IntervalSet
    where
        I: IntoIterator<Item = &'a IntervalSet>,
    {
        let mut result = IntervalSet::new();
        for set in sets {
            for interval in &set.intervals {
                result.insert_interval(*interval);
            }
        }
        result
    }
}
