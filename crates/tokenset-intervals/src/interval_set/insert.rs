use super::IntervalSet;
use crate::error::IntervalSetError;
use crate::interval::Interval;

impl IntervalSet {
    /// Adds the single identifier `v`, i.e. the interval `{v, v + 1}`.
    ///
    /// Fails with [`IntervalSetError::Unrepresentable`] for `isize::MAX`.
    pub fn add_one(&mut self, v: isize) -> Result<(), IntervalSetError> {
        self.ensure_mutable("add_one")?;
        let stop = v
            .checked_add(1)
            .ok_or(IntervalSetError::Unrepresentable(v))?;
        self.insert_interval(Interval::new(v, stop));
        Ok(())
    }

    /// Adds the raw pair `{l, h}` as given.
    ///
    /// `h` is read with the same conventions as any other [`Interval`]; pass
    /// `h + 1` to include `h` in [`contains`](Self::contains).
    pub fn add_range(&mut self, l: isize, h: isize) -> Result<(), IntervalSetError> {
        self.add_interval(Interval::new(l, h))
    }

    /// Merge-inserts `v`, keeping the set sorted, disjoint and non-adjacent.
    ///
    /// Empty or inverted intervals (`stop <= start`) hold no identifiers and
    /// are ignored.
    pub fn add_interval(&mut self, v: Interval) -> Result<(), IntervalSetError> {
        self.ensure_mutable("add_interval")?;
        self.insert_interval(v);
        Ok(())
    }

    /// Unions every interval of `other` into this set.
    ///
    /// Intervals are copied, so later mutation of either set never affects the
    /// other. Returns the receiver to allow chaining.
    pub fn add_set(&mut self, other: &IntervalSet) -> Result<&mut Self, IntervalSetError> {
        self.ensure_mutable("add_set")?;
        for interval in &other.intervals {
            self.insert_interval(*interval);
        }
        Ok(self)
    }

    pub(super) fn insert_interval(&mut self, v: Interval) {
        if v.is_empty() {
            log::trace!("Ignoring empty interval {v:?}");
            return;
        }

        for k in 0..self.intervals.len() {
            let existing = self.intervals[k];
            if v.stop < existing.start {
                // strictly before, with a gap
                self.intervals.insert(k, v);
                return;
            } else if v.stop == existing.start {
                self.intervals[k].start = v.start;
                return;
            } else if v.start <= existing.stop {
                self.intervals[k] = Interval::new(
                    existing.start.min(v.start),
                    existing.stop.max(v.stop),
                );
                self.reduce(k);
                return;
            }
        }

        self.intervals.push(v);
    }

    /// Coalesces slot `k` with the intervals following it after `k` has grown.
    fn reduce(&mut self, k: usize) {
        while k + 1 < self.intervals.len() {
            let (left, right) = (self.intervals[k], self.intervals[k + 1]);
            if left.stop >= right.stop {
                self.intervals.remove(k + 1);
            } else if left.stop >= right.start {
                self.intervals[k].stop = right.stop;
                self.intervals.remove(k + 1);
                // `right` was already separated from its own successor
                break;
            } else {
                break;
            }
        }
    }
}
