use super::IntervalSet;
use crate::error::IntervalSetError;
use crate::interval::Interval;

impl IntervalSet {
    /// Removes the single identifier `v` if present.
    pub fn remove_one(&mut self, v: isize) -> Result<(), IntervalSetError> {
        self.ensure_mutable("remove_one")?;
        self.delete_one(v);
        Ok(())
    }

    /// Removes every identifier contained in `v`.
    pub fn remove_range(&mut self, v: Interval) -> Result<(), IntervalSetError> {
        self.ensure_mutable("remove_range")?;
        self.delete_range(v);
        Ok(())
    }

    fn delete_one(&mut self, v: isize) {
        for k in 0..self.intervals.len() {
            let existing = self.intervals[k];
            if v < existing.start {
                // sorted: no later interval can hold v
                return;
            } else if v >= existing.stop {
                continue;
            }

            if v == existing.start && v == existing.stop - 1 {
                self.intervals.remove(k);
            } else if v == existing.start {
                self.intervals[k].start += 1;
            } else if v == existing.stop - 1 {
                self.intervals[k].stop -= 1;
            } else {
                // interior: split into {start, v} and {v + 1, stop}
                self.intervals[k].start = v + 1;
                self.intervals.insert(k, Interval::new(existing.start, v));
            }
            return;
        }
    }

    pub(super) fn delete_range(&mut self, v: Interval) {
        if v.start.checked_add(1) == Some(v.stop) {
            self.delete_one(v.start);
            return;
        }
        if v.is_empty() {
            return;
        }

        let mut k = 0;
        while k < self.intervals.len() {
            let existing = self.intervals[k];
            if v.stop <= existing.start {
                return;
            } else if v.start > existing.start && v.stop < existing.stop {
                self.intervals[k].stop = v.start;
                self.intervals
                    .insert(k + 1, Interval::new(v.stop, existing.stop));
                return;
            } else if v.start <= existing.start && v.stop >= existing.stop {
                // the next interval shifts into slot k, examine it again
                self.intervals.remove(k);
                continue;
            } else if v.start > existing.start && v.start < existing.stop {
                self.intervals[k].stop = v.start;
            } else if v.start <= existing.start && v.stop < existing.stop {
                self.intervals[k].start = v.stop;
            }
            k += 1;
        }
    }
}
