// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! IntervalSet: sorted, disjoint closed intervals with tolerant operations.
//!
//! Invariants (always held):
//!    - intervals are sorted by `low()`
//!    - intervals are pairwise disjoint beyond [`DEFAULT_TOLERANCE`]
//!    - every stored interval is wider than the tolerance
//!
//! Insertions merge with neighbors whose boundaries sit within the
//! tolerance, so two band fragments produced by independent wrap-arithmetic
//! paths coalesce instead of leaving a hairline gap.

use crate::interval::Interval;
use crate::numeric::{almost_greater, almost_less};
use core::ops::Deref;
use serde::{Deserialize, Serialize};

/// A union of pairwise-disjoint closed intervals, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Creates a new, empty set. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Number of disjoint intervals in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The `i`-th interval in ascending order; [`Interval::EMPTY`] when out
    /// of range.
    #[inline]
    pub fn get(&self, i: usize) -> Interval {
        self.intervals.get(i).copied().unwrap_or(Interval::EMPTY)
    }

    /// All intervals, sorted and disjoint.
    #[inline]
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Removes all intervals, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Adds the closed interval `[lo, up]`, merging with every existing
    /// interval that overlaps or touches it within the tolerance.
    ///
    /// Degenerate input (`lo >= up` beyond tolerance, or width below the
    /// tolerance) is ignored.
    pub fn almost_add(&mut self, lo: f64, up: f64) {
        if !almost_less(lo, up) {
            return;
        }
        let mut merged_low = lo;
        let mut merged_up = up;
        let mut out = Vec::with_capacity(self.intervals.len() + 1);
        let mut placed = false;
        for &iv in &self.intervals {
            if almost_less(iv.up(), merged_low) {
                // Entirely before the new interval.
                out.push(iv);
            } else if almost_greater(iv.low(), merged_up) {
                // Entirely after: the merged interval goes first.
                if !placed {
                    out.push(Interval::new(merged_low, merged_up));
                    placed = true;
                }
                out.push(iv);
            } else {
                merged_low = merged_low.min(iv.low());
                merged_up = merged_up.max(iv.up());
            }
        }
        if !placed {
            out.push(Interval::new(merged_low, merged_up));
        }
        self.intervals = out;
        debug_assert!(self.invariants_hold());
    }

    /// In-place intersection with `other`.
    ///
    /// A fragment of the intersection survives only if it is wider than the
    /// tolerance, so two sets that merely touch produce an empty result
    /// instead of a hairline sliver.
    pub fn almost_intersect(&mut self, other: &IntervalSet) {
        if self.is_empty() {
            return;
        }
        if other.is_empty() {
            self.clear();
            return;
        }
        let mut out = Vec::with_capacity(self.len().min(other.len()));
        let (mut i, mut j) = (0usize, 0usize);
        while i < self.intervals.len() && j < other.intervals.len() {
            let a = self.intervals[i];
            let b = other.intervals[j];
            let lo = a.low().max(b.low());
            let up = a.up().min(b.up());
            if almost_less(lo, up) {
                out.push(Interval::new(lo, up));
            }
            // Advance whichever interval finishes first.
            if a.up() < b.up() {
                i += 1;
            } else {
                j += 1;
            }
        }
        self.intervals = out;
        debug_assert!(self.invariants_hold());
    }

    #[cfg(debug_assertions)]
    fn invariants_hold(&self) -> bool {
        use crate::numeric::DEFAULT_TOLERANCE;
        self.intervals.iter().all(|iv| iv.width() > DEFAULT_TOLERANCE)
            && self
                .intervals
                .windows(2)
                .all(|w| almost_less(w[0].up(), w[1].low()))
    }

    #[cfg(not(debug_assertions))]
    fn invariants_hold(&self) -> bool {
        true
    }
}

impl Deref for IntervalSet {
    type Target = [Interval];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.intervals
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = core::slice::Iter<'a, Interval>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(f64, f64)]) -> IntervalSet {
        let mut s = IntervalSet::new();
        for &(lo, up) in pairs {
            s.almost_add(lo, up);
        }
        s
    }

    #[test]
    fn add_keeps_ascending_order() {
        let s = set(&[(5.0, 7.0), (1.0, 3.0), (9.0, 12.0)]);
        assert_eq!(
            s.as_slice(),
            &[
                Interval::new(1.0, 3.0),
                Interval::new(5.0, 7.0),
                Interval::new(9.0, 12.0)
            ]
        );
    }

    #[test]
    fn add_merges_overlap_and_touch() {
        let s = set(&[(1.0, 3.0), (2.5, 5.0)]);
        assert_eq!(s.as_slice(), &[Interval::new(1.0, 5.0)]);

        // Touching endpoints merge.
        let s = set(&[(1.0, 3.0), (3.0, 5.0)]);
        assert_eq!(s.as_slice(), &[Interval::new(1.0, 5.0)]);

        // Endpoints within tolerance merge too.
        let s = set(&[(1.0, 3.0), (3.0 + 0.5e-8, 5.0)]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(0).low(), 1.0);
        assert_eq!(s.get(0).up(), 5.0);
    }

    #[test]
    fn add_bridges_several_intervals() {
        let s = set(&[(1.0, 2.0), (4.0, 5.0), (7.0, 8.0), (1.5, 7.5)]);
        assert_eq!(s.as_slice(), &[Interval::new(1.0, 8.0)]);
    }

    #[test]
    fn add_ignores_degenerate_input() {
        let mut s = IntervalSet::new();
        s.almost_add(2.0, 2.0);
        s.almost_add(3.0, 3.0 + 0.5e-8);
        s.almost_add(5.0, 4.0);
        assert!(s.is_empty());
    }

    #[test]
    fn get_out_of_range_is_empty() {
        let s = set(&[(0.0, 1.0)]);
        assert!(s.get(3).is_empty());
    }

    #[test]
    fn intersect_basic() {
        let mut a = set(&[(1.0, 5.0), (7.0, 10.0)]);
        let b = set(&[(3.0, 8.0)]);
        a.almost_intersect(&b);
        assert_eq!(
            a.as_slice(),
            &[Interval::new(3.0, 5.0), Interval::new(7.0, 8.0)]
        );
    }

    #[test]
    fn intersect_with_empty_clears() {
        let mut a = set(&[(1.0, 5.0)]);
        a.almost_intersect(&IntervalSet::new());
        assert!(a.is_empty());
    }

    #[test]
    fn intersect_touching_yields_nothing() {
        let mut a = set(&[(1.0, 3.0)]);
        let b = set(&[(3.0, 5.0)]);
        a.almost_intersect(&b);
        assert!(a.is_empty());
    }

    #[test]
    fn intersect_is_commutative_on_samples() {
        let a0 = set(&[(0.0, 4.0), (6.0, 9.0), (11.0, 15.0)]);
        let b0 = set(&[(2.0, 7.0), (8.5, 12.0)]);
        let mut ab = a0.clone();
        ab.almost_intersect(&b0);
        let mut ba = b0.clone();
        ba.almost_intersect(&a0);
        assert_eq!(ab, ba);
    }
}
