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

//! Closed real interval `[low, up]`.
//!
//! A guidance band is a closed sub-range of the control variable, so the
//! interval type used throughout this workspace is closed on both ends and
//! can represent the empty interval explicitly (`low > up`). Boundary
//! membership is selectable per query because band boundaries are open or
//! closed depending on the region that owns them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval `[low, up]` of `f64` values.
///
/// Unlike a half-open index range, the bounds are *not* swapped on
/// construction: `low > up` is the canonical empty interval, and operations
/// such as [`Interval::intersect`] rely on producing it for disjoint
/// inputs.
///
/// # Examples
///
/// ```
/// use daa_bands_core::Interval;
/// let iv = Interval::new(1.0, 5.0);
/// assert!(iv.contains(1.0, true, true));
/// assert!(!iv.contains(1.0, false, true));
/// assert!(Interval::new(5.0, 1.0).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    low: f64,
    up: f64,
}

impl Interval {
    /// The canonical empty interval.
    pub const EMPTY: Interval = Interval {
        low: f64::INFINITY,
        up: f64::NEG_INFINITY,
    };

    #[inline]
    pub const fn new(low: f64, up: f64) -> Self {
        Self { low, up }
    }

    /// Lower bound (inclusive when the interval is non-empty).
    #[inline]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (inclusive when the interval is non-empty).
    #[inline]
    pub const fn up(&self) -> f64 {
        self.up
    }

    /// Returns `true` if the interval contains no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low > self.up
    }

    /// Width of the interval; zero for empty intervals.
    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.up - self.low }
    }

    /// Membership test with selectable boundary inclusion.
    ///
    /// `lb_closed` / `ub_closed` decide whether a value sitting exactly on
    /// the lower / upper bound counts as inside.
    #[inline]
    pub fn contains(&self, val: f64, lb_closed: bool, ub_closed: bool) -> bool {
        let above = if lb_closed { self.low <= val } else { self.low < val };
        let below = if ub_closed { val <= self.up } else { val < self.up };
        above && below
    }

    /// Membership with both boundaries inclusive.
    #[inline]
    pub fn contains_closed(&self, val: f64) -> bool {
        self.contains(val, true, true)
    }

    /// Intersection of two closed intervals; empty when they are disjoint.
    #[inline]
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval::new(self.low.max(other.low), self.up.min(other.up))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.low, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_representation() {
        assert!(Interval::EMPTY.is_empty());
        assert!(Interval::new(2.0, 1.0).is_empty());
        assert!(!Interval::new(1.0, 1.0).is_empty());
        assert_eq!(Interval::new(2.0, 1.0).width(), 0.0);
    }

    #[test]
    fn boundary_inclusion() {
        let iv = Interval::new(0.0, 10.0);
        assert!(iv.contains(0.0, true, false));
        assert!(!iv.contains(0.0, false, false));
        assert!(iv.contains(10.0, false, true));
        assert!(!iv.contains(10.0, false, false));
        assert!(iv.contains(5.0, false, false));
    }

    #[test]
    fn intersect_overlap_and_disjoint() {
        let a = Interval::new(0.0, 5.0);
        let b = Interval::new(3.0, 8.0);
        assert_eq!(a.intersect(&b), Interval::new(3.0, 5.0));

        let c = Interval::new(6.0, 8.0);
        assert!(a.intersect(&c).is_empty());

        // Touching closed intervals share a point.
        let d = Interval::new(5.0, 8.0);
        let t = a.intersect(&d);
        assert!(!t.is_empty());
        assert_eq!(t, Interval::new(5.0, 5.0));
    }

    #[test]
    fn singleton_contains_only_its_point() {
        let s = Interval::new(3.0, 3.0);
        assert!(s.contains_closed(3.0));
        assert!(!s.contains(3.0, false, true));
        assert!(!s.contains_closed(3.1));
    }
}
