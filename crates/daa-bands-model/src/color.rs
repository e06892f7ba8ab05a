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

//! Colored breakpoint lists and band ranges.
//!
//! A sorted `Vec<ColoredValue>` is a piecewise-constant coloring of a
//! segment of the control variable: entry `i` colors the sub-segment ending
//! at `val_i` and starting at `val_{i-1}`. The first entry is a sentinel
//! whose region is never read. The band compositor paints none-intervals
//! into such a list, most severe alert level first, and finally emits the
//! maximal same-colored [`BandsRange`]s.

use crate::region::BandsRegion;
use daa_bands_core::numeric::{almost_equals, almost_geq, almost_less};
use daa_bands_core::Interval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous sub-range of the control variable labeled with a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandsRange {
    pub interval: Interval,
    pub region: BandsRegion,
}

impl BandsRange {
    #[inline]
    pub const fn new(interval: Interval, region: BandsRegion) -> Self {
        Self { interval, region }
    }
}

impl fmt::Display for BandsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interval, self.region)
    }
}

/// A breakpoint of a piecewise-constant coloring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoredValue {
    pub val: f64,
    pub region: BandsRegion,
}

impl ColoredValue {
    #[inline]
    pub const fn new(val: f64, region: BandsRegion) -> Self {
        Self { val, region }
    }

    /// Paints the closed interval `[a, b]` into the breakpoint list.
    ///
    /// Breakpoints are created (or reused, within tolerance) at both ends:
    /// the segment ending at `a` takes `lb_color`, the interior `(a, b]`
    /// takes `ub_color`, and breakpoints strictly inside `(a, b)` are
    /// dropped. The list must already span the painted interval, i.e. hold
    /// at least the two endpoint sentinels of the domain segment.
    ///
    /// The compositor inserts the none-intervals of each alert level with
    /// `lb_color` = that level's region and `ub_color` = the next less
    /// severe region, descending in severity; nesting of the none-sets then
    /// leaves exactly the most severe applicable region on every segment.
    pub fn insert(
        list: &mut Vec<ColoredValue>,
        interval: Interval,
        lb_color: BandsRegion,
        ub_color: BandsRegion,
    ) {
        if interval.is_empty() || almost_geq(interval.low(), interval.up()) {
            return;
        }
        debug_assert!(list.len() >= 2, "breakpoint list must span its domain");
        let low = interval.low().max(list[0].val);
        let up = interval.up().min(list[list.len() - 1].val);
        if almost_geq(low, up) {
            return;
        }

        // Lower breakpoint: reuse a coincident entry or split the segment.
        let i = list.partition_point(|cv| almost_less(cv.val, low));
        debug_assert!(i < list.len());
        if almost_equals(list[i].val, low) {
            list[i].region = lb_color;
        } else {
            list.insert(i, ColoredValue::new(low, lb_color));
        }

        // Upper breakpoint: drop everything strictly inside (low, up).
        let mut j = i + 1;
        while j < list.len() && almost_less(list[j].val, up) {
            j += 1;
        }
        if j < list.len() && almost_equals(list[j].val, up) {
            list[j].region = ub_color;
            list.drain(i + 1..j);
        } else {
            list.drain(i + 1..j);
            list.insert(i + 1, ColoredValue::new(up, ub_color));
        }
    }

    /// Appends the maximal same-colored ranges of the breakpoint list to
    /// `ranges`, merging adjacent segments of equal region.
    pub fn to_bands(ranges: &mut Vec<BandsRange>, list: &[ColoredValue]) {
        for w in list.windows(2) {
            if almost_equals(w[0].val, w[1].val) {
                continue;
            }
            let region = w[1].region;
            if let Some(last) = ranges.last_mut() {
                if last.region == region && last.interval.up() == w[0].val {
                    last.interval = Interval::new(last.interval.low(), w[1].val);
                    continue;
                }
            }
            ranges.push(BandsRange::new(Interval::new(w[0].val, w[1].val), region));
        }
    }
}
