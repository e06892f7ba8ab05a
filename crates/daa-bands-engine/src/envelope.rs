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

//! Geometry of the reachable range of one control variable.
//!
//! The envelope owns the `[min, max]` bounds (absolute, or relative to the
//! ownship's current value), the optional modulus for circular variables
//! such as track, and the discretization step. All modular arithmetic of
//! the engine funnels through here.
//!
//! When `modulus > 0` the domain may wrap: `min_val` is not necessarily
//! below `max_val`, and the reachable range is then the two linear
//! segments `[min_val, modulus]` and `[0, max_val]`.

use crate::kinematics::IndexBand;
use daa_bands_core::numeric::{almost_equals, almost_greater, almost_leq, modulo};
use daa_bands_core::{Interval, IntervalSet};

/// Bounds, framing, modulus and step of a control variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlEnvelope {
    min: f64,
    max: f64,
    relative: bool,
    modulus: f64,
    step: f64,
    circular: bool,
}

impl ControlEnvelope {
    /// A new envelope. `circular` is derived later by [`validate`].
    ///
    /// [`validate`]: ControlEnvelope::validate
    pub fn new(min: f64, max: f64, relative: bool, modulus: f64, step: f64) -> Self {
        Self {
            min,
            max,
            relative,
            modulus,
            step,
            circular: false,
        }
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `true` when `[min, max]` are offsets from the current value rather
    /// than absolute bounds.
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    #[inline]
    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// `true` when the configured range spans the whole period.
    #[inline]
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    #[inline]
    pub(crate) fn set_min(&mut self, val: f64) {
        self.min = val;
    }

    #[inline]
    pub(crate) fn set_max(&mut self, val: f64) {
        self.max = val;
    }

    /// Flips the framing. The bounds change meaning, so they are poisoned
    /// until the caller re-sets both.
    #[inline]
    pub(crate) fn set_relative(&mut self, val: bool) {
        self.relative = val;
        self.min = f64::NAN;
        self.max = f64::NAN;
    }

    #[inline]
    pub(crate) fn set_modulus(&mut self, val: f64) {
        self.modulus = val;
    }

    #[inline]
    pub(crate) fn set_step(&mut self, val: f64) {
        self.step = val;
    }

    /// Wraps a value into `[0, modulus)`; identity for non-modular
    /// envelopes.
    #[inline]
    pub fn mod_val(&self, val: f64) -> f64 {
        if self.modulus > 0.0 {
            modulo(val, self.modulus)
        } else {
            val
        }
    }

    /// Checks the configuration against the ownship's current value and
    /// derives circularity.
    ///
    /// Requirements: positive step, finite bounds, `min <= 0 <= max` for
    /// relative framing or `min <= own <= max` for absolute framing, and a
    /// modulus wide enough for the configured range.
    pub(crate) fn validate(&mut self, own: f64) -> bool {
        self.circular = false;
        if !(self.step > 0.0 && self.min.is_finite() && self.max.is_finite()) {
            return false;
        }
        let framed = if self.relative {
            self.min <= 0.0 && self.max >= 0.0
        } else {
            self.min <= own && own <= self.max
        };
        if !framed || self.modulus < 0.0 {
            return false;
        }
        if self.modulus > 0.0 {
            let half = if self.relative {
                self.modulus / 2.0
            } else {
                self.modulus
            };
            if !(almost_leq(self.max - self.min, self.modulus) && almost_leq(self.max, half)) {
                return false;
            }
            self.circular = almost_equals(self.max - self.min, self.modulus);
        }
        true
    }

    /// Lower end of the reachable range. In `[0, modulus]` for modular
    /// envelopes, where it may exceed [`max_val`](ControlEnvelope::max_val).
    pub fn min_val(&self, own: f64) -> f64 {
        if self.circular {
            0.0
        } else if self.relative {
            self.mod_val(own + self.min)
        } else {
            self.min
        }
    }

    /// Upper end of the reachable range.
    pub fn max_val(&self, own: f64) -> f64 {
        if self.circular {
            self.modulus
        } else if self.relative {
            self.mod_val(own + self.max)
        } else {
            self.max
        }
    }

    /// Positive distance from the current value down to the lower end; in
    /// `[0, modulus/2]` for modular envelopes.
    pub fn min_rel(&self, own: f64) -> f64 {
        if self.circular {
            self.modulus / 2.0
        } else if self.relative {
            -self.min
        } else {
            self.mod_val(own - self.min)
        }
    }

    /// Positive distance from the current value up to the upper end.
    pub fn max_rel(&self, own: f64) -> f64 {
        if self.circular {
            self.modulus / 2.0
        } else if self.relative {
            self.max
        } else {
            self.mod_val(self.max - own)
        }
    }

    /// Number of downward maneuver steps to search.
    pub fn max_down(&self, own: f64) -> i32 {
        let mut down = (self.min_rel(own) / self.step).ceil() as i32 + 1;
        if self.modulus > 0.0 && almost_greater(down as f64 * self.step, self.modulus / 2.0) {
            down -= 1;
        }
        down
    }

    /// Number of upward maneuver steps to search.
    pub fn max_up(&self, own: f64) -> i32 {
        let mut up = (self.max_rel(own) / self.step).ceil() as i32 + 1;
        if self.modulus > 0.0 && almost_greater(up as f64 * self.step, self.modulus / 2.0) {
            up -= 1;
        }
        up
    }

    /// The whole reachable range as an interval set: one segment, or two
    /// when the modular domain wraps.
    pub fn full_domain_set(&self, own: f64) -> IntervalSet {
        let mut set = IntervalSet::new();
        let min = self.min_val(own);
        let max = self.max_val(own);
        if self.modulus == 0.0 || min <= max {
            set.almost_add(min, max);
        } else {
            set.almost_add(min, self.modulus);
            set.almost_add(0.0, max);
        }
        set
    }

    /// Converts conflict-free index runs into real-valued sub-ranges of the
    /// reachable domain, scaling by the step, offsetting by the current
    /// value, and resolving modular wrap.
    pub fn none_intervals(&self, bands: &[IndexBand], own: f64) -> IntervalSet {
        let mut set = IntervalSet::new();
        let min = self.min_val(own);
        let max = self.max_val(own);
        for band in bands {
            let lb = self.step * f64::from(band.lb) + own;
            let ub = self.step * f64::from(band.ub) + own;
            if self.modulus == 0.0 {
                set.almost_add(lb.max(min), ub.min(max));
                continue;
            }
            let lb = self.mod_val(lb);
            let ub = self.mod_val(ub);
            if almost_equals(lb, ub) {
                // The run covers the whole circle.
                if min <= max {
                    set.almost_add(min, max);
                } else {
                    set.almost_add(min, self.modulus);
                    set.almost_add(0.0, max);
                }
            } else if min <= max && lb <= ub {
                set.almost_add(min.max(lb), max.min(ub));
            } else if min <= max {
                // Contiguous domain, wrapping run.
                let mm = Interval::new(min, max);
                let upper = Interval::new(lb, self.modulus).intersect(&mm);
                let lower = Interval::new(0.0, ub).intersect(&mm);
                set.almost_add(upper.low(), upper.up());
                set.almost_add(lower.low(), lower.up());
            } else if lb <= ub {
                // Wrapping domain, contiguous run.
                let run = Interval::new(lb, ub);
                let lower = Interval::new(0.0, max).intersect(&run);
                let upper = Interval::new(min, self.modulus).intersect(&run);
                set.almost_add(lower.low(), lower.up());
                set.almost_add(upper.low(), upper.up());
            } else {
                // Both wrap.
                set.almost_add(min.max(lb), self.modulus);
                set.almost_add(0.0, max.min(ub));
            }
        }
        set
    }
}
