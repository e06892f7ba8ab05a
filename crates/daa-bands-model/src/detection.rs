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

//! Conflict detection against a protected cylinder.
//!
//! A conflict detector answers one question: on the relative linear
//! trajectory of two aircraft, when (if at all) within `[b, t]` is the
//! protected volume violated? The band engine only consumes the resulting
//! time window, so detectors for other volume shapes plug in behind the
//! same trait.

use daa_bands_core::geom::Vect3;
use std::fmt::Debug;

/// Horizontal radius of the near mid-air collision cylinder, meters
/// (500 ft).
pub const NMAC_D: f64 = 152.4;

/// Vertical half-height of the near mid-air collision cylinder, meters
/// (100 ft).
pub const NMAC_H: f64 = 30.48;

/// The violation window of one pairwise conflict query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConflictData {
    time_in: f64,
    time_out: f64,
}

impl ConflictData {
    #[inline]
    pub fn new(time_in: f64, time_out: f64) -> Self {
        Self { time_in, time_out }
    }

    /// The no-violation answer.
    #[inline]
    pub fn none() -> Self {
        Self {
            time_in: f64::INFINITY,
            time_out: f64::NEG_INFINITY,
        }
    }

    /// Returns `true` if the protected volume is violated at some time of
    /// the queried window.
    #[inline]
    pub fn conflict(&self) -> bool {
        self.time_in < self.time_out
    }

    /// First violation time, clipped to the queried window.
    #[inline]
    pub fn time_in(&self) -> f64 {
        self.time_in
    }

    /// Last violation time, clipped to the queried window.
    #[inline]
    pub fn time_out(&self) -> f64 {
        self.time_out
    }
}

/// A 3-D conflict detector over linear trajectories.
pub trait ConflictDetector: Debug {
    /// Violation window of the relative trajectory `(so + t·vo) −
    /// (si + t·vi)` clipped to `[b, t]`.
    fn conflict_detection(
        &self,
        so: Vect3,
        vo: Vect3,
        si: Vect3,
        vi: Vect3,
        b: f64,
        t: f64,
    ) -> ConflictData;
}

/// Protected cylinder of horizontal radius `d` and vertical half-height
/// `h` around the intruder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderDetector {
    d: f64,
    h: f64,
}

impl CylinderDetector {
    #[inline]
    pub fn new(d: f64, h: f64) -> Self {
        Self { d, h }
    }

    #[inline]
    pub fn horizontal_separation(&self) -> f64 {
        self.d
    }

    #[inline]
    pub fn vertical_separation(&self) -> f64 {
        self.h
    }

    /// Updates the horizontal radius; non-positive values are ignored.
    #[inline]
    pub fn set_horizontal_separation(&mut self, d: f64) {
        if d > 0.0 {
            self.d = d;
        }
    }

    /// Updates the vertical half-height; non-positive values are ignored.
    #[inline]
    pub fn set_vertical_separation(&mut self, h: f64) {
        if h > 0.0 {
            self.h = h;
        }
    }

    /// Open time window during which the horizontal distance is below `d`.
    fn horizontal_window(&self, s: Vect3, v: Vect3) -> (f64, f64) {
        let a = v.sqv2();
        let b = 2.0 * s.dot2(v);
        let c = s.sqv2() - self.d * self.d;
        if a == 0.0 {
            // No relative horizontal motion: inside forever or never.
            return if c < 0.0 {
                (f64::NEG_INFINITY, f64::INFINITY)
            } else {
                (f64::INFINITY, f64::NEG_INFINITY)
            };
        }
        let disc = b * b - 4.0 * a * c;
        if disc <= 0.0 {
            return (f64::INFINITY, f64::NEG_INFINITY);
        }
        let sq = disc.sqrt();
        ((-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a))
    }

    /// Open time window during which the vertical distance is below `h`.
    fn vertical_window(&self, s: Vect3, v: Vect3) -> (f64, f64) {
        if v.z == 0.0 {
            return if s.z.abs() < self.h {
                (f64::NEG_INFINITY, f64::INFINITY)
            } else {
                (f64::INFINITY, f64::NEG_INFINITY)
            };
        }
        let t1 = (-self.h - s.z) / v.z;
        let t2 = (self.h - s.z) / v.z;
        (t1.min(t2), t1.max(t2))
    }
}

impl ConflictDetector for CylinderDetector {
    fn conflict_detection(
        &self,
        so: Vect3,
        vo: Vect3,
        si: Vect3,
        vi: Vect3,
        b: f64,
        t: f64,
    ) -> ConflictData {
        let s = so - si;
        let v = vo - vi;
        let (h_in, h_out) = self.horizontal_window(s, v);
        let (z_in, z_out) = self.vertical_window(s, v);
        let entry = h_in.max(z_in).max(b);
        let exit = h_out.min(z_out).min(t);
        if entry < exit {
            ConflictData::new(entry, exit)
        } else {
            ConflictData::none()
        }
    }
}
