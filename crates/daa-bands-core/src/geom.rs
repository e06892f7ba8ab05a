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

//! 3-D vectors in a local east/north/up frame, SI units.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 3-D vector: `x` east, `y` north, `z` up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vect3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vect3 {
    pub const ZERO: Vect3 = Vect3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position after moving with velocity `vel` for `t` seconds.
    #[inline]
    pub fn linear(&self, vel: Vect3, t: f64) -> Vect3 {
        Vect3::new(self.x + vel.x * t, self.y + vel.y * t, self.z + vel.z * t)
    }

    /// Dot product of the horizontal (east/north) components.
    #[inline]
    pub fn dot2(&self, other: Vect3) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared norm of the horizontal components.
    #[inline]
    pub fn sqv2(&self) -> f64 {
        self.dot2(*self)
    }

    /// Norm of the horizontal components.
    #[inline]
    pub fn norm2(&self) -> f64 {
        self.sqv2().sqrt()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vect3 {
    type Output = Vect3;
    #[inline]
    fn add(self, rhs: Vect3) -> Vect3 {
        Vect3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vect3 {
    type Output = Vect3;
    #[inline]
    fn sub(self, rhs: Vect3) -> Vect3 {
        Vect3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vect3 {
    type Output = Vect3;
    #[inline]
    fn neg(self) -> Vect3 {
        Vect3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vect3 {
    type Output = Vect3;
    #[inline]
    fn mul(self, k: f64) -> Vect3 {
        Vect3::new(self.x * k, self.y * k, self.z * k)
    }
}
