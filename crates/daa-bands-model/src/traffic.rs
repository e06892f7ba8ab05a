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

//! Aircraft state: identifier, position and velocity in a local frame.

use daa_bands_core::geom::Vect3;
use serde::{Deserialize, Serialize};

/// The state of one aircraft (ownship or traffic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficState {
    id: String,
    position: Vect3,
    velocity: Vect3,
}

impl TrafficState {
    #[inline]
    pub fn new(id: impl Into<String>, position: Vect3, velocity: Vect3) -> Self {
        Self {
            id: id.into(),
            position,
            velocity,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn position(&self) -> Vect3 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vect3 {
        self.velocity
    }

    /// State after flying straight for `dt` seconds.
    #[inline]
    pub fn linear_projection(&self, dt: f64) -> TrafficState {
        TrafficState {
            id: self.id.clone(),
            position: self.position.linear(self.velocity, dt),
            velocity: self.velocity,
        }
    }

    /// Returns `true` if the state is usable: named, with finite position
    /// and velocity.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.position.is_finite() && self.velocity.is_finite()
    }
}
