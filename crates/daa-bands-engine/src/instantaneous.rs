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

//! Instantaneous-maneuver generator for the four classic guidance axes.
//!
//! Evaluates maneuver index `k` as if the ownship switched to the new
//! track, ground speed, vertical speed or altitude instantly and then flew
//! straight. This ignores turn and acceleration dynamics, which makes it a
//! conservative, dependency-free generator for tests, benches and coarse
//! guidance; kinematically-integrated generators plug in through the same
//! trait pair.

use crate::kinematics::{
    ControlAxis, EvalRequest, IndexBand, ManeuverDirection, ManeuverEvaluator,
};
use daa_bands_core::geom::Vect3;
use daa_bands_core::numeric::modulo;
use daa_bands_model::TrafficState;
use std::f64::consts::TAU;

/// The control variable an [`InstantaneousEvaluator`] maneuvers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuidanceAxis {
    /// Track angle, radians clockwise from north in `[0, 2π)`.
    Track,
    /// Horizontal speed, m/s.
    GroundSpeed,
    /// Vertical rate, m/s, positive up.
    VerticalSpeed,
    /// Altitude, m.
    Altitude,
}

/// A maneuver generator under the instantaneous-change approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstantaneousEvaluator {
    axis: GuidanceAxis,
}

impl InstantaneousEvaluator {
    #[inline]
    pub fn new(axis: GuidanceAxis) -> Self {
        Self { axis }
    }

    #[inline]
    pub fn track() -> Self {
        Self::new(GuidanceAxis::Track)
    }

    #[inline]
    pub fn ground_speed() -> Self {
        Self::new(GuidanceAxis::GroundSpeed)
    }

    #[inline]
    pub fn vertical_speed() -> Self {
        Self::new(GuidanceAxis::VerticalSpeed)
    }

    #[inline]
    pub fn altitude() -> Self {
        Self::new(GuidanceAxis::Altitude)
    }

    #[inline]
    pub fn axis(&self) -> GuidanceAxis {
        self.axis
    }

    /// The ownship state with the control variable set to `value`.
    fn maneuvered(&self, ownship: &TrafficState, value: f64) -> TrafficState {
        let s = ownship.position();
        let v = ownship.velocity();
        match self.axis {
            GuidanceAxis::Track => {
                let gs = v.norm2();
                TrafficState::new(
                    ownship.id(),
                    s,
                    Vect3::new(gs * value.sin(), gs * value.cos(), v.z),
                )
            }
            GuidanceAxis::GroundSpeed => {
                // Ground speed floors at zero.
                let gs = value.max(0.0);
                let track = v.x.atan2(v.y);
                TrafficState::new(
                    ownship.id(),
                    s,
                    Vect3::new(gs * track.sin(), gs * track.cos(), v.z),
                )
            }
            GuidanceAxis::VerticalSpeed => {
                TrafficState::new(ownship.id(), s, Vect3::new(v.x, v.y, value))
            }
            GuidanceAxis::Altitude => {
                TrafficState::new(ownship.id(), Vect3::new(s.x, s.y, value), v)
            }
        }
    }

    /// Conflict test of index `k`: the maneuvered trajectory against every
    /// traffic aircraft, under the conflict detector on `[b, t]` and the
    /// recovery detector (if any) on `[b2, t2]`.
    fn is_red(&self, req: &EvalRequest<'_>, k: i32) -> bool {
        let value = self.own_val(req.ownship) + f64::from(k) * req.step;
        let state = self.maneuvered(req.ownship, value);
        for ac in req.traffic {
            let conflict = req
                .conflict_det
                .conflict_detection(
                    state.position(),
                    state.velocity(),
                    ac.position(),
                    ac.velocity(),
                    req.b,
                    req.t,
                )
                .conflict();
            if conflict {
                return true;
            }
            if let Some(recovery_det) = req.recovery_det {
                let recovery_conflict = recovery_det
                    .conflict_detection(
                        state.position(),
                        state.velocity(),
                        ac.position(),
                        ac.velocity(),
                        req.b2,
                        req.t2,
                    )
                    .conflict();
                if recovery_conflict {
                    return true;
                }
            }
        }
        false
    }
}

impl ControlAxis for InstantaneousEvaluator {
    fn own_val(&self, ownship: &TrafficState) -> f64 {
        let v = ownship.velocity();
        match self.axis {
            GuidanceAxis::Track => modulo(v.x.atan2(v.y), TAU),
            GuidanceAxis::GroundSpeed => v.norm2(),
            GuidanceAxis::VerticalSpeed => v.z,
            GuidanceAxis::Altitude => ownship.position().z,
        }
    }

    fn time_step(&self, _ownship: &TrafficState) -> f64 {
        1.0
    }
}

impl ManeuverEvaluator for InstantaneousEvaluator {
    fn conflict_free_bands(&self, req: &EvalRequest<'_>) -> Vec<IndexBand> {
        IndexBand::collect_conflict_free(req.max_down, req.max_up, |k| self.is_red(req, k))
    }

    fn any_conflict(&self, req: &EvalRequest<'_>) -> bool {
        (-req.max_down..=req.max_up).any(|k| self.is_red(req, k))
    }

    fn all_conflict(&self, req: &EvalRequest<'_>) -> bool {
        (-req.max_down..=req.max_up).all(|k| self.is_red(req, k))
    }

    fn first_conflict_free(&self, req: &EvalRequest<'_>, dir: ManeuverDirection) -> i32 {
        if !self.is_red(req, 0) {
            return 0;
        }
        let max_n = match dir {
            ManeuverDirection::Down => req.max_down,
            ManeuverDirection::Up => req.max_up,
        };
        let sign = if dir == ManeuverDirection::Up { 1 } else { -1 };
        for n in 1..=max_n {
            if !self.is_red(req, sign * n) {
                return n;
            }
        }
        -1
    }
}
