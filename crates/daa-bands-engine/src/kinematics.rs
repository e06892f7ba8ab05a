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

//! Interfaces between the band engine and a per-variable maneuver
//! generator.
//!
//! The engine is generic over the kinematics of the control variable: it
//! only needs the ownship's current value on that axis, the trajectory
//! integration step, and answers about which integer maneuver indices are
//! conflict-free. A generator implements the [`ControlAxis`] /
//! [`ManeuverEvaluator`] trait pair; the engine composes the answers into
//! colored bands.

use daa_bands_model::{ConflictDetector, TrafficState};

/// Search direction along the control variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManeuverDirection {
    /// Toward smaller values (left turn, deceleration, descent).
    Down,
    /// Toward larger values (right turn, acceleration, climb).
    Up,
}

impl ManeuverDirection {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            ManeuverDirection::Down => -1.0,
            ManeuverDirection::Up => 1.0,
        }
    }
}

/// An inclusive range `[lb, ub]` of conflict-free maneuver indices.
///
/// Indices are relative to the ownship's current value: index `k` denotes
/// the maneuver changing the control variable by `k` steps, negative for
/// the down direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexBand {
    pub lb: i32,
    pub ub: i32,
}

impl IndexBand {
    #[inline]
    pub const fn new(lb: i32, ub: i32) -> Self {
        Self { lb, ub }
    }

    /// Groups the conflict-free indices of `[-max_down, max_up]` into
    /// maximal inclusive runs.
    ///
    /// Convenience for generator implementations that decide redness one
    /// index at a time.
    pub fn collect_conflict_free(
        max_down: i32,
        max_up: i32,
        mut is_red: impl FnMut(i32) -> bool,
    ) -> Vec<IndexBand> {
        let mut out = Vec::new();
        let mut run_start: Option<i32> = None;
        for k in -max_down..=max_up {
            if is_red(k) {
                if let Some(start) = run_start.take() {
                    out.push(IndexBand::new(start, k - 1));
                }
            } else if run_start.is_none() {
                run_start = Some(k);
            }
        }
        if let Some(start) = run_start {
            out.push(IndexBand::new(start, max_up));
        }
        out
    }
}

/// One conflict evaluation request handed to a generator.
///
/// `b`/`t` bound the primary detection horizon, `b2`/`t2` the horizon of
/// the optional recovery detector (used while bisecting a recovery start
/// time: the maneuver must stay clear of the recovery volume before `b`).
/// `step` is the control-variable increment represented by one index.
#[derive(Debug, Clone, Copy)]
pub struct EvalRequest<'a> {
    pub conflict_det: &'a dyn ConflictDetector,
    pub recovery_det: Option<&'a dyn ConflictDetector>,
    pub time_step: f64,
    pub b: f64,
    pub t: f64,
    pub b2: f64,
    pub t2: f64,
    pub step: f64,
    pub max_down: i32,
    pub max_up: i32,
    pub ownship: &'a TrafficState,
    pub traffic: &'a [TrafficState],
    pub criteria_ac: Option<&'a TrafficState>,
    pub epsilon_h: i32,
    pub epsilon_v: i32,
}

/// The ownship's view of one control variable.
pub trait ControlAxis {
    /// Current value of the control variable for the given ownship state.
    fn own_val(&self, ownship: &TrafficState) -> f64;

    /// Trajectory integration step, seconds.
    fn time_step(&self, ownship: &TrafficState) -> f64;
}

/// Conflict answers over the integer maneuver indices of a request.
pub trait ManeuverEvaluator {
    /// Ordered maximal runs of conflict-free indices within
    /// `[-max_down, max_up]`.
    fn conflict_free_bands(&self, req: &EvalRequest<'_>) -> Vec<IndexBand>;

    /// Returns `true` if any index of the request produces a conflict.
    fn any_conflict(&self, req: &EvalRequest<'_>) -> bool;

    /// Returns `true` if every index of the request produces a conflict.
    fn all_conflict(&self, req: &EvalRequest<'_>) -> bool;

    /// First conflict-free index scanning `dir` from the current value.
    ///
    /// Returns `0` when the current trajectory (index 0) is already
    /// conflict-free, the 1-based magnitude of the first conflict-free
    /// index otherwise, and a negative value when the scan exhausts the
    /// direction's index range without finding one.
    fn first_conflict_free(&self, req: &EvalRequest<'_>, dir: ManeuverDirection) -> i32;
}
