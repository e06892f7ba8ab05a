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

//! Shared fixtures for the engine's test modules.

use crate::context::BandsContext;
use crate::kinematics::{
    ControlAxis, EvalRequest, IndexBand, ManeuverDirection, ManeuverEvaluator,
};
use daa_bands_core::geom::Vect3;
use daa_bands_model::{AlertLevel, Alertor, BandsRegion, CylinderDetector, TrafficState};

/// A maneuver generator whose conflicts are scripted by a predicate over
/// `(request, index)`.
pub(crate) struct ScriptedEvaluator {
    own_value: f64,
    red: Box<dyn Fn(&EvalRequest<'_>, i32) -> bool>,
}

impl ScriptedEvaluator {
    pub(crate) fn new(
        own_value: f64,
        red: impl Fn(&EvalRequest<'_>, i32) -> bool + 'static,
    ) -> Self {
        Self {
            own_value,
            red: Box::new(red),
        }
    }

    pub(crate) fn all_green(own_value: f64) -> Self {
        Self::new(own_value, |_, _| false)
    }
}

impl ControlAxis for ScriptedEvaluator {
    fn own_val(&self, _ownship: &TrafficState) -> f64 {
        self.own_value
    }

    fn time_step(&self, _ownship: &TrafficState) -> f64 {
        1.0
    }
}

impl ManeuverEvaluator for ScriptedEvaluator {
    fn conflict_free_bands(&self, req: &EvalRequest<'_>) -> Vec<IndexBand> {
        IndexBand::collect_conflict_free(req.max_down, req.max_up, |k| (self.red)(req, k))
    }

    fn any_conflict(&self, req: &EvalRequest<'_>) -> bool {
        (-req.max_down..=req.max_up).any(|k| (self.red)(req, k))
    }

    fn all_conflict(&self, req: &EvalRequest<'_>) -> bool {
        (-req.max_down..=req.max_up).all(|k| (self.red)(req, k))
    }

    fn first_conflict_free(&self, req: &EvalRequest<'_>, dir: ManeuverDirection) -> i32 {
        if !(self.red)(req, 0) {
            return 0;
        }
        let (max_n, sign) = match dir {
            ManeuverDirection::Up => (req.max_up, 1),
            ManeuverDirection::Down => (req.max_down, -1),
        };
        for n in 1..=max_n {
            if !(self.red)(req, sign * n) {
                return n;
            }
        }
        -1
    }
}

/// A context with one Near alert level (cylinder 5 km / 300 m, alerting
/// 60 s, late alerting 90 s) and an ownship flying north at 100 m/s.
pub(crate) fn single_level_context(traffic: Vec<TrafficState>) -> BandsContext {
    let alertor = Alertor::try_new(
        vec![AlertLevel::new(
            BandsRegion::Near,
            Box::new(CylinderDetector::new(5000.0, 300.0)),
            60.0,
            90.0,
        )],
        1,
    )
    .unwrap();
    BandsContext::new(
        TrafficState::new("own", Vect3::ZERO, Vect3::new(0.0, 100.0, 0.0)),
        traffic,
        alertor,
    )
}

/// Head-on intruder 10 km ahead: in cylinder conflict 25 s out.
pub(crate) fn head_on_intruder() -> TrafficState {
    TrafficState::new(
        "head-on",
        Vect3::new(0.0, 10_000.0, 0.0),
        Vect3::new(0.0, -100.0, 0.0),
    )
}

/// Parallel traffic 20 km abeam: never in conflict on its own.
pub(crate) fn crossing_intruder() -> TrafficState {
    TrafficState::new(
        "crossing",
        Vect3::new(20_000.0, 0.0, 0.0),
        Vect3::new(0.0, 100.0, 0.0),
    )
}
