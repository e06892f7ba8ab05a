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

//! Resolution values and the last time to maneuver.

use crate::bands::ManeuverBands;
use crate::context::BandsContext;
use crate::kinematics::{ControlAxis, EvalRequest, ManeuverDirection, ManeuverEvaluator};
use daa_bands_model::TrafficState;

impl<G: ControlAxis + ManeuverEvaluator> ManeuverBands<G> {
    /// The nearest conflict-free value of the control variable in the
    /// given direction, evaluated at the conflict alert level.
    ///
    /// Returns NaN when the current trajectory is already conflict-free
    /// (or the configuration is invalid), and infinity with the
    /// direction's sign when no resolution exists that way.
    pub fn compute_resolution(&mut self, core: &BandsContext, dir: ManeuverDirection) -> f64 {
        if !self.check_input(core) {
            return f64::NAN;
        }
        let conflict_level = core.alertor.conflict_alert_level();
        let level = core.alertor.level(conflict_level);
        let req = self.eval_request(
            core,
            level.detector(),
            None,
            0.0,
            level.alerting_time(),
            &core.traffic,
        );
        let ires = self.generator.first_conflict_free(&req, dir);
        if ires == 0 {
            f64::NAN
        } else if ires < 0 {
            dir.sign() * f64::INFINITY
        } else {
            let own = self.generator.own_val(&core.ownship);
            self.envelope
                .mod_val(own + dir.sign() * f64::from(ires) * self.envelope.step())
        }
    }

    /// Last time, in seconds, at which the ownship can still maneuver out
    /// of its conflict with `ac`, at the conflict alert level.
    ///
    /// Returns NaN when there is no conflict with `ac` within the late
    /// alerting time, and negative infinity when no time to maneuver is
    /// left.
    pub fn last_time_to_maneuver(&mut self, core: &BandsContext, ac: &TrafficState) -> f64 {
        if !self.check_input(core) {
            return f64::NAN;
        }
        let conflict_level = core.alertor.conflict_alert_level();
        let level = core.alertor.level(conflict_level);
        let detector = level.detector();
        let t = level.late_alerting_time();
        let current = detector.conflict_detection(
            core.ownship.position(),
            core.ownship.velocity(),
            ac.position(),
            ac.velocity(),
            0.0,
            t,
        );
        if !current.conflict() {
            return f64::NAN;
        }
        let mut pivot_red = current.time_in();
        if pivot_red == 0.0 {
            return f64::NEG_INFINITY;
        }
        let mut pivot_green = 0.0;
        let mut pivot = pivot_green;
        while pivot_red - pivot_green > 0.5 {
            // Project both aircraft to the candidate decision time and ask
            // whether every maneuver from there is red.
            let ownship = core.ownship.linear_projection(pivot);
            let intruder = ac.linear_projection(pivot);
            let traffic = [intruder];
            let own = self.generator.own_val(&ownship);
            let req = EvalRequest {
                conflict_det: detector,
                recovery_det: None,
                time_step: self.generator.time_step(&ownship),
                b: 0.0,
                t,
                b2: 0.0,
                t2: 0.0,
                step: self.envelope.step(),
                max_down: self.envelope.max_down(own),
                max_up: self.envelope.max_up(own),
                ownship: &ownship,
                traffic: &traffic,
                criteria_ac: core.criteria_aircraft(),
                epsilon_h: 0,
                epsilon_v: 0,
            };
            if self.generator.all_conflict(&req) {
                pivot_red = pivot;
            } else {
                pivot_green = pivot;
            }
            pivot = (pivot_red + pivot_green) / 2.0;
        }
        if pivot_green == 0.0 {
            f64::NEG_INFINITY
        } else {
            pivot_green
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bands::ManeuverBands;
    use crate::kinematics::ManeuverDirection;
    use crate::testutil::{head_on_intruder, single_level_context, ScriptedEvaluator};
    use daa_bands_core::geom::Vect3;
    use daa_bands_core::numeric::modulo;
    use daa_bands_model::TrafficState;

    fn sector_bands() -> ManeuverBands<ScriptedEvaluator> {
        // Conflict for tracks strictly inside (80, 100) around own 90.
        let gen = ScriptedEvaluator::new(90.0, |_req, k| {
            let v = modulo(90.0 + f64::from(k), 360.0);
            v > 80.0 && v < 100.0
        });
        ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen)
    }

    #[test]
    fn resolution_escapes_conflict_sector_both_ways() {
        let core = single_level_context(vec![head_on_intruder()]);
        let mut bands = sector_bands();
        let up = bands.compute_resolution(&core, ManeuverDirection::Up);
        let down = bands.compute_resolution(&core, ManeuverDirection::Down);
        assert_eq!(up, 100.0);
        assert_eq!(down, 80.0);
    }

    #[test]
    fn resolution_is_nan_when_already_clear() {
        let core = single_level_context(vec![head_on_intruder()]);
        let gen = ScriptedEvaluator::all_green(90.0);
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        assert!(bands
            .compute_resolution(&core, ManeuverDirection::Up)
            .is_nan());
    }

    #[test]
    fn resolution_saturates_to_signed_infinity() {
        let core = single_level_context(vec![head_on_intruder()]);
        let gen = ScriptedEvaluator::new(90.0, |_req, _k| true);
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        assert_eq!(
            bands.compute_resolution(&core, ManeuverDirection::Up),
            f64::INFINITY
        );
        assert_eq!(
            bands.compute_resolution(&core, ManeuverDirection::Down),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn resolution_is_nan_on_invalid_configuration() {
        let core = single_level_context(vec![head_on_intruder()]);
        let gen = ScriptedEvaluator::all_green(90.0);
        let mut bands = ManeuverBands::new(350.0, 10.0, false, 360.0, 1.0, false, gen);
        assert!(bands
            .compute_resolution(&core, ManeuverDirection::Up)
            .is_nan());
    }

    #[test]
    fn resolution_wraps_across_the_modulus() {
        let core = single_level_context(vec![head_on_intruder()]);
        // Red from 300 up to the wrap at 10, around own value 355.
        let gen = ScriptedEvaluator::new(355.0, |_req, k| {
            let v = modulo(355.0 + f64::from(k), 360.0);
            v > 300.0 || v < 10.0
        });
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        let up = bands.compute_resolution(&core, ManeuverDirection::Up);
        assert_eq!(up, 10.0);
    }

    #[test]
    fn last_time_to_maneuver_bisects_decision_time() {
        let intruder = head_on_intruder();
        let core = single_level_context(vec![intruder.clone()]);
        // All maneuvers become red once the projected separation drops
        // below 6 km (which happens 20 s in for a 200 m/s closure from
        // 10 km).
        let gen = ScriptedEvaluator::new(90.0, |req, _k| {
            let own_y = req.ownship.position().y;
            let intr_y = req.traffic[0].position().y;
            (intr_y - own_y) < 6000.0
        });
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        let ltm = bands.last_time_to_maneuver(&core, &intruder);
        assert!((19.0..=20.0).contains(&ltm), "last time {ltm}");
    }

    #[test]
    fn last_time_is_nan_without_conflict() {
        let far = TrafficState::new(
            "far",
            Vect3::new(100_000.0, 0.0, 0.0),
            Vect3::new(0.0, 100.0, 0.0),
        );
        let core = single_level_context(vec![far.clone()]);
        let mut bands = sector_bands();
        assert!(bands.last_time_to_maneuver(&core, &far).is_nan());
    }

    #[test]
    fn last_time_is_negative_infinity_when_already_in_conflict() {
        // Inside the separation cylinder from the start.
        let inside = TrafficState::new(
            "inside",
            Vect3::new(1000.0, 0.0, 0.0),
            Vect3::new(0.0, 100.0, 0.0),
        );
        let core = single_level_context(vec![inside.clone()]);
        let mut bands = sector_bands();
        assert_eq!(
            bands.last_time_to_maneuver(&core, &inside),
            f64::NEG_INFINITY
        );
    }
}
