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

//! Recovery-band synthesis.
//!
//! Invoked when the conflict alert level saturates: no maneuver is
//! conflict-free. The engine then looks for the earliest time from which a
//! maneuver clears the conflict detector while staying outside a recovery
//! cylinder until then. If even that fails, the cylinder shrinks
//! geometrically toward the near mid-air collision size; below that size
//! nothing can escape and the recovery time is reported as negative
//! infinity.

use crate::bands::ManeuverBands;
use crate::context::BandsContext;
use crate::kinematics::{ControlAxis, ManeuverEvaluator};
use daa_bands_core::IntervalSet;
use daa_bands_model::{CylinderDetector, TrafficState, NMAC_D, NMAC_H};
use tracing::{instrument, trace};

impl<G: ControlAxis + ManeuverEvaluator> ManeuverBands<G> {
    /// Computes recovery bands against `alerting_set`, returning the
    /// recovery none-set and the recovery time.
    ///
    /// The recovery time is negative infinity when no recovery exists
    /// within the late alerting time of the conflict alert level.
    #[instrument(level = "trace", skip_all)]
    pub(crate) fn compute_recovery_bands(
        &self,
        core: &BandsContext,
        alerting_set: &[TrafficState],
    ) -> (IntervalSet, f64) {
        let mut recovery_time = f64::NEG_INFINITY;
        let recovery_level = core.alertor.conflict_alert_level();
        let level = core.alertor.level(recovery_level);
        let detector = level.detector();
        let t = level.late_alerting_time();

        // If the NMAC cylinder itself is inescapable, there is nothing to
        // search for.
        let nmac = CylinderDetector::new(NMAC_D, NMAC_H);
        let mut noneset = self.none_bands(core, &nmac, None, 0.0, t, alerting_set);
        if noneset.is_empty() {
            return (noneset, recovery_time);
        }

        let mut cylinder = CylinderDetector::new(
            core.params.min_horizontal_recovery(),
            core.params.min_vertical_recovery(),
        );
        let factor = 1.0 - core.params.ca_factor();
        while cylinder.horizontal_separation() > NMAC_D
            || cylinder.vertical_separation() > NMAC_H
        {
            noneset = self.none_bands(core, &cylinder, None, 0.0, t, alerting_set);
            let mut solid_red = noneset.is_empty();
            if solid_red && !core.params.ca_bands() {
                return (noneset, recovery_time);
            }
            if !solid_red {
                // Bisect the earliest start time from which a maneuver
                // clears the conflict detector while avoiding the recovery
                // cylinder until then.
                let mut pivot_red = 0.0;
                let mut pivot_green = t + 1.0;
                let mut pivot = pivot_green - 1.0;
                while pivot_green - pivot_red > 0.5 {
                    noneset = self.none_bands(
                        core,
                        detector,
                        Some(&cylinder),
                        pivot,
                        t,
                        alerting_set,
                    );
                    if noneset.is_empty() {
                        pivot_red = pivot;
                    } else {
                        pivot_green = pivot;
                    }
                    pivot = (pivot_red + pivot_green) / 2.0;
                }
                recovery_time = if pivot_green <= t {
                    t.min(pivot_green + core.params.recovery_stability_time())
                } else {
                    pivot_red
                };
                noneset = self.none_bands(
                    core,
                    detector,
                    Some(&cylinder),
                    recovery_time,
                    t,
                    alerting_set,
                );
                solid_red = noneset.is_empty();
                if solid_red {
                    recovery_time = f64::NEG_INFINITY;
                }
                if !solid_red || !core.params.ca_bands() {
                    return (noneset, recovery_time);
                }
            }
            cylinder.set_horizontal_separation(cylinder.horizontal_separation() * factor);
            cylinder.set_vertical_separation(cylinder.vertical_separation() * factor);
            trace!(
                d = cylinder.horizontal_separation(),
                h = cylinder.vertical_separation(),
                "shrinking recovery cylinder"
            );
        }
        (noneset, recovery_time)
    }
}

#[cfg(test)]
mod tests {
    use crate::bands::ManeuverBands;
    use crate::context::BandsContext;
    use crate::instantaneous::InstantaneousEvaluator;
    use daa_bands_core::geom::Vect3;
    use daa_bands_model::{
        AlertLevel, Alertor, BandsRegion, CylinderDetector, TrafficState, NMAC_D, NMAC_H,
    };
    use std::f64::consts::{PI, TAU};

    const STEP: f64 = PI / 36.0; // 5 degrees

    fn track_bands(recovery: bool) -> ManeuverBands<InstantaneousEvaluator> {
        ManeuverBands::new(
            0.0,
            TAU,
            false,
            TAU,
            STEP,
            recovery,
            InstantaneousEvaluator::track(),
        )
    }

    fn context(traffic: Vec<TrafficState>) -> BandsContext {
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

    /// Intruder already inside the separation cylinder: every heading is
    /// red, recovery finds a finite escape time.
    #[test]
    fn saturated_conflict_produces_recovery_bands() {
        let intruder = TrafficState::new(
            "intruder",
            Vect3::new(0.0, 2000.0, 0.0),
            Vect3::new(0.0, -100.0, 0.0),
        );
        let core = context(vec![intruder]);
        let mut bands = track_bands(true);

        let ttr = bands.time_to_recovery(&core);
        assert!(ttr.is_finite());
        assert!(ttr > 0.0);
        assert!(ttr <= 90.0);
        // The escape consists of turning hard while the geometry clears;
        // convergence lands near the 40 s mark for this encounter.
        assert!((30.0..50.0).contains(&ttr), "recovery time {ttr}");

        let ranges = bands.ranges(&core).to_vec();
        assert!(ranges.iter().any(|r| r.region == BandsRegion::Recovery));
        assert!(ranges.iter().any(|r| r.region == BandsRegion::Near));
    }

    /// Without recovery enabled the same encounter reports saturation
    /// only: no recovery time, fully red ranges.
    #[test]
    fn saturation_without_recovery_paints_solid_conflict() {
        let intruder = TrafficState::new(
            "intruder",
            Vect3::new(0.0, 2000.0, 0.0),
            Vect3::new(0.0, -100.0, 0.0),
        );
        let core = context(vec![intruder]);
        let mut bands = track_bands(false);
        assert!(bands.time_to_recovery(&core).is_nan());
        let ranges = bands.ranges(&core).to_vec();
        assert!(!ranges.is_empty());
        assert!(ranges.iter().all(|r| r.region == BandsRegion::Near));
    }

    /// Intruder inside the NMAC cylinder on a matched course: no maneuver
    /// escapes, recovery reports negative infinity.
    #[test]
    fn inescapable_nmac_reports_negative_infinity() {
        let intruder = TrafficState::new(
            "intruder",
            Vect3::new(100.0, 0.0, 0.0),
            Vect3::new(0.0, 100.0, 0.0),
        );
        let core = context(vec![intruder]);
        let mut bands = track_bands(true);
        assert_eq!(bands.time_to_recovery(&core), f64::NEG_INFINITY);
        let ranges = bands.ranges(&core).to_vec();
        assert!(ranges.iter().all(|r| r.region != BandsRegion::None));
    }

    /// A recovery cylinder configured at (or below) NMAC size skips the
    /// shrink loop entirely and keeps the NMAC-probe answer.
    #[test]
    fn recovery_cylinder_at_nmac_size_skips_search() {
        let intruder = TrafficState::new(
            "intruder",
            Vect3::new(0.0, 2000.0, 0.0),
            Vect3::new(0.0, -100.0, 0.0),
        );
        let mut core = context(vec![intruder]);
        core.params.set_min_horizontal_recovery(NMAC_D);
        core.params.set_min_vertical_recovery(NMAC_H);
        let mut bands = track_bands(true);
        assert_eq!(bands.time_to_recovery(&core), f64::NEG_INFINITY);
        // The NMAC probe found escapes, so the level's none-set is not
        // empty even though no recovery time exists.
        let ranges = bands.ranges(&core).to_vec();
        assert!(ranges.iter().any(|r| r.region == BandsRegion::Recovery));
    }
}
