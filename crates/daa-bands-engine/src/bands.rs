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

//! Maneuver guidance bands over one control variable.
//!
//! [`ManeuverBands`] partitions the reachable range of a control variable
//! (track, ground speed, vertical speed, altitude) into colored bands:
//! which maneuvers stay conflict-free, which alert at each severity, and,
//! when every maneuver is in conflict, which constitute a best-effort
//! recovery. Results are cached; any configuration change invalidates the
//! cache and the next query recomputes synchronously.
//!
//! Invalid configurations never fault: every query degrades to an empty or
//! `Unknown` answer until the configuration is fixed.

use crate::context::BandsContext;
use crate::envelope::ControlEnvelope;
use crate::kinematics::{ControlAxis, EvalRequest, ManeuverEvaluator};
use daa_bands_core::numeric::almost_equals;
use daa_bands_core::{Interval, IntervalSet};
use daa_bands_model::{BandsRange, BandsRegion, ColoredValue, ConflictDetector, TrafficState};
use std::fmt;
use tracing::instrument;

/// Validation state of the current cache epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputStatus {
    Unchecked,
    Invalid,
    Valid,
}

/// Colored guidance bands for one control variable, computed lazily
/// against a [`BandsContext`].
///
/// `G` supplies the per-variable kinematics: the ownship's current value
/// on the axis and the integer-maneuver conflict answers.
#[derive(Debug)]
pub struct ManeuverBands<G> {
    pub(crate) envelope: ControlEnvelope,
    pub(crate) recovery: bool,
    pub(crate) generator: G,
    pub(crate) outdated: bool,
    pub(crate) checked: InputStatus,
    pub(crate) peripheral: Vec<Vec<TrafficState>>,
    pub(crate) ranges: Vec<BandsRange>,
    pub(crate) recovery_time: f64,
}

impl<G> ManeuverBands<G> {
    /// A new band object over `[min, max]`, with `relative` bounds framing,
    /// period `modulus` (0 disables wrap), discretization `step`, and
    /// recovery-band synthesis toggled by `recovery`.
    pub fn new(
        min: f64,
        max: f64,
        relative: bool,
        modulus: f64,
        step: f64,
        recovery: bool,
        generator: G,
    ) -> Self {
        Self {
            envelope: ControlEnvelope::new(min, max, relative, modulus, step),
            recovery,
            generator,
            outdated: true,
            checked: InputStatus::Unchecked,
            peripheral: Vec::new(),
            ranges: Vec::new(),
            recovery_time: f64::NAN,
        }
    }

    /// A non-modular band object with absolute bounds.
    pub fn linear(min: f64, max: f64, step: f64, recovery: bool, generator: G) -> Self {
        Self::new(min, max, false, 0.0, step, recovery, generator)
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.envelope.min()
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.envelope.max()
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        self.envelope.is_relative()
    }

    #[inline]
    pub fn modulus(&self) -> f64 {
        self.envelope.modulus()
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.envelope.step()
    }

    #[inline]
    pub fn is_recovery(&self) -> bool {
        self.recovery
    }

    pub fn set_min(&mut self, val: f64) {
        if val != self.envelope.min() {
            self.envelope.set_min(val);
            self.reset();
        }
    }

    pub fn set_max(&mut self, val: f64) {
        if val != self.envelope.max() {
            self.envelope.set_max(val);
            self.reset();
        }
    }

    /// Flips between relative and absolute bounds framing.
    ///
    /// The bounds change meaning, so they are poisoned until both are
    /// re-set; queries degrade in between.
    pub fn set_relative(&mut self, val: bool) {
        if val != self.envelope.is_relative() {
            self.envelope.set_relative(val);
            self.reset();
        }
    }

    /// Sets the period of the control variable; negative values are
    /// ignored.
    pub fn set_modulus(&mut self, val: f64) {
        if val >= 0.0 && val != self.envelope.modulus() {
            self.envelope.set_modulus(val);
            self.reset();
        }
    }

    /// Sets the discretization step; non-positive values are ignored.
    pub fn set_step(&mut self, val: f64) {
        if val > 0.0 && val != self.envelope.step() {
            self.envelope.set_step(val);
            self.reset();
        }
    }

    pub fn set_recovery(&mut self, flag: bool) {
        if flag != self.recovery {
            self.recovery = flag;
            self.reset();
        }
    }

    /// Drops all cached results; the next query recomputes.
    pub fn reset(&mut self) {
        self.outdated = true;
        self.checked = InputStatus::Unchecked;
        self.ranges.clear();
        self.recovery_time = f64::NAN;
    }

    /// Structured rendering of the cached result at the given precision.
    pub fn dump(&self, precision: usize) -> String {
        let intervals = self
            .ranges
            .iter()
            .map(|r| {
                format!(
                    "[{:.p$}, {:.p$}]",
                    r.interval.low(),
                    r.interval.up(),
                    p = precision
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let regions = self
            .ranges
            .iter()
            .map(|r| r.region.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "intervals: ({intervals}); regions: ({regions}); recovery time: {:.p$} [s]",
            self.recovery_time,
            p = precision
        )
    }
}

impl<G: ControlAxis + ManeuverEvaluator> ManeuverBands<G> {
    /// Validates the configuration against the context, memoized per cache
    /// epoch.
    pub fn check_input(&mut self, core: &BandsContext) -> bool {
        if self.checked == InputStatus::Unchecked {
            let valid = core.ownship.is_valid() && {
                let own = self.generator.own_val(&core.ownship);
                self.envelope.validate(own)
            };
            self.checked = if valid {
                InputStatus::Valid
            } else {
                InputStatus::Invalid
            };
        }
        self.checked == InputStatus::Valid
    }

    /// Recomputes the cache if a configuration change invalidated it.
    fn update(&mut self, core: &BandsContext) {
        if !self.outdated {
            return;
        }
        let valid = self.check_input(core);
        let most_severe = core.alertor.most_severe_alert_level();
        // The peripheral list grows to the alertor size and never shrinks.
        if self.peripheral.len() < most_severe {
            self.peripheral.resize(most_severe, Vec::new());
        }
        for list in &mut self.peripheral {
            list.clear();
        }
        if valid {
            for alert_level in 1..=most_severe {
                if core.alertor.level(alert_level).region().is_conflict_band() {
                    let list = self.classify_peripheral(core, alert_level);
                    self.peripheral[alert_level - 1] = list;
                }
            }
            self.compute(core);
        }
        self.outdated = false;
    }

    /// Discards the cache and recomputes immediately.
    pub fn force_compute(&mut self, core: &BandsContext) {
        self.reset();
        self.update(core);
    }

    /// Number of bands.
    pub fn length(&mut self, core: &BandsContext) -> usize {
        self.update(core);
        self.ranges.len()
    }

    /// The `i`-th band's interval; [`Interval::EMPTY`] out of range.
    pub fn interval(&mut self, core: &BandsContext, i: usize) -> Interval {
        if i >= self.length(core) {
            return Interval::EMPTY;
        }
        self.ranges[i].interval
    }

    /// The `i`-th band's region; `Unknown` out of range.
    pub fn region(&mut self, core: &BandsContext, i: usize) -> BandsRegion {
        if i >= self.length(core) {
            return BandsRegion::Unknown;
        }
        self.ranges[i].region
    }

    /// All bands, ordered: the forward segment first, then (for wrapped
    /// modular domains) the upper segment.
    pub fn ranges(&mut self, core: &BandsContext) -> &[BandsRange] {
        self.update(core);
        &self.ranges
    }

    /// Index of the band containing `val`, or `length` when none does.
    ///
    /// A boundary value belongs to a band if the band is a resolution band
    /// (closed on both ends) or the boundary coincides with the domain edge
    /// of a non-circular domain. For modular domains a value near zero is
    /// also matched against its `val ≈ modulus` equivalence class,
    /// preferring a resolution band ending at the modulus.
    pub fn range_of(&mut self, core: &BandsContext, val: f64) -> usize {
        if !self.check_input(core) {
            return self.length(core);
        }
        let val = self.envelope.mod_val(val);
        let own = self.generator.own_val(&core.ownship);
        let min = self.envelope.min_val(own);
        let max = self.envelope.max_val(own);
        let circular = self.envelope.is_circular();
        let modulus = self.envelope.modulus();
        let len = self.length(core);
        let mut zero_pos = None;
        for i in 0..len {
            let band = self.ranges[i];
            let none = band.region.is_resolution_band();
            let lb_close = none || (!circular && almost_equals(band.interval.low(), min));
            let ub_close = none || (!circular && almost_equals(band.interval.up(), max));
            if band.interval.contains(val, lb_close, ub_close) {
                return i;
            }
            if modulus > 0.0 && almost_equals(val, 0.0) {
                if none && almost_equals(band.interval.up(), modulus) {
                    return i;
                }
                if almost_equals(band.interval.low(), 0.0) {
                    zero_pos = Some(i);
                }
            }
        }
        zero_pos.unwrap_or(len)
    }

    /// Time needed to recover from violation: NaN when no alert level
    /// saturated, negative infinity when saturated with no recovery within
    /// the late alerting time, and a finite time otherwise.
    pub fn time_to_recovery(&mut self, core: &BandsContext) -> f64 {
        self.update(core);
        self.recovery_time
    }

    /// Peripheral aircraft at the given 1-based alert level: traffic not
    /// currently in conflict there, but brought into conflict by some
    /// feasible maneuver.
    pub fn peripheral_aircraft(&mut self, core: &BandsContext, alert_level: usize) -> &[TrafficState] {
        self.update(core);
        if alert_level >= 1 && alert_level <= core.alertor.most_severe_alert_level() {
            &self.peripheral[alert_level - 1]
        } else {
            &[]
        }
    }

    /// Returns `true` if some feasible maneuver would bring the ownship
    /// into conflict with `ac` alone, as seen by `detector` within
    /// `alerting_time`.
    pub fn kinematic_conflict(
        &mut self,
        core: &BandsContext,
        ac: &TrafficState,
        detector: &dyn ConflictDetector,
        alerting_time: f64,
    ) -> bool {
        self.check_input(core) && self.maneuver_conflict(core, ac, detector, alerting_time)
    }

    fn classify_peripheral(&self, core: &BandsContext, alert_level: usize) -> Vec<TrafficState> {
        let level = core.alertor.level(alert_level);
        let detector = level.detector();
        let t = level.alerting_time();
        core.traffic
            .iter()
            .filter(|ac| {
                let current = detector.conflict_detection(
                    core.ownship.position(),
                    core.ownship.velocity(),
                    ac.position(),
                    ac.velocity(),
                    0.0,
                    t,
                );
                !current.conflict() && self.maneuver_conflict(core, ac, detector, t)
            })
            .cloned()
            .collect()
    }

    pub(crate) fn maneuver_conflict(
        &self,
        core: &BandsContext,
        ac: &TrafficState,
        detector: &dyn ConflictDetector,
        alerting_time: f64,
    ) -> bool {
        let traffic = std::slice::from_ref(ac);
        let req = self.eval_request(core, detector, None, 0.0, alerting_time, traffic);
        self.generator.any_conflict(&req)
    }

    /// Assembles one evaluation request against the given traffic subset.
    /// The recovery horizon is the initial segment `[0, b]`.
    pub(crate) fn eval_request<'a>(
        &'a self,
        core: &'a BandsContext,
        conflict_det: &'a dyn ConflictDetector,
        recovery_det: Option<&'a dyn ConflictDetector>,
        b: f64,
        t: f64,
        traffic: &'a [TrafficState],
    ) -> EvalRequest<'a> {
        let own = self.generator.own_val(&core.ownship);
        EvalRequest {
            conflict_det,
            recovery_det,
            time_step: self.generator.time_step(&core.ownship),
            b,
            t,
            b2: 0.0,
            t2: b,
            step: self.envelope.step(),
            max_down: self.envelope.max_down(own),
            max_up: self.envelope.max_up(own),
            ownship: &core.ownship,
            traffic,
            criteria_ac: core.criteria_aircraft(),
            epsilon_h: core.params.epsilon_h(),
            epsilon_v: core.params.epsilon_v(),
        }
    }

    /// Conflict-free sub-ranges of the domain against `traffic` on
    /// `[b, t]`.
    pub(crate) fn none_bands(
        &self,
        core: &BandsContext,
        conflict_det: &dyn ConflictDetector,
        recovery_det: Option<&dyn ConflictDetector>,
        b: f64,
        t: f64,
        traffic: &[TrafficState],
    ) -> IntervalSet {
        let req = self.eval_request(core, conflict_det, recovery_det, b, t, traffic);
        let bands = self.generator.conflict_free_bands(&req);
        let own = self.generator.own_val(&core.ownship);
        self.envelope.none_intervals(&bands, own)
    }

    /// None-set of one alert level: conflict-free against the peripheral
    /// aircraft within the alerting time and against the conflict aircraft
    /// within the late alerting time.
    fn compute_none_bands(
        &self,
        core: &BandsContext,
        alert_level: usize,
        conflict_acs: &[TrafficState],
    ) -> IntervalSet {
        let level = core.alertor.level(alert_level);
        let mut noneset = self.none_bands(
            core,
            level.detector(),
            None,
            0.0,
            level.alerting_time(),
            &self.peripheral[alert_level - 1],
        );
        let noneset2 = self.none_bands(
            core,
            level.detector(),
            None,
            0.0,
            level.late_alerting_time(),
            conflict_acs,
        );
        noneset.almost_intersect(&noneset2);
        noneset
    }

    /// Computes the colored bands for all conflict-band alert levels.
    #[instrument(level = "trace", skip_all)]
    fn compute(&mut self, core: &BandsContext) {
        self.recovery_time = f64::NAN;
        let own = self.generator.own_val(&core.ownship);
        let mut none_sets: Vec<IntervalSet> = Vec::new();
        let mut regions: Vec<BandsRegion> = Vec::new();
        let mut recovery = false;
        for alert_level in 1..=core.alertor.most_severe_alert_level() {
            if recovery {
                break;
            }
            let mut region = core.alertor.level(alert_level).region();
            if !region.is_conflict_band() {
                continue;
            }
            let conflict_acs = core.conflict_aircraft(alert_level);
            let noneset = if self.peripheral[alert_level - 1].is_empty() && conflict_acs.is_empty()
            {
                self.envelope.full_domain_set(own)
            } else {
                let mut noneset = self.compute_none_bands(core, alert_level, &conflict_acs);
                if noneset.is_empty()
                    && self.recovery
                    && alert_level == core.alertor.conflict_alert_level()
                {
                    let mut alerting_set = self.peripheral[alert_level - 1].clone();
                    alerting_set.extend_from_slice(&conflict_acs);
                    let (recovery_set, recovery_time) =
                        self.compute_recovery_bands(core, &alerting_set);
                    self.recovery_time = recovery_time;
                    noneset = recovery_set;
                    region = core
                        .alertor
                        .level(core.alertor.last_guidance_level())
                        .region();
                    recovery = true;
                }
                noneset
            };
            none_sets.push(noneset);
            regions.push(region);
        }
        self.color_bands(own, &none_sets, &regions, recovery);
    }

    /// Paints the none-sets into the final band list, most severe level
    /// first.
    fn color_bands(
        &mut self,
        own: f64,
        none_sets: &[IntervalSet],
        regions: &[BandsRegion],
        recovery: bool,
    ) {
        self.ranges.clear();
        if none_sets.is_empty() {
            return;
        }
        let min = self.envelope.min_val(own);
        let max = self.envelope.max_val(own);
        let modulus = self.envelope.modulus();
        let green = if recovery {
            BandsRegion::Recovery
        } else {
            BandsRegion::None
        };
        let top = regions[regions.len() - 1];
        let wrapped = modulus != 0.0 && min > max;

        // Forward segment, plus the upper wrap segment when the modular
        // domain is split.
        let mut l1: Vec<ColoredValue> = Vec::new();
        let mut l2: Vec<ColoredValue> = Vec::new();
        if !wrapped {
            l1.push(ColoredValue::new(min, BandsRegion::Unknown));
            l1.push(ColoredValue::new(max, top));
        } else {
            l1.push(ColoredValue::new(0.0, BandsRegion::Unknown));
            l1.push(ColoredValue::new(max, top));
            l2.push(ColoredValue::new(min, BandsRegion::Unknown));
            l2.push(ColoredValue::new(modulus, top));
        }

        let last_level = if recovery { none_sets.len() - 1 } else { 0 };
        for level in (last_level..none_sets.len()).rev() {
            let lb_color = regions[level];
            let ub_color = if level == last_level {
                green
            } else {
                regions[level - 1]
            };
            for iv in none_sets[level].as_slice() {
                if iv.up() <= max {
                    ColoredValue::insert(&mut l1, *iv, lb_color, ub_color);
                } else {
                    ColoredValue::insert(&mut l2, *iv, lb_color, ub_color);
                }
            }
        }

        ColoredValue::to_bands(&mut self.ranges, &l1);
        if wrapped {
            ColoredValue::to_bands(&mut self.ranges, &l2);
        }
    }
}

impl<G> fmt::Display for ManeuverBands<G> {
    /// Renders the cached result: one band per line, then the recovery
    /// time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for range in &self.ranges {
            writeln!(f, "{range}")?;
        }
        write!(f, "Time to recovery: {:.4} [s]", self.recovery_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{head_on_intruder, single_level_context, ScriptedEvaluator};
    use daa_bands_core::numeric::modulo;
    use daa_bands_model::BandsRegion::{Near, None as NoneRegion, Unknown};

    /// No traffic, relative linear domain: one conflict-free band.
    #[test]
    fn no_traffic_yields_single_none_band() {
        let core = single_level_context(vec![]);
        let mut bands =
            ManeuverBands::new(-10.0, 10.0, true, 0.0, 1.0, false, ScriptedEvaluator::all_green(0.0));
        assert_eq!(bands.length(&core), 1);
        assert_eq!(bands.interval(&core, 0), Interval::new(-10.0, 10.0));
        assert_eq!(bands.region(&core, 0), NoneRegion);
        assert_eq!(bands.range_of(&core, 0.0), 0);
        assert!(bands.time_to_recovery(&core).is_nan());
    }

    /// Circular track domain with one conflict sector.
    #[test]
    fn circular_conflict_sector() {
        let core = single_level_context(vec![head_on_intruder()]);
        let gen = ScriptedEvaluator::new(90.0, |_req, k| {
            let v = modulo(90.0 + f64::from(k), 360.0);
            v > 80.0 && v < 100.0
        });
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        let ranges = bands.ranges(&core).to_vec();
        assert_eq!(
            ranges,
            vec![
                BandsRange::new(Interval::new(0.0, 80.0), NoneRegion),
                BandsRange::new(Interval::new(80.0, 100.0), Near),
                BandsRange::new(Interval::new(100.0, 360.0), NoneRegion),
            ]
        );
        let i = bands.range_of(&core, 90.0);
        assert_eq!(bands.region(&core, i), Near);
        assert!(bands.time_to_recovery(&core).is_nan());
    }

    /// Invalid configuration (absolute framing with min > max): every
    /// query degrades without faulting.
    #[test]
    fn invalid_configuration_degrades_queries() {
        let core = single_level_context(vec![head_on_intruder()]);
        let mut bands =
            ManeuverBands::new(350.0, 10.0, false, 360.0, 1.0, false, ScriptedEvaluator::all_green(90.0));
        assert_eq!(bands.length(&core), 0);
        assert!(bands.interval(&core, 0).is_empty());
        assert_eq!(bands.region(&core, 0), Unknown);
        assert_eq!(bands.range_of(&core, 90.0), 0);
        assert!(bands.time_to_recovery(&core).is_nan());
    }

    /// Relative bounds with modular wrap: the domain splits into two
    /// segments.
    #[test]
    fn wrapped_domain_splits_bands() {
        let core = single_level_context(vec![]);
        let mut bands =
            ManeuverBands::new(-30.0, 30.0, true, 360.0, 1.0, false, ScriptedEvaluator::all_green(5.0));
        let ranges = bands.ranges(&core).to_vec();
        assert_eq!(
            ranges,
            vec![
                BandsRange::new(Interval::new(0.0, 35.0), NoneRegion),
                BandsRange::new(Interval::new(335.0, 360.0), NoneRegion),
            ]
        );
        // Both segments are resolution bands; values on either side of the
        // wrap resolve to their segment.
        assert_eq!(bands.range_of(&core, 20.0), 0);
        assert_eq!(bands.range_of(&core, 350.0), 1);
    }

    /// A wrapped value near zero matches the band ending at the modulus.
    #[test]
    fn range_of_wraps_value_by_modulus() {
        let core = single_level_context(vec![]);
        let mut bands =
            ManeuverBands::new(-30.0, 30.0, true, 360.0, 1.0, false, ScriptedEvaluator::all_green(5.0));
        let i = bands.range_of(&core, 360.0);
        // 360 wraps to 0, matching the forward segment [0, 35].
        assert_eq!(i, 0);
    }

    /// A conflict band starting at zero catches the wrapped zero value
    /// through the fallback class, despite its open lower boundary.
    #[test]
    fn range_of_zero_falls_back_to_conflict_band_at_origin() {
        let core = single_level_context(vec![head_on_intruder()]);
        // Conflict sector crossing the wrap: red below 20 and above 340.
        let gen = ScriptedEvaluator::new(90.0, |_req, k| {
            let v = modulo(90.0 + f64::from(k), 360.0);
            v < 20.0 || v > 340.0
        });
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        let i = bands.range_of(&core, 0.0);
        assert_eq!(bands.region(&core, i), Near);
        assert_eq!(bands.interval(&core, i).low(), 0.0);
    }

    /// Traffic in current conflict is classified as conflict aircraft, not
    /// peripheral; maneuver-only threats are peripheral.
    #[test]
    fn peripheral_classification() {
        let in_conflict = head_on_intruder();
        // Far abeam: no current conflict, but scripted as reachable by a
        // maneuver.
        let reachable = crate::testutil::crossing_intruder();
        let core = single_level_context(vec![in_conflict.clone(), reachable.clone()]);
        let gen = ScriptedEvaluator::new(90.0, move |req, k| {
            k == 5 && req.traffic.iter().any(|ac| ac.id() == "crossing")
        });
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        let peripheral = bands.peripheral_aircraft(&core, 1).to_vec();
        assert_eq!(peripheral, vec![reachable]);
        assert!(!peripheral.contains(&in_conflict));
        // Out-of-range levels answer with an empty list.
        assert!(bands.peripheral_aircraft(&core, 7).is_empty());
    }

    /// Mutating a parameter to its current value keeps the cache; a real
    /// change invalidates it.
    #[test]
    fn cache_invalidation_on_change_only() {
        let core = single_level_context(vec![]);
        let mut bands =
            ManeuverBands::new(-10.0, 10.0, true, 0.0, 1.0, false, ScriptedEvaluator::all_green(0.0));
        bands.force_compute(&core);
        assert!(!bands.outdated);

        bands.set_step(1.0);
        bands.set_min(-10.0);
        bands.set_recovery(false);
        assert!(!bands.outdated);

        bands.set_step(2.0);
        assert!(bands.outdated);
        assert_eq!(bands.length(&core), 1);
        assert!(!bands.outdated);
    }

    /// Ignored mutator values do not reset the cache either.
    #[test]
    fn out_of_domain_mutations_ignored() {
        let core = single_level_context(vec![]);
        let mut bands =
            ManeuverBands::new(-10.0, 10.0, true, 0.0, 1.0, false, ScriptedEvaluator::all_green(0.0));
        bands.force_compute(&core);
        bands.set_step(0.0);
        bands.set_modulus(-1.0);
        assert!(!bands.outdated);
        assert_eq!(bands.step(), 1.0);
        assert_eq!(bands.modulus(), 0.0);
    }

    /// Flipping the framing poisons the bounds until both are re-set.
    #[test]
    fn set_relative_poisons_bounds() {
        let core = single_level_context(vec![]);
        let mut bands =
            ManeuverBands::new(-10.0, 10.0, true, 0.0, 1.0, false, ScriptedEvaluator::all_green(0.0));
        bands.set_relative(false);
        assert!(bands.min().is_nan());
        assert!(bands.max().is_nan());
        assert_eq!(bands.length(&core), 0);

        bands.set_min(-20.0);
        bands.set_max(20.0);
        assert_eq!(bands.length(&core), 1);
        assert_eq!(bands.interval(&core, 0), Interval::new(-20.0, 20.0));
    }

    /// Two consecutive recomputations with identical inputs agree exactly.
    #[test]
    fn force_compute_is_idempotent() {
        let core = single_level_context(vec![head_on_intruder()]);
        let gen = ScriptedEvaluator::new(90.0, |_req, k| {
            let v = modulo(90.0 + f64::from(k), 360.0);
            v > 80.0 && v < 100.0
        });
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        bands.force_compute(&core);
        let first = (bands.ranges.clone(), bands.recovery_time);
        bands.force_compute(&core);
        assert_eq!(bands.ranges, first.0);
        assert!(bands.recovery_time.is_nan() && first.1.is_nan());
    }

    /// Bands cover the domain without overlap and with distinct adjacent
    /// colors.
    #[test]
    fn ranges_form_ordered_distinct_cover() {
        let core = single_level_context(vec![head_on_intruder()]);
        let gen = ScriptedEvaluator::new(90.0, |_req, k| {
            let v = modulo(90.0 + f64::from(k), 360.0);
            (v > 80.0 && v < 100.0) || (v > 200.0 && v < 220.0)
        });
        let mut bands = ManeuverBands::new(0.0, 360.0, false, 360.0, 1.0, false, gen);
        let ranges = bands.ranges(&core).to_vec();
        assert_eq!(ranges.first().unwrap().interval.low(), 0.0);
        assert_eq!(ranges.last().unwrap().interval.up(), 360.0);
        for w in ranges.windows(2) {
            assert_eq!(w[0].interval.up(), w[1].interval.low());
            assert_ne!(w[0].region, w[1].region);
        }
    }

    #[test]
    fn display_and_dump_render_cached_state() {
        let core = single_level_context(vec![]);
        let mut bands =
            ManeuverBands::new(-10.0, 10.0, true, 0.0, 1.0, false, ScriptedEvaluator::all_green(0.0));
        bands.force_compute(&core);
        let text = bands.to_string();
        assert!(text.contains("[-10.0000, 10.0000] NONE"));
        assert!(text.contains("Time to recovery: NaN [s]"));
        let dump = bands.dump(2);
        assert!(dump.contains("[-10.00, 10.00]"));
        assert!(dump.contains("NONE"));
    }
}
