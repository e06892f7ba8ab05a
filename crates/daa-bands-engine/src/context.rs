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

//! The enclosing context a band computation runs against: ownship,
//! traffic, alert schema, and tuning parameters.
//!
//! The context is owned by the caller and must not change while a band
//! query is executing; the engine never mutates it.

use daa_bands_model::{Alertor, TrafficState};
use serde::{Deserialize, Serialize};

/// Tuning parameters of the band engine.
///
/// Setters silently ignore out-of-domain values, leaving the previous
/// (always valid) value in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContextParams {
    epsilon_h: i32,
    epsilon_v: i32,
    min_horizontal_recovery: f64,
    min_vertical_recovery: f64,
    ca_bands: bool,
    ca_factor: f64,
    recovery_stability_time: f64,
}

impl Default for ContextParams {
    fn default() -> Self {
        Self {
            epsilon_h: 0,
            epsilon_v: 0,
            // 0.5 nmi / 450 ft.
            min_horizontal_recovery: 926.0,
            min_vertical_recovery: 137.16,
            ca_bands: true,
            ca_factor: 0.2,
            recovery_stability_time: 2.0,
        }
    }
}

impl ContextParams {
    /// Horizontal coordination direction, in `{-1, 0, 1}`.
    #[inline]
    pub fn epsilon_h(&self) -> i32 {
        self.epsilon_h
    }

    /// Vertical coordination direction, in `{-1, 0, 1}`.
    #[inline]
    pub fn epsilon_v(&self) -> i32 {
        self.epsilon_v
    }

    /// Initial horizontal radius of the recovery cylinder, meters.
    #[inline]
    pub fn min_horizontal_recovery(&self) -> f64 {
        self.min_horizontal_recovery
    }

    /// Initial vertical half-height of the recovery cylinder, meters.
    #[inline]
    pub fn min_vertical_recovery(&self) -> f64 {
        self.min_vertical_recovery
    }

    /// Whether the recovery cylinder may shrink below the configured size
    /// toward collision-avoidance scale.
    #[inline]
    pub fn ca_bands(&self) -> bool {
        self.ca_bands
    }

    /// Per-iteration shrink factor of the recovery cylinder, in `(0, 1)`.
    #[inline]
    pub fn ca_factor(&self) -> f64 {
        self.ca_factor
    }

    /// Margin added to the earliest recovery time, seconds.
    #[inline]
    pub fn recovery_stability_time(&self) -> f64 {
        self.recovery_stability_time
    }

    #[inline]
    pub fn set_epsilon_h(&mut self, val: i32) {
        if val.abs() <= 1 {
            self.epsilon_h = val;
        }
    }

    #[inline]
    pub fn set_epsilon_v(&mut self, val: i32) {
        if val.abs() <= 1 {
            self.epsilon_v = val;
        }
    }

    #[inline]
    pub fn set_min_horizontal_recovery(&mut self, val: f64) {
        if val >= 0.0 && val.is_finite() {
            self.min_horizontal_recovery = val;
        }
    }

    #[inline]
    pub fn set_min_vertical_recovery(&mut self, val: f64) {
        if val >= 0.0 && val.is_finite() {
            self.min_vertical_recovery = val;
        }
    }

    #[inline]
    pub fn set_ca_bands(&mut self, val: bool) {
        self.ca_bands = val;
    }

    #[inline]
    pub fn set_ca_factor(&mut self, val: f64) {
        if val > 0.0 && val < 1.0 {
            self.ca_factor = val;
        }
    }

    #[inline]
    pub fn set_recovery_stability_time(&mut self, val: f64) {
        if val >= 0.0 && val.is_finite() {
            self.recovery_stability_time = val;
        }
    }
}

/// Ownship, traffic and configuration a band object computes against.
#[derive(Debug)]
pub struct BandsContext {
    pub ownship: TrafficState,
    pub traffic: Vec<TrafficState>,
    pub alertor: Alertor,
    pub params: ContextParams,
    /// Id of the aircraft used for maneuver-coordination criteria.
    pub criteria_reference: Option<String>,
    /// Id of the aircraft recovery maneuvers are coordinated with.
    pub recovery_reference: Option<String>,
}

impl BandsContext {
    pub fn new(ownship: TrafficState, traffic: Vec<TrafficState>, alertor: Alertor) -> Self {
        Self {
            ownship,
            traffic,
            alertor,
            params: ContextParams::default(),
            criteria_reference: None,
            recovery_reference: None,
        }
    }

    fn resolve(&self, reference: &Option<String>) -> Option<&TrafficState> {
        reference
            .as_deref()
            .and_then(|id| self.traffic.iter().find(|ac| ac.id() == id))
    }

    /// The criteria aircraft, when configured and present in the traffic
    /// list.
    #[inline]
    pub fn criteria_aircraft(&self) -> Option<&TrafficState> {
        self.resolve(&self.criteria_reference)
    }

    /// The recovery-coordination aircraft, when configured and present.
    #[inline]
    pub fn recovery_aircraft(&self) -> Option<&TrafficState> {
        self.resolve(&self.recovery_reference)
    }

    /// Traffic whose level-`alert_level` conflict starts within that
    /// level's alerting time. Out-of-range levels answer with an empty
    /// list.
    pub fn conflict_aircraft(&self, alert_level: usize) -> Vec<TrafficState> {
        if alert_level < 1 || alert_level > self.alertor.most_severe_alert_level() {
            return Vec::new();
        }
        let level = self.alertor.level(alert_level);
        self.traffic
            .iter()
            .filter(|ac| {
                level
                    .detector()
                    .conflict_detection(
                        self.ownship.position(),
                        self.ownship.velocity(),
                        ac.position(),
                        ac.velocity(),
                        0.0,
                        level.alerting_time(),
                    )
                    .conflict()
            })
            .cloned()
            .collect()
    }
}
