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

//! Alert-level configuration.
//!
//! Alert levels are ordered by ascending severity and addressed with
//! 1-based indices throughout, matching how the guidance literature counts
//! them. Each level carries the region it paints, the detector that defines
//! loss of separation at that severity, and its alerting-time pair.

use crate::detection::ConflictDetector;
use crate::err::{
    AlertingTimeOrderError, AlertorConfigError, ConflictLevelOutOfRangeError, EmptyAlertorError,
};
use crate::region::BandsRegion;

/// One severity tier of the alert schema.
#[derive(Debug)]
pub struct AlertLevel {
    region: BandsRegion,
    detector: Box<dyn ConflictDetector>,
    alerting_time: f64,
    late_alerting_time: f64,
}

impl AlertLevel {
    #[inline]
    pub fn new(
        region: BandsRegion,
        detector: Box<dyn ConflictDetector>,
        alerting_time: f64,
        late_alerting_time: f64,
    ) -> Self {
        Self {
            region,
            detector,
            alerting_time,
            late_alerting_time,
        }
    }

    #[inline]
    pub fn region(&self) -> BandsRegion {
        self.region
    }

    #[inline]
    pub fn detector(&self) -> &dyn ConflictDetector {
        self.detector.as_ref()
    }

    /// Horizon, in seconds, within which this level alerts.
    #[inline]
    pub fn alerting_time(&self) -> f64 {
        self.alerting_time
    }

    /// Extended horizon used for conflict aircraft and recovery, seconds.
    #[inline]
    pub fn late_alerting_time(&self) -> f64 {
        self.late_alerting_time
    }
}

/// The ordered alert schema consumed by the band engine.
#[derive(Debug)]
pub struct Alertor {
    levels: Vec<AlertLevel>,
    conflict_level: usize,
}

impl Alertor {
    /// Validates and builds an alertor.
    ///
    /// `conflict_level` is the 1-based level at which saturation triggers
    /// recovery-band synthesis.
    pub fn try_new(
        levels: Vec<AlertLevel>,
        conflict_level: usize,
    ) -> Result<Self, AlertorConfigError> {
        if levels.is_empty() {
            return Err(EmptyAlertorError.into());
        }
        if conflict_level < 1 || conflict_level > levels.len() {
            return Err(ConflictLevelOutOfRangeError::new(conflict_level, levels.len()).into());
        }
        for (i, level) in levels.iter().enumerate() {
            let ok = level.alerting_time > 0.0
                && level.alerting_time.is_finite()
                && level.late_alerting_time.is_finite()
                && level.alerting_time <= level.late_alerting_time;
            if !ok {
                return Err(AlertingTimeOrderError::new(
                    i + 1,
                    level.alerting_time,
                    level.late_alerting_time,
                )
                .into());
            }
        }
        Ok(Self {
            levels,
            conflict_level,
        })
    }

    /// Number of levels; also the index of the most severe one.
    #[inline]
    pub fn most_severe_alert_level(&self) -> usize {
        self.levels.len()
    }

    /// The 1-based level whose saturation triggers recovery.
    #[inline]
    pub fn conflict_alert_level(&self) -> usize {
        self.conflict_level
    }

    /// The most severe level that paints a conflict band; falls back to the
    /// most severe level when none does.
    pub fn last_guidance_level(&self) -> usize {
        self.levels
            .iter()
            .rposition(|l| l.region().is_conflict_band())
            .map(|i| i + 1)
            .unwrap_or_else(|| self.most_severe_alert_level())
    }

    /// The level at the given 1-based index.
    ///
    /// Requires `1 <= alert_level <= most_severe_alert_level()`; callers
    /// taking an unvalidated level must bounds-check first.
    #[inline]
    pub fn level(&self, alert_level: usize) -> &AlertLevel {
        debug_assert!(alert_level >= 1 && alert_level <= self.levels.len());
        &self.levels[alert_level - 1]
    }
}
