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

//! Configuration errors of the domain model.

use std::fmt::Display;

/// The alertor was constructed with no alert levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyAlertorError;

impl Display for EmptyAlertorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "An alertor requires at least one alert level")
    }
}

impl std::error::Error for EmptyAlertorError {}

/// The configured conflict alert level does not name an existing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConflictLevelOutOfRangeError {
    conflict_level: usize,
    size: usize,
}

impl ConflictLevelOutOfRangeError {
    #[inline]
    pub fn new(conflict_level: usize, size: usize) -> Self {
        Self {
            conflict_level,
            size,
        }
    }

    #[inline]
    pub fn conflict_level(&self) -> usize {
        self.conflict_level
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Display for ConflictLevelOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Conflict alert level {} is outside 1..={}",
            self.conflict_level, self.size
        )
    }
}

impl std::error::Error for ConflictLevelOutOfRangeError {}

/// A level's alerting times are unusable: non-positive, non-finite, or the
/// late alerting time precedes the alerting time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertingTimeOrderError {
    level: usize,
    alerting_time: f64,
    late_alerting_time: f64,
}

impl AlertingTimeOrderError {
    #[inline]
    pub fn new(level: usize, alerting_time: f64, late_alerting_time: f64) -> Self {
        Self {
            level,
            alerting_time,
            late_alerting_time,
        }
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn alerting_time(&self) -> f64 {
        self.alerting_time
    }

    #[inline]
    pub fn late_alerting_time(&self) -> f64 {
        self.late_alerting_time
    }
}

impl Display for AlertingTimeOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Alert level {} has unusable alerting times: {} / {}",
            self.level, self.alerting_time, self.late_alerting_time
        )
    }
}

impl std::error::Error for AlertingTimeOrderError {}

/// The encounter generator was configured with distribution parameters no
/// sampler accepts: a non-finite ownship speed, or a negative or
/// non-finite spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncounterGenConfigError {
    ownship_speed: f64,
    speed_std: f64,
    altitude_spread: f64,
}

impl EncounterGenConfigError {
    #[inline]
    pub fn new(ownship_speed: f64, speed_std: f64, altitude_spread: f64) -> Self {
        Self {
            ownship_speed,
            speed_std,
            altitude_spread,
        }
    }

    #[inline]
    pub fn ownship_speed(&self) -> f64 {
        self.ownship_speed
    }

    #[inline]
    pub fn speed_std(&self) -> f64 {
        self.speed_std
    }

    #[inline]
    pub fn altitude_spread(&self) -> f64 {
        self.altitude_spread
    }
}

impl Display for EncounterGenConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Encounter generator has unusable distribution parameters: \
             ownship speed {}, speed std {}, altitude spread {}",
            self.ownship_speed, self.speed_std, self.altitude_spread
        )
    }
}

impl std::error::Error for EncounterGenConfigError {}

/// Any error produced while validating an alertor configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertorConfigError {
    Empty(EmptyAlertorError),
    ConflictLevelOutOfRange(ConflictLevelOutOfRangeError),
    AlertingTimeOrder(AlertingTimeOrderError),
}

impl Display for AlertorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertorConfigError::Empty(e) => e.fmt(f),
            AlertorConfigError::ConflictLevelOutOfRange(e) => e.fmt(f),
            AlertorConfigError::AlertingTimeOrder(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for AlertorConfigError {}

impl From<EmptyAlertorError> for AlertorConfigError {
    fn from(e: EmptyAlertorError) -> Self {
        AlertorConfigError::Empty(e)
    }
}

impl From<ConflictLevelOutOfRangeError> for AlertorConfigError {
    fn from(e: ConflictLevelOutOfRangeError) -> Self {
        AlertorConfigError::ConflictLevelOutOfRange(e)
    }
}

impl From<AlertingTimeOrderError> for AlertorConfigError {
    fn from(e: AlertingTimeOrderError) -> Self {
        AlertorConfigError::AlertingTimeOrder(e)
    }
}
