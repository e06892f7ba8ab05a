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

//! Seeded random encounter generation for benches and randomized tests.

use crate::err::EncounterGenConfigError;
use crate::traffic::TrafficState;
use daa_bands_core::geom::Vect3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::f64::consts::{PI, TAU};

/// Parameters of the encounter generator.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterGenConfig {
    /// Number of traffic aircraft per encounter.
    pub traffic_count: usize,
    /// Ownship ground speed, m/s.
    pub ownship_speed: f64,
    /// Mean initial horizontal range of traffic from the ownship, m.
    pub range_mean: f64,
    /// Standard deviation of traffic ground speed, m/s.
    pub speed_std: f64,
    /// Traffic altitude offset is drawn uniformly from ± this value, m.
    pub altitude_spread: f64,
    /// RNG seed; identical seeds reproduce identical encounters.
    pub seed: u64,
}

impl Default for EncounterGenConfig {
    fn default() -> Self {
        Self {
            traffic_count: 4,
            ownship_speed: 150.0,
            range_mean: 15_000.0,
            speed_std: 30.0,
            altitude_spread: 250.0,
            seed: 0x00DA_AB05,
        }
    }
}

/// Produces ownship/traffic encounters from a seeded RNG.
#[derive(Debug)]
pub struct EncounterGenerator {
    config: EncounterGenConfig,
    rng: SmallRng,
    speed: Normal<f64>,
    next_id: u64,
}

impl EncounterGenerator {
    /// Validates the distribution parameters and builds a generator.
    pub fn new(config: EncounterGenConfig) -> Result<Self, EncounterGenConfigError> {
        let usable = config.ownship_speed.is_finite()
            && config.speed_std.is_finite()
            && config.speed_std >= 0.0
            && config.altitude_spread.is_finite()
            && config.altitude_spread >= 0.0;
        let speed = if usable {
            Normal::new(config.ownship_speed, config.speed_std).ok()
        } else {
            None
        };
        let speed = speed.ok_or_else(|| {
            EncounterGenConfigError::new(
                config.ownship_speed,
                config.speed_std,
                config.altitude_spread,
            )
        })?;
        Ok(Self {
            rng: SmallRng::seed_from_u64(config.seed),
            config,
            speed,
            next_id: 0,
        })
    }

    /// Ownship at the frame origin, flying north at the configured speed.
    pub fn ownship(&self) -> TrafficState {
        TrafficState::new(
            "ownship",
            Vect3::new(0.0, 0.0, 3000.0),
            Vect3::new(0.0, self.config.ownship_speed, 0.0),
        )
    }

    /// One fresh traffic aircraft on a roughly converging course.
    pub fn next_intruder(&mut self) -> TrafficState {
        let id = self.next_id;
        self.next_id += 1;

        let bearing = self.rng.random_range(0.0..TAU);
        let range = self.config.range_mean * self.rng.random_range(0.5..1.5);
        let altitude =
            3000.0 + self.rng.random_range(-self.config.altitude_spread..=self.config.altitude_spread);
        let position = Vect3::new(range * bearing.sin(), range * bearing.cos(), altitude);

        // Head back toward the ownship's neighborhood with some scatter.
        let heading = bearing + PI + self.rng.random_range(-0.4..0.4);
        let speed = self.speed.sample(&mut self.rng).abs().max(30.0);
        let velocity = Vect3::new(speed * heading.sin(), speed * heading.cos(), 0.0);

        TrafficState::new(format!("traffic-{id}"), position, velocity)
    }

    /// A complete encounter: ownship plus `traffic_count` aircraft.
    pub fn encounter(&mut self) -> (TrafficState, Vec<TrafficState>) {
        let ownship = self.ownship();
        let traffic = (0..self.config.traffic_count)
            .map(|_| self.next_intruder())
            .collect();
        (ownship, traffic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_per_seed() {
        let cfg = EncounterGenConfig::default();
        let (o1, t1) = EncounterGenerator::new(cfg.clone()).unwrap().encounter();
        let (o2, t2) = EncounterGenerator::new(cfg).unwrap().encounter();
        assert_eq!(o1, o2);
        assert_eq!(t1, t2);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = EncounterGenerator::new(EncounterGenConfig {
            seed: 1,
            ..Default::default()
        })
        .unwrap();
        let mut b = EncounterGenerator::new(EncounterGenConfig {
            seed: 2,
            ..Default::default()
        })
        .unwrap();
        assert_ne!(a.next_intruder(), b.next_intruder());
    }

    #[test]
    fn invalid_distribution_parameters_rejected() {
        let err = EncounterGenerator::new(EncounterGenConfig {
            speed_std: -1.0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.speed_std(), -1.0);

        assert!(EncounterGenerator::new(EncounterGenConfig {
            altitude_spread: f64::NAN,
            ..Default::default()
        })
        .is_err());

        assert!(EncounterGenerator::new(EncounterGenConfig {
            ownship_speed: f64::INFINITY,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn produces_valid_states() {
        let mut g = EncounterGenerator::new(EncounterGenConfig {
            traffic_count: 8,
            ..Default::default()
        })
        .unwrap();
        let (ownship, traffic) = g.encounter();
        assert!(ownship.is_valid());
        assert_eq!(traffic.len(), 8);
        for ac in &traffic {
            assert!(ac.is_valid());
            assert!(ac.velocity().norm2() >= 30.0);
        }
    }
}
