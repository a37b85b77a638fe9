//! Synthetic accelerometer
//!
//! Deterministic stand-in for a real sensor. A phone lying still reads
//! roughly 1 g; a shake reads well above the threshold in a random direction.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::SensorListener;
use crate::consts::GRAVITY;
use crate::sim::AccelerationSample;

/// Noise on each axis while resting (m/s²). Keeps |a| below 10.
const REST_NOISE: f32 = 0.1;
/// Shake magnitude range (m/s²)
const SHAKE_MIN: f32 = 12.0;
const SHAKE_MAX: f32 = 25.0;

/// One step of a scripted motion session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Phone at rest for this many samples
    Rest(usize),
    /// This many shake samples
    Shake(usize),
}

/// Seeded fake accelerometer
#[derive(Debug, Clone)]
pub struct SyntheticSensor {
    rng: Pcg32,
}

impl SyntheticSensor {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Phone lying flat: gravity on z plus a little jitter
    pub fn rest(&mut self) -> AccelerationSample {
        let jitter = Vec3::new(
            self.rng.random_range(-REST_NOISE..REST_NOISE),
            self.rng.random_range(-REST_NOISE..REST_NOISE),
            self.rng.random_range(-REST_NOISE..REST_NOISE),
        );
        AccelerationSample(Vec3::new(0.0, 0.0, GRAVITY) + jitter)
    }

    /// A hard jolt in a random direction
    pub fn shake(&mut self) -> AccelerationSample {
        let dir = Vec3::new(
            self.rng.random_range(-1.0..1.0),
            self.rng.random_range(-1.0..1.0),
            self.rng.random_range(-1.0..1.0),
        )
        .normalize_or(Vec3::Z);
        let magnitude = self.rng.random_range(SHAKE_MIN..SHAKE_MAX);
        AccelerationSample(dir * magnitude)
    }

    /// Expand a motion script into samples
    pub fn samples(&mut self, script: &[Motion]) -> Vec<AccelerationSample> {
        let mut out = Vec::new();
        for motion in script {
            match *motion {
                Motion::Rest(n) => out.extend((0..n).map(|_| self.rest())),
                Motion::Shake(n) => out.extend((0..n).map(|_| self.shake())),
            }
        }
        out
    }

    /// Push a motion script through a listener
    pub fn play<L: SensorListener>(&mut self, script: &[Motion], listener: &mut L) {
        for sample in self.samples(script) {
            listener.on_sensor_changed(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Game;

    #[test]
    fn test_rest_below_threshold() {
        let mut sensor = SyntheticSensor::new(1);
        for _ in 0..1000 {
            assert!(sensor.rest().magnitude() < 10.0);
        }
    }

    #[test]
    fn test_shake_above_threshold() {
        let mut sensor = SyntheticSensor::new(2);
        for _ in 0..1000 {
            let m = sensor.shake().magnitude();
            assert!(m > 11.9 && m < 25.1, "magnitude {}", m);
        }
    }

    #[test]
    fn test_deterministic() {
        let script = [Motion::Rest(5), Motion::Shake(5)];
        let a = SyntheticSensor::new(42).samples(&script);
        let b = SyntheticSensor::new(42).samples(&script);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn test_play_into_game() {
        let mut game = Game::default();
        let mut sensor = SyntheticSensor::new(7);
        sensor.play(
            &[Motion::Rest(20), Motion::Shake(6), Motion::Rest(10), Motion::Shake(5)],
            &mut game,
        );
        assert_eq!(game.shake_count(), 11);
    }
}
