//! Platform abstraction layer
//!
//! The game never talks to a sensor API directly. A sensor source pushes
//! samples into a [`SensorListener`]; how the samples are produced is the
//! platform's business:
//! - `web`: browser `devicemotion` events (wasm32 only)
//! - `synthetic`: seeded fake accelerometer for native runs and tests

pub mod synthetic;
#[cfg(target_arch = "wasm32")]
pub mod web;

use thiserror::Error;

use crate::consts::MSG_NO_ACCELEROMETER;
use crate::sim::{AccelerationSample, Game};

/// Sensor accuracy levels (as reported by mobile sensor stacks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorAccuracy {
    Unreliable,
    Low,
    Medium,
    High,
}

/// Sensor setup failures. None of these are fatal; the game stays usable,
/// shaking just never registers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("{}", MSG_NO_ACCELEROMETER)]
    NoAccelerometer,
    #[error("Motion sensor permission denied")]
    PermissionDenied,
    #[error("Failed to subscribe to motion events: {0}")]
    Subscribe(String),
}

/// How long to wait for the first motion reading before giving up (ms)
pub const SENSOR_TIMEOUT_MS: u32 = 3000;

/// Receives accelerometer callbacks
pub trait SensorListener {
    /// A new reading arrived
    fn on_sensor_changed(&mut self, sample: AccelerationSample);

    /// The platform fired a motion callback without any axis data. Browsers
    /// on devices with no accelerometer do this.
    fn on_empty_reading(&mut self) {}

    /// Sensor accuracy changed. Nothing in the game depends on it.
    fn on_accuracy_changed(&mut self, accuracy: SensorAccuracy) {
        log::debug!("Sensor accuracy changed: {:?}", accuracy);
    }
}

impl SensorListener for Game {
    fn on_sensor_changed(&mut self, sample: AccelerationSample) {
        self.observe(sample);
    }
}

/// Decides whether a sensor that looks present actually delivers data.
///
/// Browsers expose the motion API everywhere, so presence proves nothing.
/// The first reading settles it: real axes mean live, empty axes mean
/// missing. No reading before the timeout also means missing. A verdict is
/// handed out once; later calls return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorWatchdog {
    #[default]
    Waiting,
    Live,
    Missing,
}

impl SensorWatchdog {
    /// Feed one callback; `None` for a reading with no axis data
    pub fn on_reading(
        &mut self,
        reading: Option<AccelerationSample>,
    ) -> Option<Result<(), SensorError>> {
        if *self != SensorWatchdog::Waiting {
            return None;
        }
        if reading.is_some() {
            *self = SensorWatchdog::Live;
            Some(Ok(()))
        } else {
            *self = SensorWatchdog::Missing;
            Some(Err(SensorError::NoAccelerometer))
        }
    }

    /// The wait for a first reading ran out
    pub fn on_timeout(&mut self) -> Option<Result<(), SensorError>> {
        if *self != SensorWatchdog::Waiting {
            return None;
        }
        *self = SensorWatchdog::Missing;
        Some(Err(SensorError::NoAccelerometer))
    }

    pub fn is_pending(&self) -> bool {
        *self == SensorWatchdog::Waiting
    }
}

/// Record the outcome of sensor setup on the game.
///
/// Returns true if samples can be expected. On failure the game gets a
/// `SensorUnavailable` event so the UI can show a notice.
pub fn apply_sensor_status(game: &mut Game, status: Result<(), SensorError>) -> bool {
    match status {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Accelerometer unavailable: {}", e);
            game.report_sensor_unavailable();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameEvent;

    #[test]
    fn test_game_as_listener() {
        let mut game = Game::default();
        game.on_sensor_changed(AccelerationSample::new(0.0, 15.0, 0.0));
        game.on_sensor_changed(AccelerationSample::new(0.0, 0.0, 9.81));
        game.on_accuracy_changed(SensorAccuracy::Low);
        assert_eq!(game.shake_count(), 1);
    }

    #[test]
    fn test_missing_sensor_is_reported() {
        let mut game = Game::default();
        assert!(!apply_sensor_status(&mut game, Err(SensorError::NoAccelerometer)));
        assert_eq!(game.drain_events(), vec![GameEvent::SensorUnavailable]);

        assert!(apply_sensor_status(&mut game, Ok(())));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_watchdog_empty_first_reading_is_missing() {
        let mut game = Game::default();
        let mut watchdog = SensorWatchdog::default();
        assert!(watchdog.is_pending());

        let verdict = watchdog.on_reading(None).unwrap();
        assert_eq!(verdict, Err(SensorError::NoAccelerometer));
        assert!(!apply_sensor_status(&mut game, verdict));
        assert_eq!(game.drain_events(), vec![GameEvent::SensorUnavailable]);

        // Decided once; no repeat notices
        assert_eq!(watchdog.on_reading(None), None);
        assert_eq!(watchdog.on_timeout(), None);
    }

    #[test]
    fn test_watchdog_real_reading_is_live() {
        let mut watchdog = SensorWatchdog::default();
        let sample = AccelerationSample::new(0.0, 0.0, 9.81);
        assert_eq!(watchdog.on_reading(Some(sample)), Some(Ok(())));
        assert_eq!(watchdog, SensorWatchdog::Live);

        // Later gaps and timers don't flip a live sensor
        assert_eq!(watchdog.on_reading(None), None);
        assert_eq!(watchdog.on_timeout(), None);
    }

    #[test]
    fn test_watchdog_silence_is_missing() {
        let mut watchdog = SensorWatchdog::default();
        assert_eq!(watchdog.on_timeout(), Some(Err(SensorError::NoAccelerometer)));
        assert_eq!(watchdog, SensorWatchdog::Missing);
        assert_eq!(
            watchdog.on_reading(Some(AccelerationSample::new(20.0, 0.0, 0.0))),
            None
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SensorError::NoAccelerometer.to_string(),
            "No accelerometer found on this device"
        );
        assert_eq!(
            SensorError::Subscribe("boom".into()).to_string(),
            "Failed to subscribe to motion events: boom"
        );
    }
}
