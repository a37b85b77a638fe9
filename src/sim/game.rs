//! Game controller
//!
//! Owns the shake detector and the Intact/Exploded phase. The rendering
//! layer calls into it from the sensor callback and from the single button,
//! then drains events to decide what to redraw or announce.

use super::detector::ShakeDetector;
use super::sample::AccelerationSample;
use super::state::{GameEvent, GamePhase, ShakeState};
use crate::consts::EXPLODE_THRESHOLD;
use crate::settings::Settings;

/// Result of pressing "Open Can"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplodeOutcome {
    /// Count exceeded the threshold; the can is now exploded
    Exploded,
    /// Count too low; nothing changed
    NotEnoughShakes { count: u32, needed: u32 },
    /// Already exploded; caller should reset instead
    AlreadyExploded,
}

/// The whole game: detector + phase + pending events
#[derive(Debug, Clone)]
pub struct Game {
    detector: ShakeDetector,
    phase: GamePhase,
    /// Count must be strictly greater than this to explode
    explode_threshold: u32,
    /// Emit a debug line per counted shake
    log_shakes: bool,
    events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            detector: ShakeDetector::default(),
            phase: GamePhase::Intact,
            explode_threshold: EXPLODE_THRESHOLD,
            log_shakes: true,
            events: Vec::new(),
        }
    }
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Self {
            detector: ShakeDetector::new(settings.sample_threshold),
            phase: GamePhase::Intact,
            explode_threshold: settings.explode_threshold,
            log_shakes: settings.log_shakes,
            events: Vec::new(),
        }
    }

    /// Feed one raw accelerometer reading
    pub fn on_sample(&mut self, x: f32, y: f32, z: f32) -> bool {
        self.observe(AccelerationSample::new(x, y, z))
    }

    /// Feed one sample. Shakes still count while exploded; reset clears them.
    pub fn observe(&mut self, sample: AccelerationSample) -> bool {
        if !self.detector.observe(sample) {
            return false;
        }
        let count = self.detector.count();
        if self.log_shakes {
            log::debug!(target: "shake_detection", "Shake count: {}", count);
        }
        // Back-to-back shakes collapse into the latest count
        match self.events.last_mut() {
            Some(GameEvent::Shake { count: last }) => *last = count,
            _ => self.events.push(GameEvent::Shake { count }),
        }
        true
    }

    /// Try to open the can
    pub fn attempt_explode(&mut self) -> ExplodeOutcome {
        if self.phase == GamePhase::Exploded {
            return ExplodeOutcome::AlreadyExploded;
        }

        let count = self.detector.count();
        if count > self.explode_threshold {
            self.phase = GamePhase::Exploded;
            self.detector.reset();
            self.events.push(GameEvent::Exploded);
            log::info!("Boom! Can exploded after {} shakes", count);
            ExplodeOutcome::Exploded
        } else {
            let needed = self.explode_threshold;
            self.events.push(GameEvent::NotEnoughShakes { count, needed });
            log::info!("Not enough shakes ({} of >{})", count, needed);
            ExplodeOutcome::NotEnoughShakes { count, needed }
        }
    }

    /// Hand out a fresh can
    pub fn reset_game(&mut self) {
        self.phase = GamePhase::Intact;
        self.detector.reset();
        self.events.push(GameEvent::Reset);
        log::info!("New can");
    }

    /// The single on-screen button: open when intact, reset when exploded.
    /// Returns the event it produced.
    pub fn press_button(&mut self) -> GameEvent {
        match self.phase {
            GamePhase::Exploded => {
                self.reset_game();
                GameEvent::Reset
            }
            GamePhase::Intact => match self.attempt_explode() {
                ExplodeOutcome::NotEnoughShakes { count, needed } => {
                    GameEvent::NotEnoughShakes { count, needed }
                }
                ExplodeOutcome::Exploded | ExplodeOutcome::AlreadyExploded => GameEvent::Exploded,
            },
        }
    }

    /// Record that no accelerometer is available so the UI can say so
    pub fn report_sensor_unavailable(&mut self) {
        self.events.push(GameEvent::SensorUnavailable);
    }

    pub fn state(&self) -> ShakeState {
        ShakeState {
            shake_count: self.detector.count(),
            is_exploded: self.phase == GamePhase::Exploded,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn shake_count(&self) -> u32 {
        self.detector.count()
    }

    pub fn is_exploded(&self) -> bool {
        self.phase == GamePhase::Exploded
    }

    /// Take all events produced since the last drain (oldest first).
    ///
    /// Consecutive shakes are merged, so an undrained queue only grows with
    /// button presses and sensor reports, not with samples.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
