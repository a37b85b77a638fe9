//! Soda Can Shaker - shake the phone, open the can, watch it blow
//!
//! Core modules:
//! - `sim`: Shake detection and the Intact/Exploded game state
//! - `platform`: Sensor boundary (browser motion events, synthetic sensor)
//! - `ui`: View model and toast notices for the rendering layer
//! - `settings`: Tunable thresholds and UI options

pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;
pub use sim::{AccelerationSample, ExplodeOutcome, Game, GameEvent, GamePhase, ShakeDetector, ShakeState};

/// Game configuration constants
pub mod consts {
    /// Minimum sample magnitude (m/s²) that counts as a shake. Strictly greater.
    pub const SHAKE_THRESHOLD: f32 = 10.0;
    /// Shake count the can must exceed before it can be opened. Strictly greater.
    pub const EXPLODE_THRESHOLD: u32 = 10;

    /// Standard gravity (m/s²), used by the synthetic sensor
    pub const GRAVITY: f32 = 9.81;

    /// Short toast duration (ms)
    pub const TOAST_SHORT_MS: u32 = 2000;

    /// User-facing strings
    pub const MSG_NO_ACCELEROMETER: &str = "No accelerometer found on this device";
    pub const MSG_SHAKE_MORE: &str = "Shake the can more!";
    pub const MSG_BOOM: &str = "Boom! The can exploded!";
    pub const LABEL_OPEN: &str = "Open Can";
    pub const LABEL_NEW_CAN: &str = "Get A New Can";
}
