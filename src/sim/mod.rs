//! Deterministic game logic
//!
//! Everything gameplay-related lives here. This module must stay pure:
//! - No platform or DOM dependencies
//! - No clocks, no randomness
//! - Samples in, state and events out

pub mod detector;
pub mod game;
pub mod sample;
pub mod state;

pub use detector::ShakeDetector;
pub use game::{ExplodeOutcome, Game};
pub use sample::AccelerationSample;
pub use state::{GameEvent, GamePhase, ShakeState};
