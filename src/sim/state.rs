//! Game state types
//!
//! The whole game is two numbers: how many shakes have been counted, and
//! whether the can has exploded.

use serde::{Deserialize, Serialize};

/// Current phase of the can
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Can is closed, waiting to be shaken and opened
    #[default]
    Intact,
    /// Can has been opened after enough shaking
    Exploded,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Intact => "Intact",
            GamePhase::Exploded => "Exploded",
        }
    }
}

/// Snapshot of the game as seen by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShakeState {
    pub shake_count: u32,
    pub is_exploded: bool,
}

impl ShakeState {
    pub fn phase(&self) -> GamePhase {
        if self.is_exploded {
            GamePhase::Exploded
        } else {
            GamePhase::Intact
        }
    }
}

/// Something the UI may want to react to (toast, re-render, log)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A sample crossed the threshold; `count` is the new total
    Shake { count: u32 },
    /// The can was opened and blew up
    Exploded,
    /// Open was pressed before the count exceeded `needed`
    NotEnoughShakes { count: u32, needed: u32 },
    /// A fresh can was handed out
    Reset,
    /// No usable accelerometer; shaking will never register
    SensorUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ShakeState::default();
        assert_eq!(state.shake_count, 0);
        assert!(!state.is_exploded);
        assert_eq!(state.phase(), GamePhase::Intact);
    }

    #[test]
    fn test_state_serializes() {
        let state = ShakeState {
            shake_count: 0,
            is_exploded: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"shake_count":0,"is_exploded":true}"#);
        assert_eq!(state.phase().as_str(), "Exploded");
    }
}
