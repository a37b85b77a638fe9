//! View model
//!
//! What the screen should show for a given game state. Framework-agnostic;
//! the web front end maps it onto DOM elements.

use crate::consts::*;
use crate::sim::{GameEvent, ShakeState};

/// Which can picture to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanImage {
    Can,
    ExplodingCan,
}

impl CanImage {
    /// DOM element id of the matching `<img>`
    pub fn element_id(&self) -> &'static str {
        match self {
            CanImage::Can => "can",
            CanImage::ExplodingCan => "exploding-can",
        }
    }

    pub fn alt_text(&self) -> &'static str {
        match self {
            CanImage::Can => "Coke Can",
            CanImage::ExplodingCan => "Exploding Can",
        }
    }
}

/// Everything the single screen renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanView {
    pub image: CanImage,
    pub button_label: &'static str,
    pub shake_count: u32,
}

impl CanView {
    pub fn from_state(state: &ShakeState) -> Self {
        if state.is_exploded {
            Self {
                image: CanImage::ExplodingCan,
                button_label: LABEL_NEW_CAN,
                shake_count: state.shake_count,
            }
        } else {
            Self {
                image: CanImage::Can,
                button_label: LABEL_OPEN,
                shake_count: state.shake_count,
            }
        }
    }

    /// The picture that should be hidden
    pub fn hidden_image(&self) -> CanImage {
        match self.image {
            CanImage::Can => CanImage::ExplodingCan,
            CanImage::ExplodingCan => CanImage::Can,
        }
    }
}

/// Short-lived on-screen notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: &'static str,
    pub duration_ms: u32,
}

impl Toast {
    /// Toast for an event, if it deserves one
    pub fn for_event(event: &GameEvent, duration_ms: u32) -> Option<Self> {
        let message = match event {
            GameEvent::Exploded => MSG_BOOM,
            GameEvent::NotEnoughShakes { .. } => MSG_SHAKE_MORE,
            GameEvent::SensorUnavailable => MSG_NO_ACCELEROMETER,
            GameEvent::Shake { .. } | GameEvent::Reset => return None,
        };
        Some(Self {
            message,
            duration_ms,
        })
    }
}
