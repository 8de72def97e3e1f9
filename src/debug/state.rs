//! Debug domain: state for the developer shortcuts.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether to show the controller overlay
    pub show_info: bool,
    /// Whether to draw the rope between muzzle and tip
    pub show_rope: bool,
    /// Message shown in the overlay until its timer runs out
    pub status_message: Option<(String, f32)>,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_info: false,
            show_rope: true,
            status_message: None,
        }
    }
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}
