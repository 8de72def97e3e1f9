//! Sim domain: per-tick input the controller consumes.

use bevy::prelude::*;

/// Axes plus edge-triggered actions, latched between fixed ticks.
///
/// Edges are OR-ed in by the frame-rate input system and cleared by
/// [`ControllerInput::take_edges`] when a fixed tick consumes them, so a
/// press is never lost when a frame runs no fixed tick, and never seen twice.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ControllerInput {
    pub move_axis: f32,
    /// Positive reels in, negative pays out.
    pub rappel_axis: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub fire_pressed: bool,
    pub retrieve_pressed: bool,
}

impl ControllerInput {
    /// Snapshot for one fixed tick; edge flags are cleared afterwards.
    pub fn take_edges(&mut self) -> ControllerInput {
        let snapshot = self.clone();
        self.jump_pressed = false;
        self.jump_released = false;
        self.fire_pressed = false;
        self.retrieve_pressed = false;
        snapshot
    }
}

/// World-space aim point, absent while the cursor is outside the window.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct AimTarget(pub Option<Vec2>);
