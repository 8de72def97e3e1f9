//! Motion and grapple controller for a 2D platformer character.
//!
//! The controller logic lives in engine-free domains (`movement`, `grapple`,
//! `core`) driven through [`sim::Simulation`]. [`HookshotPlugin`] wires it
//! into a Bevy app on top of avian2d.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod grapple;
pub mod movement;
pub mod sim;
#[cfg(test)]
mod test_support;

use bevy::prelude::*;

/// Core messages, the controller systems, and (with `dev-tools`) the debug
/// shortcuts. Insert a validated [`content::ControllerConfig`] first.
pub struct HookshotPlugin {
    /// Spawn the demo room around the player.
    pub test_room: bool,
}

impl Default for HookshotPlugin {
    fn default() -> Self {
        Self { test_room: true }
    }
}

impl Plugin for HookshotPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(crate::core::CorePlugin).add_plugins(sim::SimPlugin {
            test_room: self.test_room,
        });

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
