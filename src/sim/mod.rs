//! Sim domain: the per-character simulation context and its Bevy wiring.

mod bootstrap;
mod components;
mod dev;
mod input;
mod simulation;
pub(crate) mod systems;

pub use bootstrap::{PLAYER_SIZE, PLAYER_SPAWN};
pub use components::{Anchor, Checkpoint, Ground, Hazard, Player, RespawnPoint, SkillPickup, Wall};
pub use input::{AimTarget, ControllerInput};
pub use simulation::{Simulation, Subscriber, TickReport};

use bevy::prelude::*;

use crate::core::ControllerSet;
use systems::{
    collect_skill_pickups, handle_checkpoints_and_hazards, log_motion_events, read_input,
    resolve_and_notify, sense_surroundings, step_simulation, track_cursor,
};

/// Drives every [`Simulation`] from input, avian probes, and the fixed clock.
/// Expects a [`crate::content::ControllerConfig`] resource.
pub struct SimPlugin {
    /// Spawn the demo room around the player.
    pub test_room: bool,
}

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerInput>()
            .init_resource::<AimTarget>()
            .add_systems(Startup, (bootstrap::spawn_camera, bootstrap::spawn_player))
            .add_systems(
                Update,
                (read_input, track_cursor).in_set(ControllerSet::Input),
            )
            .add_systems(Update, sense_surroundings.in_set(ControllerSet::Sense))
            .add_systems(
                Update,
                (collect_skill_pickups, handle_checkpoints_and_hazards)
                    .after(ControllerSet::Sense),
            )
            .add_systems(FixedUpdate, step_simulation.in_set(ControllerSet::Step))
            .add_systems(
                PostUpdate,
                (resolve_and_notify, log_motion_events)
                    .chain()
                    .in_set(ControllerSet::Resolve),
            );

        if self.test_room {
            app.add_systems(Startup, dev::spawn_test_room);
        }
    }
}
