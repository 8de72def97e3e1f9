//! Sim domain: camera and player bootstrap from the injected configuration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::core::GameLayer;
use crate::sim::{Player, RespawnPoint, Simulation};

/// Player size in world units; the probe lengths in the shipped
/// configuration reach a few units past this box.
pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Where the player first appears in the test room.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(-600.0, -150.0);

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let sim = match Simulation::new(config.clone(), PLAYER_SPAWN) {
        Ok(sim) => sim,
        Err(errors) => {
            for error in &errors {
                error!("Cannot spawn player: {}", error);
            }
            return;
        }
    };

    info!(
        "Spawning player at {:?}: grapple={}, wall_jump={}, max_ropes={}",
        PLAYER_SPAWN, config.grapple.enabled, config.wall.unlocked, config.grapple.max_ropes
    );

    commands.spawn((
        // Identity & controller
        (Player, sim, RespawnPoint(PLAYER_SPAWN)),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity comes from the controller's channel
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Anchor,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));
}
