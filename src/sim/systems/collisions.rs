//! Sim domain: sensor contacts for pickups, checkpoints, and hazards.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::SkillUnlockedEvent;
use crate::sim::{Checkpoint, Hazard, Player, RespawnPoint, Simulation, SkillPickup};

pub(crate) fn collect_skill_pickups(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    pickups: Query<&SkillPickup>,
    mut players: Query<&mut Simulation, With<Player>>,
    mut unlocked_events: MessageWriter<SkillUnlockedEvent>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, pickup_entity) in pairs {
            let Ok(pickup) = pickups.get(pickup_entity) else {
                continue;
            };
            let Ok(mut sim) = players.get_mut(player_entity) else {
                continue;
            };

            if sim.unlock_skill(pickup.skill) {
                unlocked_events.write(SkillUnlockedEvent {
                    entity: player_entity,
                    skill: pickup.skill,
                });
            }
            commands.entity(pickup_entity).despawn();
        }
    }
}

/// Checkpoints move the respawn point; hazards send the player back to it.
pub(crate) fn handle_checkpoints_and_hazards(
    mut collision_events: MessageReader<CollisionStart>,
    checkpoints: Query<&Transform, (With<Checkpoint>, Without<Player>)>,
    hazards: Query<(), With<Hazard>>,
    mut players: Query<
        (
            &mut Simulation,
            &mut RespawnPoint,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            let Ok((mut sim, mut respawn, mut transform, mut velocity)) =
                players.get_mut(player_entity)
            else {
                continue;
            };

            if let Ok(checkpoint) = checkpoints.get(other) {
                let point = checkpoint.translation.truncate();
                if respawn.0 != point {
                    debug!("Checkpoint reached at {:?}", point);
                    respawn.0 = point;
                }
            } else if hazards.contains(other) {
                warn!("Hazard touched, respawning at {:?}", respawn.0);
                sim.respawn_at(respawn.0);
                transform.translation = respawn.0.extend(transform.translation.z);
                velocity.0 = Vec2::ZERO;
            }
        }
    }
}
