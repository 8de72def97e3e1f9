//! Debug domain: hotkeys, overlay, and rope drawing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::SkillUnlockedEvent;
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::Skill;
use crate::sim::{Player, RespawnPoint, Simulation};

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut player_query: Query<
        (
            Entity,
            &mut Simulation,
            &RespawnPoint,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut unlocked_events: MessageWriter<SkillUnlockedEvent>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
    }
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_rope = !debug_state.show_rope;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    let Ok((entity, mut sim, respawn, mut transform, mut velocity)) = player_query.single_mut()
    else {
        return;
    };

    // Ctrl+U: unlock every skill
    if keyboard.just_pressed(KeyCode::KeyU) {
        for skill in [Skill::Grapple, Skill::WallJump] {
            if sim.unlock_skill(skill) {
                unlocked_events.write(SkillUnlockedEvent { entity, skill });
            }
        }
        debug_state.set_message("All skills unlocked", 2.0);
        info!("[DEBUG] All skills unlocked");
    }

    // Ctrl+L: dump the controller state
    if keyboard.just_pressed(KeyCode::KeyL) {
        let character = sim.character();
        info!(
            "[DEBUG] state={:?} pos={:?} vel={:?} wall={:?} charges={} grapple={:?} shots={} gravity={:?}x{:.2}",
            character.motion_state,
            character.position,
            character.velocity,
            character.wall_attached,
            character.wall_jump_charges,
            sim.grapple().state(),
            sim.remaining_shots(),
            sim.gravity().owner(),
            sim.gravity().multiplier()
        );
    }

    // Ctrl+R: back to the last checkpoint
    if keyboard.just_pressed(KeyCode::KeyR) {
        sim.respawn_at(respawn.0);
        transform.translation = respawn.0.extend(transform.translation.z);
        velocity.0 = Vec2::ZERO;
        debug_state.set_message("Respawned", 2.0);
        info!("[DEBUG] Respawned at {:?}", respawn.0);
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

pub(crate) fn draw_rope(mut gizmos: Gizmos, player_query: Query<&Simulation, With<Player>>) {
    for sim in &player_query {
        if let Some((muzzle, tip)) = sim.rope_segment() {
            let color = if sim.is_attached() {
                Color::srgb(0.9, 0.8, 0.3)
            } else {
                Color::srgb(0.6, 0.6, 0.6)
            };
            gizmos.line_2d(muzzle, tip, color);
        }
    }
}

/// Update the debug info overlay with current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<&Simulation, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some(sim), Ok(mut text)) = (player_query.iter().next(), overlay_query.single_mut()) {
        let character = sim.character();
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str())
            .unwrap_or("");
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nState: {:?}\nWall: {:?} ({} charges)\nGrapple: {:?} ({} shots)\nGravity: {:?} x{:.2}\n{}",
            character.position.x,
            character.position.y,
            character.velocity.x,
            character.velocity.y,
            character.motion_state,
            character.wall_attached,
            character.wall_jump_charges,
            sim.grapple().state(),
            sim.remaining_shots(),
            sim.gravity().owner(),
            sim.gravity().multiplier(),
            status
        );
    }
}
