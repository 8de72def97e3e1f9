//! Sim domain: keyboard, mouse, and cursor sampling.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::sim::{AimTarget, ControllerInput};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<ControllerInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Rope: up reels in, down pays out
    let mut rappel = 0.0;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        rappel += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        rappel -= 1.0;
    }

    input.move_axis = x;
    input.rappel_axis = rappel;

    // Edges accumulate until a fixed tick takes them.
    input.jump_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_released |=
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    input.fire_pressed |= mouse.just_pressed(MouseButton::Left);
    input.retrieve_pressed |=
        mouse.just_pressed(MouseButton::Right) || keyboard.just_pressed(KeyCode::KeyE);
}

/// Project the cursor into world space through the 2D camera.
pub(crate) fn track_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut aim: ResMut<AimTarget>,
) {
    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), cameras.single()) else {
        aim.0 = None;
        return;
    };

    aim.0 = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok());
}
