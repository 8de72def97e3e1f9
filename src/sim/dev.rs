//! Sim domain: the playable test room used by the demo binary.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameLayer;
use crate::movement::Skill;
use crate::sim::{Anchor, Checkpoint, Ground, Hazard, SkillPickup, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let anchor_color = Color::srgb(0.7, 0.6, 0.2);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let anchor_layers = CollisionLayers::new(GameLayer::Anchor, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1600.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1600.0, 40.0),
        ground_layers,
    ));

    // Outer walls, plus a climbing shaft on the right
    for (x, y, height) in [
        (-780.0, 200.0, 800.0),
        (780.0, 200.0, 800.0),
        (480.0, 60.0, 440.0),
        (620.0, 60.0, 440.0),
    ] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, height)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, height),
            wall_layers,
        ));
    }

    // Platforms
    for (x, y) in [(-300.0, -60.0), (120.0, 40.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(160.0, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(160.0, 20.0),
            ground_layers,
        ));
    }

    // Grapple anchors hanging over the hazard gap
    for (x, y) in [(-120.0, 260.0), (200.0, 300.0)] {
        commands.spawn((
            Anchor,
            Sprite {
                color: anchor_color,
                custom_size: Some(Vec2::new(120.0, 30.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(120.0, 30.0),
            anchor_layers,
        ));
    }

    spawn_sensors(&mut commands);
}

fn spawn_sensors(commands: &mut Commands) {
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    for (skill, position, color) in [
        (Skill::Grapple, Vec2::new(-300.0, -30.0), Color::srgb(0.9, 0.7, 0.2)),
        (Skill::WallJump, Vec2::new(120.0, 70.0), Color::srgb(0.3, 0.7, 0.9)),
    ] {
        commands.spawn((
            SkillPickup { skill },
            Sprite {
                color,
                custom_size: Some(Vec2::splat(20.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(20.0, 20.0),
            Sensor,
            sensor_layers,
        ));
    }

    // Spikes
    commands.spawn((
        Hazard,
        Sprite {
            color: Color::srgb(0.8, 0.2, 0.2),
            custom_size: Some(Vec2::new(200.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(-20.0, -172.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(200.0, 16.0),
        Sensor,
        sensor_layers,
    ));

    for position in [Vec2::new(-600.0, -150.0), Vec2::new(300.0, -150.0)] {
        commands.spawn((
            Checkpoint,
            Sprite {
                color: Color::srgba(0.4, 0.9, 0.4, 0.4),
                custom_size: Some(Vec2::new(20.0, 48.0)),
                ..default()
            },
            Transform::from_translation(position.extend(-1.0)),
            RigidBody::Static,
            Collider::rectangle(20.0, 48.0),
            Sensor,
            sensor_layers,
        ));
    }
}
