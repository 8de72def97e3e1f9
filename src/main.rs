use std::env;
use std::path::PathBuf;

use avian2d::prelude::*;
use bevy::prelude::*;

use hookshot::HookshotPlugin;
use hookshot::content::{DEFAULT_CONFIG_PATH, load_controller_config};

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hookshot".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(120.0));

    // Optional first argument: a .ron or .json controller configuration.
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match load_controller_config(&path) {
        Ok(config) => config,
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            error!(
                "Refusing to start: {} problem(s) in {}",
                errors.len(),
                path.display()
            );
            return AppExit::error();
        }
    };

    app.insert_resource(config)
        .add_plugins(HookshotPlugin::default())
        .run()
}
