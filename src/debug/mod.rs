//! Developer shortcuts for the demo room.
//!
//! Features:
//! - Ctrl+U unlocks every skill
//! - Ctrl+L logs the controller state
//! - Ctrl+R respawns at the last checkpoint
//! - F3 toggles the controller overlay, F4 the rope gizmo

mod state;
mod systems;
mod ui;

pub use state::DebugState;
pub use ui::DebugInfoOverlay;

use bevy::prelude::*;

use crate::core::ControllerSet;
use systems::{
    draw_rope, handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, update_status_message)
                    .chain()
                    .after(ControllerSet::Sense),
            )
            .add_systems(
                Update,
                draw_rope.run_if(|state: Res<DebugState>| state.show_rope),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}
