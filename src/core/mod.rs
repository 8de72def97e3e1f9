//! Core domain: notifications, gravity ownership, and physics queries shared
//! by the controller subsystems.

mod bus;
mod events;
mod gravity;
mod physics;

pub use bus::{Delivery, EventBus};
pub use events::{
    EventKind, GrappleAttachedEvent, GrappleReleasedEvent, LandedEvent, MotionEvent,
    SkillUnlockedEvent,
};
pub use gravity::{GravityChannel, GravityOwner};
pub use physics::{AvianPhysicsQuery, GameLayer, PhysicsQuery, QueryLayer, RayHit};

use bevy::prelude::*;

/// Ordering of controller work inside a frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// `Update`: input latching and cursor projection.
    Input,
    /// `Update`: ground/wall probes, aim, facing.
    Sense,
    /// `FixedUpdate`: locomotion, jump, wall, grapple, body forces.
    Step,
    /// `PostUpdate`: late state resolution and notification dispatch.
    Resolve,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LandedEvent>()
            .add_message::<GrappleAttachedEvent>()
            .add_message::<GrappleReleasedEvent>()
            .add_message::<SkillUnlockedEvent>()
            .configure_sets(Update, (ControllerSet::Input, ControllerSet::Sense).chain());
    }
}
