//! Core domain: notifications exchanged between controller subsystems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Skill;

/// Discriminant used to route notifications to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Landed,
    GrappleAttached,
    GrappleReleased,
}

/// A notification published inside one simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEvent {
    Landed {
        position: Vec2,
    },
    GrappleAttached {
        anchor: Vec2,
        rope_length: f32,
    },
    GrappleReleased {
        /// Whether the release happened on the ground and refilled the shots.
        refilled: bool,
    },
}

impl MotionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            MotionEvent::Landed { .. } => EventKind::Landed,
            MotionEvent::GrappleAttached { .. } => EventKind::GrappleAttached,
            MotionEvent::GrappleReleased { .. } => EventKind::GrappleReleased,
        }
    }
}

// ============================================================================
// Engine-facing messages
// ============================================================================

/// Fired when a controlled character touches down
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for LandedEvent {}

/// Fired when a grapple tip reaches its anchor and the tether is created
#[derive(Debug)]
pub struct GrappleAttachedEvent {
    pub entity: Entity,
    pub anchor: Vec2,
    pub rope_length: f32,
}

impl Message for GrappleAttachedEvent {}

/// Fired when an attached tether is destroyed
#[derive(Debug)]
pub struct GrappleReleasedEvent {
    pub entity: Entity,
    pub refilled: bool,
}

impl Message for GrappleReleasedEvent {}

/// Fired when a pickup unlocks a skill
#[derive(Debug)]
pub struct SkillUnlockedEvent {
    pub entity: Entity,
    pub skill: Skill,
}

impl Message for SkillUnlockedEvent {}
