//! Movement domain: character body state and the small enums around it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::ControllerConfig;

/// Locomotion state. Ground/air transitions happen only in late resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Grounded,
    Airborne,
    Jumping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn from_sign(sign: f32) -> Self {
        if sign < 0.0 { Facing::Left } else { Facing::Right }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Which side of the body a wall is touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Horizontal sign pointing away from the wall.
    pub fn away_sign(self) -> f32 {
        match self {
            WallSide::Left => 1.0,
            WallSide::Right => -1.0,
        }
    }
}

/// Abilities that start locked and are granted during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum Skill {
    Grapple,
    WallJump,
}

/// The controlled body as the controller sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Horizontal acceleration applied during the last fixed tick.
    pub acceleration: Vec2,
    /// Raw result of the latest ground probe.
    pub grounded: bool,
    /// Raw result of the latest wall probes.
    pub wall_contact: Option<WallSide>,
    /// Wall the character is currently clinging to.
    pub wall_attached: Option<WallSide>,
    pub wall_jump_charges: u32,
    /// Seconds of coyote grace left.
    pub coyote_timer: f32,
    /// Seconds left on a buffered jump press.
    pub jump_buffer_timer: f32,
    pub facing: Facing,
    pub motion_state: MotionState,
}

impl Character {
    pub fn spawn(position: Vec2, config: &ControllerConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            grounded: true,
            wall_contact: None,
            wall_attached: None,
            wall_jump_charges: config.wall.max_charges,
            coyote_timer: config.jump.coyote_time,
            jump_buffer_timer: 0.0,
            facing: Facing::Right,
            motion_state: MotionState::Grounded,
        }
    }

    pub fn is_wall_attached(&self) -> bool {
        self.wall_attached.is_some()
    }

    pub fn is_on_ground(&self) -> bool {
        self.motion_state == MotionState::Grounded
    }
}
