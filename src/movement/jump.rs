//! Movement domain: coyote time, jump buffering, launch, and gravity shaping.

use bevy::prelude::*;

use crate::content::{JumpTuning, WallTuning};

use super::components::{Character, MotionState};
use super::timing::JumpTiming;

/// Where a jump was launched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOrigin {
    Ground,
    Coyote,
    Wall,
}

/// Result of late-tick state resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    LeftGround,
    Landed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JumpSystem {
    timing: JumpTiming,
    jump_held: bool,
    boosted_gravity_applied: bool,
    gravity_multiplier: f32,
}

impl JumpSystem {
    pub fn new(tuning: &JumpTuning) -> Self {
        Self {
            timing: JumpTiming::from_tuning(tuning),
            jump_held: false,
            boosted_gravity_applied: false,
            gravity_multiplier: 1.0,
        }
    }

    pub fn timing(&self) -> JumpTiming {
        self.timing
    }

    pub fn gravity_multiplier(&self) -> f32 {
        self.gravity_multiplier
    }

    pub fn is_jump_held(&self) -> bool {
        self.jump_held
    }

    /// Count down both grace windows. Coyote time only drains while airborne
    /// after walking off a ledge.
    pub fn tick_timers(character: &mut Character, dt: f32) {
        character.jump_buffer_timer = (character.jump_buffer_timer - dt).max(0.0);
        if character.motion_state == MotionState::Airborne {
            character.coyote_timer = (character.coyote_timer - dt).max(0.0);
        }
    }

    /// A press restarts the buffer, superseding any earlier press.
    pub fn press(&mut self, tuning: &JumpTuning, character: &mut Character) {
        self.jump_held = true;
        character.jump_buffer_timer = tuning.jump_buffer;
    }

    pub fn release(&mut self) {
        self.jump_held = false;
    }

    /// Launch if a buffered press overlaps ground, coyote time, or a wall.
    pub fn try_jump(
        &mut self,
        wall: &WallTuning,
        character: &mut Character,
    ) -> Option<JumpOrigin> {
        if character.jump_buffer_timer <= 0.0 {
            return None;
        }

        let origin = if character.motion_state == MotionState::Grounded {
            JumpOrigin::Ground
        } else if let Some(side) = character.wall_attached {
            // Always kicks off the wall, whichever way the stick points.
            character.velocity.x = side.away_sign() * wall.jump_impulse;
            JumpOrigin::Wall
        } else if character.coyote_timer > 0.0 {
            JumpOrigin::Coyote
        } else {
            return None;
        };

        character.velocity.y = self.timing.launch_velocity;
        character.coyote_timer = 0.0;
        character.jump_buffer_timer = 0.0;
        character.motion_state = MotionState::Jumping;
        self.boosted_gravity_applied = false;
        self.gravity_multiplier = 1.0;

        debug!(
            "Jump from {:?}: vy={}, charges={}",
            origin, character.velocity.y, character.wall_jump_charges
        );
        Some(origin)
    }

    /// Switch to the landing multiplier once the jump falls or is released.
    pub fn shape_gravity(&mut self, tuning: &JumpTuning, character: &Character) {
        if self.boosted_gravity_applied {
            return;
        }
        if character.velocity.y < tuning.fall_threshold || !self.jump_held {
            self.gravity_multiplier = tuning.landing_gravity_multiplier;
            self.boosted_gravity_applied = true;
        }
    }

    /// Late-tick ground/air resolution from the latest probe.
    pub fn resolve(
        &mut self,
        tuning: &JumpTuning,
        wall: &WallTuning,
        character: &mut Character,
    ) -> Option<GroundTransition> {
        match character.motion_state {
            MotionState::Grounded if !character.grounded => {
                character.motion_state = MotionState::Airborne;
                character.coyote_timer = tuning.coyote_time;
                debug!("Left ground at {:?}", character.position);
                Some(GroundTransition::LeftGround)
            }
            // A jump still rising past the probe has not landed.
            MotionState::Jumping | MotionState::Airborne
                if character.grounded && character.velocity.y <= 0.0 =>
            {
                character.motion_state = MotionState::Grounded;
                character.coyote_timer = tuning.coyote_time;
                character.wall_jump_charges = wall.max_charges;
                character.wall_attached = None;
                debug!(
                    "Landed at {:?}, charges restored to {}",
                    character.position, character.wall_jump_charges
                );
                Some(GroundTransition::Landed)
            }
            _ => None,
        }
    }
}
