//! Movement domain: clinging to walls mid-air.

use bevy::prelude::*;

use crate::content::WallTuning;

use super::components::{Character, Facing, MotionState};

#[derive(Debug, Clone, PartialEq)]
pub struct WallAttachHandler {
    unlocked: bool,
    /// Seconds left before another wall may be grabbed.
    reattach_lock: f32,
}

impl WallAttachHandler {
    pub fn new(tuning: &WallTuning) -> Self {
        Self {
            unlocked: tuning.unlocked,
            reattach_lock: 0.0,
        }
    }

    pub fn unlock(&mut self) {
        self.unlocked = true;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Grab a touched wall, or keep the body frozen while already clinging.
    /// Returns true on a new attach.
    pub fn step(&mut self, character: &mut Character, grapple_attached: bool, dt: f32) -> bool {
        self.reattach_lock = (self.reattach_lock - dt).max(0.0);

        if character.is_wall_attached() {
            character.velocity = Vec2::ZERO;
            return false;
        }

        let Some(side) = character.wall_contact else {
            return false;
        };
        if !self.unlocked
            || grapple_attached
            || character.grounded
            || character.motion_state == MotionState::Grounded
            || character.wall_jump_charges == 0
            || self.reattach_lock > 0.0
        {
            return false;
        }

        character.velocity = Vec2::ZERO;
        character.acceleration = Vec2::ZERO;
        character.wall_jump_charges -= 1;
        character.facing = Facing::from_sign(side.away_sign());
        character.wall_attached = Some(side);
        debug!(
            "Wall attach on {:?}, charges left {}",
            side, character.wall_jump_charges
        );
        true
    }

    /// Leave the wall after a jump (or any other exit) and start the lock.
    pub fn detach(&mut self, tuning: &WallTuning, character: &mut Character) {
        if character.wall_attached.take().is_some() {
            self.lock_reattach(tuning);
        }
    }

    /// Keep walls out of reach for a moment, e.g. while a jump clears the floor.
    pub fn lock_reattach(&mut self, tuning: &WallTuning) {
        self.reattach_lock = tuning.reattach_lock;
    }

    /// Gravity while clinging: fully suspended.
    pub fn gravity_multiplier(&self) -> f32 {
        0.0
    }
}
