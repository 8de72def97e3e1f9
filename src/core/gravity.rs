//! Core domain: the single gravity scalar shared by the airborne behaviours.

use bevy::prelude::*;

/// The system currently allowed to write gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityOwner {
    /// Jump shaping, in free flight or on the ground.
    #[default]
    FreeFall,
    WallCling,
    Tether,
}

/// Gravity as seen by one simulation.
///
/// The magnitude is `base * multiplier`. Each tick starts with
/// [`GravityChannel::begin_tick`] naming the owner; only that owner may
/// write, and only the first write of the tick is kept. The value carries
/// over between ticks until the next accepted write.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityChannel {
    base: f32,
    multiplier: f32,
    owner: GravityOwner,
    written: bool,
}

impl GravityChannel {
    pub fn new(base: f32) -> Self {
        Self {
            base: base.abs(),
            multiplier: 1.0,
            owner: GravityOwner::FreeFall,
            written: false,
        }
    }

    pub fn begin_tick(&mut self, owner: GravityOwner) {
        if owner != self.owner {
            debug!("Gravity ownership {:?} -> {:?}", self.owner, owner);
        }
        self.owner = owner;
        self.written = false;
    }

    /// Returns whether the write was accepted.
    pub fn write(&mut self, writer: GravityOwner, multiplier: f32) -> bool {
        if writer != self.owner || self.written {
            return false;
        }
        self.multiplier = multiplier.max(0.0);
        self.written = true;
        true
    }

    pub fn owner(&self) -> GravityOwner {
        self.owner
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn magnitude(&self) -> f32 {
        self.base * self.multiplier
    }

    /// Downward acceleration vector.
    pub fn acceleration(&self) -> Vec2 {
        Vec2::new(0.0, -self.magnitude())
    }
}
