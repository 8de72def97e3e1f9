//! Movement domain: kinematics linking jump height and air time.
//!
//! A jump that rises for `T/2` seconds to height `h` under constant gravity
//! needs `g = 2h / (T/2)^2` and a launch speed of `v0 = 2h / (T/2)`.

use crate::content::JumpTuning;

pub fn gravity_magnitude(jump_height: f32, jump_total_duration: f32) -> f32 {
    let half = jump_total_duration / 2.0;
    2.0 * jump_height / (half * half)
}

pub fn launch_velocity(jump_height: f32, jump_total_duration: f32) -> f32 {
    let half = jump_total_duration / 2.0;
    2.0 * jump_height / half
}

/// Height reached from a launch at `v0` under gravity `g`: `v0^2 / 2g`.
pub fn apex_height(launch_velocity: f32, gravity: f32) -> f32 {
    launch_velocity * launch_velocity / (2.0 * gravity)
}

pub fn time_to_apex(launch_velocity: f32, gravity: f32) -> f32 {
    launch_velocity / gravity
}

/// Derived jump constants, computed once from validated tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpTiming {
    pub gravity: f32,
    pub launch_velocity: f32,
}

impl JumpTiming {
    pub fn from_tuning(tuning: &JumpTuning) -> Self {
        Self {
            gravity: gravity_magnitude(tuning.jump_height, tuning.jump_total_duration),
            launch_velocity: launch_velocity(tuning.jump_height, tuning.jump_total_duration),
        }
    }
}
