//! Movement domain: horizontal acceleration from response curves.

use bevy::prelude::*;

use crate::content::MotionTuning;

use super::components::{Character, Facing};

/// Curve timers for the horizontal response.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionController {
    acceleration_timer: f32,
    deceleration_timer: f32,
}

impl MotionController {
    pub fn new(tuning: &MotionTuning) -> Self {
        Self {
            acceleration_timer: tuning.acceleration_curve.start(),
            // Starting at the end of the curve means a spawned character at
            // rest is not mid-way through a stop.
            deceleration_timer: tuning.deceleration_curve.end(),
        }
    }

    pub fn acceleration_timer(&self) -> f32 {
        self.acceleration_timer
    }

    pub fn deceleration_timer(&self) -> f32 {
        self.deceleration_timer
    }

    /// Integrate one tick of horizontal input into the character's velocity.
    pub fn step(&mut self, tuning: &MotionTuning, axis: f32, character: &mut Character, dt: f32) {
        let axis = axis.clamp(-1.0, 1.0);
        let vx = character.velocity.x;

        let mut stopping = false;
        let ax = if axis != 0.0 {
            self.deceleration_timer = tuning.deceleration_curve.start();
            let direction = axis.signum();

            let ax = if vx == 0.0 || direction == vx.signum() {
                direction * tuning.acceleration_curve.sample(self.acceleration_timer)
            } else {
                self.acceleration_timer = tuning.acceleration_curve.start();
                direction * tuning.turn_acceleration
            };
            self.acceleration_timer += dt;
            ax
        } else {
            self.acceleration_timer = tuning.acceleration_curve.start();
            let decel = tuning.deceleration_curve.sample(self.deceleration_timer).abs();
            let ax = if vx == 0.0 {
                0.0
            } else if dt > 0.0 && decel * dt >= vx.abs() {
                // Stop at zero rather than reversing within one tick.
                stopping = true;
                -vx / dt
            } else {
                -vx.signum() * decel
            };
            self.deceleration_timer += dt;
            ax
        };

        character.acceleration = Vec2::new(ax, 0.0);
        if stopping {
            character.velocity.x = 0.0;
        } else {
            character.velocity.x += ax * dt;
        }
    }

    /// Clamp horizontal speed symmetrically and cap fall speed.
    pub fn clamp_velocity(tuning: &MotionTuning, character: &mut Character) {
        let v = &mut character.velocity;
        v.x = v.x.clamp(-tuning.max_horizontal_speed, tuning.max_horizontal_speed);
        v.y = v.y.max(-tuning.max_vertical_speed);
    }

    /// Face the aim point. Cosmetic only; never touches velocity.
    pub fn face_towards(character: &mut Character, aim_point: Vec2) {
        character.facing = Facing::from_sign(aim_point.x - character.position.x);
    }
}
