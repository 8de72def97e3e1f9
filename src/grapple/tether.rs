//! Grapple domain: the elastic distance constraint between body and anchor.

use bevy::prelude::*;

use crate::content::{GrappleTuning, JointScaling};

/// Spring-like distance constraint created when a shot bites.
///
/// Inside `[min_distance, max_distance]` the rope is slack. Outside, a
/// spring proportional to the overshoot and a damper on radial speed push
/// the body back toward the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TetherConstraint {
    pub anchor: Vec2,
    pub min_distance: f32,
    pub max_distance: f32,
    pub spring: f32,
    pub damper: f32,
    pub mass_scale: f32,
}

impl TetherConstraint {
    /// Build the constraint for an anchor `distance` away from the body.
    pub fn attach(anchor: Vec2, distance: f32, tuning: &GrappleTuning) -> Self {
        let joint = tuning.joint;
        let (max, min) = match tuning.joint_scaling {
            JointScaling::Multiply => (
                distance * joint.max_distance_modifier,
                distance * joint.min_distance_modifier,
            ),
            JointScaling::Add => (
                distance + joint.max_distance_modifier,
                distance + joint.min_distance_modifier,
            ),
        };
        let max_distance = max.clamp(tuning.min_rope_length, tuning.max_rope_length);
        let min_distance = min.clamp(tuning.min_rope_length, max_distance);

        Self {
            anchor,
            min_distance,
            max_distance,
            spring: joint.spring,
            damper: joint.damper,
            mass_scale: joint.mass_scale,
        }
    }

    /// Shift both bounds by `delta`, keeping them inside `[min_rope, max_rope]`.
    pub fn adjust_length(&mut self, delta: f32, min_rope: f32, max_rope: f32) {
        self.max_distance = (self.max_distance + delta).clamp(min_rope, max_rope);
        self.min_distance = (self.min_distance + delta).clamp(min_rope, self.max_distance);
    }

    /// Velocity change the constraint imposes on a body point over `dt`.
    pub fn velocity_response(&self, body_point: Vec2, velocity: Vec2, dt: f32) -> Vec2 {
        let offset = body_point - self.anchor;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return Vec2::ZERO;
        }

        let stretch = if distance > self.max_distance {
            distance - self.max_distance
        } else if distance < self.min_distance {
            distance - self.min_distance
        } else {
            return Vec2::ZERO;
        };

        let normal = offset / distance;
        let radial_speed = velocity.dot(normal);
        let acceleration = -(self.spring * stretch + self.damper * radial_speed) * self.mass_scale;
        normal * acceleration * dt
    }
}
