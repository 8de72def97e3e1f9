//! Movement domain: ground and wall probes.

use bevy::prelude::*;

use crate::content::SensorTuning;
use crate::core::{PhysicsQuery, QueryLayer};

use super::components::WallSide;

#[derive(Debug, Clone, PartialEq)]
pub struct GroundSensor {
    ground_probe_length: f32,
    wall_probe_length: f32,
}

impl GroundSensor {
    pub fn new(tuning: &SensorTuning) -> Self {
        Self {
            ground_probe_length: tuning.ground_probe_length,
            wall_probe_length: tuning.wall_probe_length,
        }
    }

    /// Cast a short ray downward from the body center.
    pub fn is_grounded(&self, physics: &dyn PhysicsQuery, position: Vec2) -> bool {
        physics
            .cast_ray(
                position,
                Vec2::NEG_Y,
                self.ground_probe_length,
                QueryLayer::Ground,
            )
            .is_some()
    }

    /// Cast left and right; touching both sides (a narrow shaft) counts as none.
    pub fn wall_contact(&self, physics: &dyn PhysicsQuery, position: Vec2) -> Option<WallSide> {
        let left = physics
            .cast_ray(position, Vec2::NEG_X, self.wall_probe_length, QueryLayer::Wall)
            .is_some();
        let right = physics
            .cast_ray(position, Vec2::X, self.wall_probe_length, QueryLayer::Wall)
            .is_some();

        match (left, right) {
            (true, false) => Some(WallSide::Left),
            (false, true) => Some(WallSide::Right),
            _ => None,
        }
    }
}
