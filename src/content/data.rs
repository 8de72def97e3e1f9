//! Data definitions for the controller configuration file.
//!
//! These structs mirror the structure of assets/data/controller.ron and are
//! injected into every `Simulation` at spawn. Nothing here is mutated at
//! runtime.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Root record
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct ControllerConfig {
    pub schema_version: u32,
    pub motion: MotionTuning,
    pub jump: JumpTuning,
    pub wall: WallTuning,
    pub sensors: SensorTuning,
    pub grapple: GrappleTuning,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            motion: MotionTuning::default(),
            jump: JumpTuning::default(),
            wall: WallTuning::default(),
            sensors: SensorTuning::default(),
            grapple: GrappleTuning::default(),
        }
    }
}

// ============================================================================
// Response curves
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

/// Designer-authored mapping from elapsed seconds to an acceleration
/// magnitude. Keys are sorted by time; samples outside the keyed range hold
/// the first/last value and samples between keys interpolate linearly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct ResponseCurve {
    pub keys: Vec<CurveKey>,
}

impl ResponseCurve {
    pub fn new(keys: &[(f32, f32)]) -> Self {
        Self {
            keys: keys
                .iter()
                .map(|&(time, value)| CurveKey { time, value })
                .collect(),
        }
    }

    /// A curve with a single key, sampling to `value` everywhere.
    pub fn constant(value: f32) -> Self {
        Self::new(&[(0.0, value)])
    }

    pub fn start(&self) -> f32 {
        self.keys.first().map_or(0.0, |k| k.time)
    }

    pub fn end(&self) -> f32 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    pub fn sample(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // First key strictly after `time`; validation guarantees increasing times.
        let upper = self.keys.partition_point(|k| k.time <= time);
        let a = self.keys[upper - 1];
        let b = self.keys[upper];
        let t = (time - a.time) / (b.time - a.time);
        a.value + (b.value - a.value) * t
    }
}

// ============================================================================
// Locomotion
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct MotionTuning {
    pub acceleration_curve: ResponseCurve,
    pub deceleration_curve: ResponseCurve,
    pub turn_acceleration: f32,
    pub max_horizontal_speed: f32,
    pub max_vertical_speed: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            acceleration_curve: ResponseCurve::new(&[(0.0, 1800.0), (0.25, 2600.0)]),
            deceleration_curve: ResponseCurve::new(&[(0.0, 3000.0), (0.15, 3600.0)]),
            turn_acceleration: 4200.0,
            max_horizontal_speed: 320.0,
            max_vertical_speed: 900.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct JumpTuning {
    /// Apex height of a full jump.
    pub jump_height: f32,
    /// Seconds from launch back to launch height (rise + fall).
    pub jump_total_duration: f32,
    /// Gravity multiplier switched in once the jump starts falling or is released.
    pub landing_gravity_multiplier: f32,
    pub coyote_time: f32,
    pub jump_buffer: f32,
    /// Vertical velocity below which a jump counts as falling.
    pub fall_threshold: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_height: 110.0,
            jump_total_duration: 0.7,
            landing_gravity_multiplier: 1.8,
            coyote_time: 0.2,
            jump_buffer: 0.2,
            fall_threshold: -0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct WallTuning {
    pub unlocked: bool,
    /// Wall clings available per airborne segment.
    pub max_charges: u32,
    /// Horizontal speed given by a jump off a wall.
    pub jump_impulse: f32,
    /// Seconds after a wall jump during which no wall can be grabbed.
    pub reattach_lock: f32,
}

impl Default for WallTuning {
    fn default() -> Self {
        Self {
            unlocked: false,
            max_charges: 1,
            jump_impulse: 360.0,
            reattach_lock: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct SensorTuning {
    /// Length of the downward probe, measured from the body center.
    pub ground_probe_length: f32,
    /// Length of each horizontal wall probe, measured from the body center.
    pub wall_probe_length: f32,
}

impl Default for SensorTuning {
    fn default() -> Self {
        Self {
            ground_probe_length: 26.0,
            wall_probe_length: 16.0,
        }
    }
}

// ============================================================================
// Grapple
// ============================================================================

/// Spring parameters of the tether, shared by every shot.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct JointParameters {
    pub max_distance_modifier: f32,
    pub min_distance_modifier: f32,
    pub spring: f32,
    pub damper: f32,
    pub mass_scale: f32,
}

impl Default for JointParameters {
    fn default() -> Self {
        Self {
            max_distance_modifier: 1.0,
            min_distance_modifier: 0.0,
            spring: 400.0,
            damper: 20.0,
            mass_scale: 1.0,
        }
    }
}

/// How the distance modifiers combine with the anchor distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum JointScaling {
    /// `limit = distance * modifier`
    #[default]
    Multiply,
    /// `limit = distance + modifier`
    Add,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct GrappleTuning {
    pub enabled: bool,
    pub max_range: f32,
    pub max_ropes: u32,
    pub shooting_speed: f32,
    pub retrieve_speed: f32,
    /// Seconds a missed shot hangs at full range before it is pulled back.
    pub miss_retrieve_delay: f32,
    /// Shot origin relative to the body center.
    pub muzzle_offset: [f32; 2],
    /// Resting tip position relative to the body center.
    pub rest_offset: [f32; 2],
    pub reel_in_speed: f32,
    pub pay_out_speed: f32,
    pub min_rope_length: f32,
    pub max_rope_length: f32,
    pub tether_gravity_multiplier: f32,
    pub joint: JointParameters,
    #[serde(default)]
    pub joint_scaling: JointScaling,
}

impl GrappleTuning {
    pub fn muzzle_offset(&self) -> Vec2 {
        Vec2::from_array(self.muzzle_offset)
    }

    pub fn rest_offset(&self) -> Vec2 {
        Vec2::from_array(self.rest_offset)
    }
}

impl Default for GrappleTuning {
    fn default() -> Self {
        Self {
            enabled: false,
            max_range: 320.0,
            max_ropes: 1,
            shooting_speed: 1600.0,
            retrieve_speed: 1200.0,
            miss_retrieve_delay: 0.15,
            muzzle_offset: [0.0, 8.0],
            rest_offset: [10.0, 8.0],
            reel_in_speed: 240.0,
            pay_out_speed: 180.0,
            min_rope_length: 40.0,
            max_rope_length: 360.0,
            tether_gravity_multiplier: 1.0,
            joint: JointParameters::default(),
            joint_scaling: JointScaling::Multiply,
        }
    }
}
