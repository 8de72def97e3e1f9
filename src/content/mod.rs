//! Content domain: the injected controller configuration and its loader.

mod data;
mod error;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    CONFIG_SCHEMA_VERSION, ControllerConfig, CurveKey, GrappleTuning, JointParameters,
    JointScaling, JumpTuning, MotionTuning, ResponseCurve, SensorTuning, WallTuning,
};
pub use error::ConfigError;
pub use loader::{load_controller_config, parse_json, parse_ron};
pub use validation::validate_config;

/// Default location of the shipped configuration, relative to the crate root.
pub const DEFAULT_CONFIG_PATH: &str = "assets/data/controller.ron";
