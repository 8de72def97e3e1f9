//! Movement domain: walking, jumping, and wall clinging.

mod components;
mod jump;
mod motion;
mod sensors;
pub mod timing;
mod wall;

pub use components::{Character, Facing, MotionState, Skill, WallSide};
pub use jump::{GroundTransition, JumpOrigin, JumpSystem};
pub use motion::MotionController;
pub use sensors::GroundSensor;
pub use timing::JumpTiming;
pub use wall::WallAttachHandler;
