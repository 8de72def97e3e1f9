//! Sim domain: system modules wiring the controller into the frame.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod notify;
pub(crate) mod stepping;

pub(crate) use collisions::{collect_skill_pickups, handle_checkpoints_and_hazards};
pub(crate) use input::{read_input, track_cursor};
pub(crate) use notify::{log_motion_events, resolve_and_notify};
pub(crate) use stepping::{sense_surroundings, step_simulation};
