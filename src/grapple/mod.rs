//! Grapple domain: firing, attaching, rappelling, and retrieving the rope.

mod rig;
mod state;
mod tether;
#[cfg(test)]
mod tests;

pub use rig::{FireOutcome, FireRejection, GrappleContext, GrappleRig};
pub use state::{GrappleState, TipTravel, TravelFrame};
pub use tether::TetherConstraint;
