//! Sim domain: late resolution and forwarding of controller notifications.

use bevy::prelude::*;

use crate::core::{GrappleAttachedEvent, GrappleReleasedEvent, LandedEvent, MotionEvent};
use crate::sim::Simulation;

pub(crate) fn resolve_and_notify(
    mut query: Query<(Entity, &mut Simulation)>,
    mut landed_events: MessageWriter<LandedEvent>,
    mut attached_events: MessageWriter<GrappleAttachedEvent>,
    mut released_events: MessageWriter<GrappleReleasedEvent>,
) {
    for (entity, mut sim) in &mut query {
        for event in sim.resolve() {
            match event {
                MotionEvent::Landed { position } => {
                    landed_events.write(LandedEvent { entity, position });
                }
                MotionEvent::GrappleAttached {
                    anchor,
                    rope_length,
                } => {
                    attached_events.write(GrappleAttachedEvent {
                        entity,
                        anchor,
                        rope_length,
                    });
                }
                MotionEvent::GrappleReleased { refilled } => {
                    released_events.write(GrappleReleasedEvent { entity, refilled });
                }
            }
        }
    }
}

pub(crate) fn log_motion_events(
    mut landed_events: MessageReader<LandedEvent>,
    mut attached_events: MessageReader<GrappleAttachedEvent>,
    mut released_events: MessageReader<GrappleReleasedEvent>,
) {
    for event in landed_events.read() {
        debug!("{:?} landed at {:?}", event.entity, event.position);
    }
    for event in attached_events.read() {
        debug!(
            "{:?} tethered to {:?} (rope {:.0})",
            event.entity, event.anchor, event.rope_length
        );
    }
    for event in released_events.read() {
        debug!(
            "{:?} released the rope (refilled: {})",
            event.entity, event.refilled
        );
    }
}
