//! Sim domain: probing and fixed-step systems bridging avian bodies and the
//! controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::AvianPhysicsQuery;
use crate::sim::{AimTarget, ControllerInput, Player, Simulation};

pub(crate) fn sense_surroundings(
    spatial_query: SpatialQuery,
    aim: Res<AimTarget>,
    mut query: Query<(Entity, &Transform, &LinearVelocity, &mut Simulation), With<Player>>,
) {
    for (entity, transform, velocity, mut sim) in &mut query {
        let physics = AvianPhysicsQuery::new(&spatial_query, entity);
        sim.sync_body(transform.translation.truncate(), velocity.0);
        sim.sense(&physics, aim.0);
    }
}

/// Run one controller tick per fixed step and hand the velocity back to
/// avian for integration.
pub(crate) fn step_simulation(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut input: ResMut<ControllerInput>,
    mut query: Query<(Entity, &Transform, &mut LinearVelocity, &mut Simulation), With<Player>>,
) {
    let dt = time.delta_secs();
    let tick_input = input.take_edges();

    for (entity, transform, mut velocity, mut sim) in &mut query {
        let physics = AvianPhysicsQuery::new(&spatial_query, entity);
        sim.sync_body(transform.translation.truncate(), velocity.0);
        let report = sim.fixed_tick(&tick_input, &physics, dt);
        if let Some(outcome) = report.fire {
            debug!("Fire outcome: {:?}", outcome);
        }
        velocity.0 = sim.velocity();
    }
}
