//! Core domain: the physics queries the controller needs from an engine.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Surfaces a grapple can bite into
    Anchor,
    /// Player character
    Player,
    /// Sensors (pickups, hazards, checkpoints) - should not block movement
    Sensor,
}

/// The surface class a ray is filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryLayer {
    Ground,
    Wall,
    Attachable,
}

impl QueryLayer {
    pub fn game_layer(self) -> GameLayer {
        match self {
            QueryLayer::Ground => GameLayer::Ground,
            QueryLayer::Wall => GameLayer::Wall,
            QueryLayer::Attachable => GameLayer::Anchor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    pub normal: Vec2,
    pub distance: f32,
}

/// Ray intersection against the level.
///
/// `direction` does not need to be normalized; a zero direction never hits.
pub trait PhysicsQuery {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layer: QueryLayer,
    ) -> Option<RayHit>;
}

/// [`PhysicsQuery`] backed by avian's spatial query pipeline.
pub struct AvianPhysicsQuery<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    exclude: Entity,
}

impl<'a, 'w, 's> AvianPhysicsQuery<'a, 'w, 's> {
    /// `exclude` is usually the character's own body.
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, exclude: Entity) -> Self {
        Self {
            spatial_query,
            exclude,
        }
    }
}

impl PhysicsQuery for AvianPhysicsQuery<'_, '_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layer: QueryLayer,
    ) -> Option<RayHit> {
        let direction = Dir2::new(direction).ok()?;
        let filter = SpatialQueryFilter::from_mask(layer.game_layer())
            .with_excluded_entities([self.exclude]);

        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| RayHit {
                point: origin + *direction * hit.distance,
                normal: hit.normal,
                distance: hit.distance,
            })
    }
}
