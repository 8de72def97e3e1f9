//! Engine-free level geometry for unit tests.

use bevy::prelude::*;

use crate::core::{PhysicsQuery, QueryLayer, RayHit};

/// Axis-aligned boxes tagged with the layer a ray may be filtered to.
#[derive(Debug, Clone, Default)]
pub struct FakeWorld {
    boxes: Vec<(QueryLayer, Rect)>,
}

impl FakeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_box(mut self, layer: QueryLayer, min: Vec2, max: Vec2) -> Self {
        self.boxes.push((layer, Rect::from_corners(min, max)));
        self
    }

    /// Wide ground slab whose top surface sits at `top`.
    pub fn with_floor(self, top: f32) -> Self {
        self.with_box(
            QueryLayer::Ground,
            Vec2::new(-10_000.0, top - 100.0),
            Vec2::new(10_000.0, top),
        )
    }

    /// Top of the highest ground box under `x`, if any.
    pub fn floor_top(&self, x: f32) -> Option<f32> {
        self.boxes
            .iter()
            .filter(|(layer, rect)| *layer == QueryLayer::Ground && rect.min.x <= x && x <= rect.max.x)
            .map(|(_, rect)| rect.max.y)
            .reduce(f32::max)
    }
}

impl PhysicsQuery for FakeWorld {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layer: QueryLayer,
    ) -> Option<RayHit> {
        let direction = direction.try_normalize()?;
        self.boxes
            .iter()
            .filter(|(box_layer, _)| *box_layer == layer)
            .filter_map(|(_, rect)| slab_hit(origin, direction, *rect))
            .filter(|(distance, _)| *distance <= max_distance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, normal)| RayHit {
                point: origin + direction * distance,
                normal,
                distance,
            })
    }
}

/// Entry distance and surface normal of a ray against a box. Rays starting
/// inside the box hit at distance zero.
fn slab_hit(origin: Vec2, direction: Vec2, rect: Rect) -> Option<(f32, Vec2)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut normal = Vec2::ZERO;

    for axis in 0..2 {
        let (o, d) = (origin[axis], direction[axis]);
        let (lo, hi) = (rect.min[axis], rect.max[axis]);
        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let (t1, t2) = ((lo - o) / d, (hi - o) / d);
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        if near > t_enter {
            t_enter = near;
            normal = Vec2::ZERO;
            normal[axis] = -d.signum();
        }
        t_exit = t_exit.min(far);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        None
    } else if t_enter < 0.0 {
        Some((0.0, -direction))
    } else {
        Some((t_enter, normal))
    }
}
