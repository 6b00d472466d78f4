//! Collision detection and resolution.
//!
//! Runs after physics integration. Every pair of bodies in the frame snapshot
//! is tested (all pairs, no broad phase) against the positions as they were
//! when the system started; overlapping non-trigger pairs are then pushed
//! apart one after another, in pair order, along the axis of least
//! penetration. Landing on top of another body marks the upper one grounded.
//!
//! Supported shapes are box/box and circle/circle. Mixed pairs never collide.
//!
//! Every detected pair, trigger pairs included, is published in the
//! [`CollisionReport`] resource for gameplay code to inspect.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;

use crate::components::physics::{Collider, ColliderShape, Physics};
use crate::components::transform::Transform;
use crate::resources::collisionreport::{CollisionReport, Contact};
use crate::resources::snapshot::FrameSnapshot;

/// Per-axis penetration between two colliders, or `None` when they do not
/// overlap.
pub fn detect(a: &Transform, ca: &Collider, b: &Transform, cb: &Collider) -> Option<Vec2> {
    match (ca.shape, cb.shape) {
        (ColliderShape::Box, ColliderShape::Box) => {
            let (min_a, max_a) = ca.aabb(a.position);
            let (min_b, max_b) = cb.aabb(b.position);
            let overlap = max_a.min(max_b) - min_a.max(min_b);
            (overlap.x > 0.0 && overlap.y > 0.0).then_some(overlap)
        }
        (ColliderShape::Circle, ColliderShape::Circle) => {
            let distance = ca.origin(a.position).distance(cb.origin(b.position));
            let reach = ca.radius() + cb.radius();
            (distance < reach).then(|| Vec2::splat(reach - distance))
        }
        _ => None,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

fn component(v: Vec2, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
    }
}

fn component_mut(v: &mut Vec2, axis: Axis) -> &mut f32 {
    match axis {
        Axis::X => &mut v.x,
        Axis::Y => &mut v.y,
    }
}

/// Separate two overlapping bodies.
///
/// Trigger pairs and pairs of static bodies are left untouched.
pub fn resolve_pair(
    first: (&mut Transform, &mut Physics),
    second: (&mut Transform, &mut Physics),
    overlap: Vec2,
) {
    let (t1, p1) = first;
    let (t2, p2) = second;
    if p1.collider.is_trigger || p2.collider.is_trigger {
        return;
    }
    if p1.is_static && p2.is_static {
        return;
    }

    let axis = if overlap.x < overlap.y { Axis::X } else { Axis::Y };
    let depth = component(overlap, axis);
    let direction = if component(t1.position, axis) < component(t2.position, axis) {
        -1.0
    } else {
        1.0
    };

    if !p1.is_static && !p2.is_static {
        *component_mut(&mut t1.position, axis) += direction * depth / 2.0;
        *component_mut(&mut t2.position, axis) -= direction * depth / 2.0;

        let v1 = component(p1.velocity, axis);
        let v2 = component(p2.velocity, axis);
        *component_mut(&mut p1.velocity, axis) = v2 * p1.bounciness;
        *component_mut(&mut p2.velocity, axis) = v1 * p2.bounciness;

        if axis == Axis::Y {
            if direction < 0.0 {
                p1.is_grounded = true;
            } else {
                p2.is_grounded = true;
            }
        }
    } else if p1.is_static {
        *component_mut(&mut t2.position, axis) -= direction * depth;
        let v = component_mut(&mut p2.velocity, axis);
        *v = -*v * p2.bounciness;

        if axis == Axis::Y && direction > 0.0 {
            p2.is_grounded = true;
        }
    } else {
        *component_mut(&mut t1.position, axis) += direction * depth;
        let v = component_mut(&mut p1.velocity, axis);
        *v = -*v * p1.bounciness;

        if axis == Axis::Y && direction < 0.0 {
            p1.is_grounded = true;
        }
    }
}

pub fn collision_system(
    snapshot: Res<FrameSnapshot>,
    mut report: ResMut<CollisionReport>,
    mut query: Query<(&mut Transform, &mut Physics)>,
) {
    report.clear();

    let mut bodies: Vec<(Entity, Transform, Physics)> = snapshot
        .iter()
        .filter_map(|entity| {
            query
                .get(entity)
                .ok()
                .map(|(transform, physics)| (entity, *transform, *physics))
        })
        .collect();

    let mut pairs: Vec<(usize, usize, Vec2)> = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (_, ta, pa) = &bodies[i];
            let (_, tb, pb) = &bodies[j];
            if let Some(overlap) = detect(ta, &pa.collider, tb, &pb.collider) {
                pairs.push((i, j, overlap));
            }
        }
    }

    for (i, j, overlap) in pairs.iter().copied() {
        let (head, tail) = bodies.split_at_mut(j);
        let (first, t1, p1) = &mut head[i];
        let (second, t2, p2) = &mut tail[0];
        let is_trigger = p1.collider.is_trigger || p2.collider.is_trigger;
        trace!(
            "contact {:?} <-> {:?} overlap=({:.2}, {:.2}) trigger={}",
            first, second, overlap.x, overlap.y, is_trigger
        );
        report.push(Contact {
            first: *first,
            second: *second,
            overlap,
            is_trigger,
        });
        resolve_pair((t1, p1), (t2, p2), overlap);
    }

    if pairs.is_empty() {
        return;
    }
    for (entity, transform, physics) in bodies {
        if let Ok((mut t, mut p)) = query.get_mut(entity) {
            *t = transform;
            *p = physics;
        }
    }
}
