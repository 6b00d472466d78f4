//! Velocity integration.
//!
//! Applies gravity and ground friction to every non-static body, integrates
//! positions over the frame delta (seconds) and clears the grounded flag so
//! the collision system can recompute it.
use bevy_ecs::prelude::*;

use crate::components::physics::Physics;
use crate::components::transform::Transform;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::snapshot::FrameSnapshot;
use crate::resources::worldtime::WorldTime;

pub fn physics_system(
    config: Res<EngineConfig>,
    time: Res<WorldTime>,
    snapshot: Res<FrameSnapshot>,
    mut query: Query<(&mut Transform, &mut Physics)>,
) {
    let dt = time.delta_seconds();
    for entity in snapshot.iter() {
        let Ok((mut transform, mut physics)) = query.get_mut(entity) else {
            continue;
        };
        integrate(&mut transform, &mut physics, config.gravity, dt);
    }
}

/// One integration step of `dt` seconds under `gravity`.
pub fn integrate(transform: &mut Transform, physics: &mut Physics, gravity: f32, dt: f32) {
    if physics.is_static {
        return;
    }

    if physics.use_gravity {
        physics.velocity.y += gravity * dt;
    }

    // Friction decelerates toward zero and never flips the sign.
    if physics.is_grounded && physics.velocity.x != 0.0 {
        let friction = physics.friction * gravity * dt;
        if physics.velocity.x.abs() < friction {
            physics.velocity.x = 0.0;
        } else {
            physics.velocity.x -= physics.velocity.x.signum() * friction;
        }
    }

    transform.position += physics.velocity * dt;
    physics.is_grounded = false;
}
