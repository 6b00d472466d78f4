//! Kinematic body with an embedded collider.
//!
//! The [`Physics`] component stores velocity, material parameters and the
//! collision shape of an entity. It is written by three systems each frame:
//!
//! 1. [`movement_system`](crate::systems::movement::movement_system) sets
//!    velocity from player intent
//! 2. [`physics_system`](crate::systems::physics::physics_system) applies
//!    gravity and friction, integrates position and clears `is_grounded`
//! 3. [`collision_system`](crate::systems::collision::collision_system)
//!    separates overlapping bodies and re-asserts `is_grounded`
//!
//! `mass` is carried for gameplay code but collision response ignores it.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Shape used by the collision system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColliderShape {
    /// Axis-aligned box of `width` x `height`.
    #[default]
    Box,
    /// Circle whose radius is stored in `width`.
    Circle,
}

/// Collision geometry relative to the owning [`Transform`](super::transform::Transform).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collider {
    pub shape: ColliderShape,
    /// Box width, or radius for circles.
    pub width: f32,
    /// Box height; ignored for circles.
    pub height: f32,
    /// Offset from the entity position. For boxes this is the min corner.
    pub offset: Vec2,
    /// Triggers report overlaps but are never pushed apart.
    pub is_trigger: bool,
}

impl Default for Collider {
    fn default() -> Self {
        Self {
            shape: ColliderShape::Box,
            width: 32.0,
            height: 32.0,
            offset: Vec2::ZERO,
            is_trigger: false,
        }
    }
}

impl Collider {
    /// Box collider with the given size and no offset.
    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            shape: ColliderShape::Box,
            width,
            height,
            ..Self::default()
        }
    }

    /// Circle collider with the given radius.
    pub fn circle(radius: f32) -> Self {
        Self {
            shape: ColliderShape::Circle,
            width: radius,
            height: radius,
            ..Self::default()
        }
    }

    /// Builder: place the collider relative to the entity position.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Builder: mark as trigger.
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Anchor point of the collider in world space: min corner for boxes,
    /// center for circles.
    pub fn origin(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }

    /// Returns `(min, max)` of a box collider for a given entity position.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let min = self.origin(position);
        (min, min + Vec2::new(self.width, self.height))
    }

    /// Radius of a circle collider.
    pub fn radius(&self) -> f32 {
        self.width
    }
}

/// Velocity, material and collider of a simulated entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Velocity in scene units per second.
    pub velocity: Vec2,
    /// Whether gravity accelerates this body.
    pub use_gravity: bool,
    /// Friction coefficient in `[0, 1]`, applied while grounded.
    pub friction: f32,
    /// Restitution in `[0, 1]`; fraction of velocity kept on impact.
    pub bounciness: f32,
    /// Mass (not used by collision response).
    pub mass: f32,
    /// Static bodies are never integrated nor moved by collisions.
    pub is_static: bool,
    pub collider: Collider,
    /// Resting on a surface this frame. Reset by physics, set by collision.
    pub is_grounded: bool,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            use_gravity: true,
            friction: 0.8,
            bounciness: 0.0,
            mass: 1.0,
            is_static: false,
            collider: Collider::default(),
            is_grounded: false,
        }
    }
}

impl Physics {
    /// A dynamic body with the given collider and default material.
    pub fn dynamic(collider: Collider) -> Self {
        Self {
            collider,
            ..Self::default()
        }
    }

    /// An immovable body (platforms, walls) that ignores gravity.
    pub fn fixed(collider: Collider) -> Self {
        Self {
            collider,
            is_static: true,
            use_gravity: false,
            ..Self::default()
        }
    }

    /// Builder: set the initial velocity.
    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Builder: set bounciness.
    pub fn with_bounciness(mut self, bounciness: f32) -> Self {
        self.bounciness = bounciness;
        self
    }

    /// Builder: set friction.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Builder: enable or disable gravity.
    pub fn with_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }
}
