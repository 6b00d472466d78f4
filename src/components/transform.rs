//! Position, scale, rotation and draw order of an entity.
//!
//! The [`Transform`] is the anchor for everything spatial: the physics system
//! integrates into `position`, colliders are placed relative to it, and the
//! render system uses all four fields to build its draw commands.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D placement of an entity in scene units.
///
/// `rotation` is in degrees and is never wrapped; values outside `[0, 360)`
/// are legal. Entities with a higher `z_index` are drawn on top; ties keep
/// iteration order.
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Position in scene units (y grows downwards).
    pub position: Vec2,
    /// Uniform scale factor (1.0 = normal size).
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Render order hint.
    pub z_index: i32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            z_index: 0,
        }
    }
}

impl Transform {
    /// Create a transform at the given position with default scale and rotation.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Builder: set the render order.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Builder: set rotation in degrees.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Builder: set the uniform scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation converted to radians.
    pub fn rotation_radians(&self) -> f32 {
        self.rotation.to_radians()
    }
}
