//! Drawing surface collaborator.
//!
//! The engine does not own a graphics backend. A backend implements
//! [`DrawSurface`] and is stored in the world as the non-send [`Surface`]
//! resource; the [`render_system`](crate::systems::render::render_system)
//! turns sprites into [`DrawRect`] commands for it.
//!
//! # Draw contract
//!
//! For each [`DrawRect`] the backend must, relative to an identity transform:
//! translate to `position`, rotate by `rotation` radians, scale by `scale`
//! (negative components mirror), set global alpha to `opacity`, then fill the
//! local rectangle `(-width/2, -height/2, width, height)` with `fill`.
//! Commands arrive sorted by z-index; later commands draw on top.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;

/// One filled, transformed rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRect {
    pub position: Vec2,
    /// Radians, clockwise in a y-down space.
    pub rotation: f32,
    pub scale: Vec2,
    pub opacity: f32,
    /// Color token such as `#ff00ff`.
    pub fill: String,
    pub width: f32,
    pub height: f32,
}

impl DrawRect {
    /// Local-space rectangle `(x, y, w, h)` centered on the origin.
    pub fn local_rect(&self) -> (f32, f32, f32, f32) {
        (
            -self.width / 2.0,
            -self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Rendering backend used by the engine.
pub trait DrawSurface {
    /// Prepare the surface for the requested viewport. Called once when the
    /// engine is built; an error aborts construction.
    fn configure(&mut self, width: u32, height: u32) -> Result<(), String> {
        let _ = (width, height);
        Ok(())
    }

    /// Current viewport size in pixels.
    fn viewport(&self) -> (u32, u32);

    /// Fill the whole viewport with `color`.
    fn clear(&mut self, color: &str);

    /// Draw one rectangle following the module-level contract.
    fn draw_rect(&mut self, rect: &DrawRect);
}

/// Non-send resource holding the active backend.
pub struct Surface(pub Box<dyn DrawSurface>);

impl Surface {
    pub fn new(surface: impl DrawSurface + 'static) -> Self {
        Self(Box::new(surface))
    }
}

/// Headless backend that only logs what it is asked to draw.
#[derive(Debug, Clone, Default)]
pub struct LogSurface {
    width: u32,
    height: u32,
    /// Rects drawn since the last clear.
    pub drawn: usize,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for LogSurface {
    fn configure(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: &str) {
        trace!("clear {} ({} rects last frame)", color, self.drawn);
        self.drawn = 0;
    }

    fn draw_rect(&mut self, rect: &DrawRect) {
        trace!(
            "rect {} at ({:.1}, {:.1}) rot={:.3} scale=({:.2}, {:.2}) alpha={:.2} size={}x{}",
            rect.fill,
            rect.position.x,
            rect.position.y,
            rect.rotation,
            rect.scale.x,
            rect.scale.y,
            rect.opacity,
            rect.width,
            rect.height
        );
        self.drawn += 1;
    }
}
