use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::resources::snapshot::FrameSnapshot;
use crate::resources::surface::{DrawRect, Surface};

/// Build the draw command for one sprite.
pub fn draw_command(transform: &Transform, sprite: &Sprite) -> DrawRect {
    let flip = Vec2::new(
        if sprite.flip_x { -1.0 } else { 1.0 },
        if sprite.flip_y { -1.0 } else { 1.0 },
    );
    DrawRect {
        position: transform.position,
        rotation: transform.rotation_radians(),
        scale: Vec2::splat(transform.scale) * flip,
        opacity: sprite.opacity,
        fill: sprite.fill().to_string(),
        width: sprite.width,
        height: sprite.height,
    }
}

/// Draw every visible sprite through the [`Surface`] backend.
///
/// Sprites are drawn back to front by `z_index`; equal z-indices keep
/// snapshot (creation) order. The surface has already been cleared by the
/// engine for this frame.
pub fn render_system(
    snapshot: Res<FrameSnapshot>,
    query: Query<(&Transform, &Sprite)>,
    mut surface: NonSendMut<Surface>,
) {
    let mut to_draw: Vec<(&Transform, &Sprite)> = snapshot
        .iter()
        .filter_map(|entity| query.get(entity).ok())
        .filter(|(_, sprite)| sprite.opacity > 0.0)
        .collect();

    // stable
    to_draw.sort_by_key(|(transform, _)| transform.z_index);

    for (transform, sprite) in to_draw {
        surface.0.draw_rect(&draw_command(transform, sprite));
    }
}
