use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Placeholder fill used when a texture is an asset id rather than a color.
pub const PLACEHOLDER_FILL: &str = "#ff00ff";

/// A named frame sequence played by the
/// [`animation_system`](crate::systems::animation::animation_system).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteAnimation {
    pub name: String,
    /// Frame indices into the sprite sheet, in playback order.
    pub frames: Vec<usize>,
    /// Duration of each frame in milliseconds.
    pub frame_duration: f32,
    /// Restart after the last frame instead of holding it.
    pub looped: bool,
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self {
            name: String::new(),
            frames: Vec::new(),
            frame_duration: 100.0,
            looped: true,
        }
    }
}

impl SpriteAnimation {
    pub fn new(
        name: impl Into<String>,
        frames: Vec<usize>,
        frame_duration: f32,
        looped: bool,
    ) -> Self {
        Self {
            name: name.into(),
            frames,
            frame_duration,
            looped,
        }
    }

    /// Index of the last frame, `None` for an empty animation.
    pub fn last_index(&self) -> Option<usize> {
        self.frames.len().checked_sub(1)
    }
}

/// Visual representation of an entity plus its animation playback state.
///
/// `texture` is either a color token (`"#rrggbb"`) drawn as a filled rect, or
/// an asset id. `current_frame` indexes into the active animation's `frames`
/// and `frame_time` is the time spent on it, in milliseconds.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprite {
    pub texture: String,
    pub width: f32,
    pub height: f32,
    /// 0.0 = transparent, 1.0 = opaque.
    pub opacity: f32,
    pub flip_x: bool,
    pub flip_y: bool,
    pub animations: Vec<SpriteAnimation>,
    /// Empty when no animation is playing.
    pub current_animation: String,
    pub current_frame: usize,
    pub frame_time: f32,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            texture: "#ffffff".to_string(),
            width: 32.0,
            height: 32.0,
            opacity: 1.0,
            flip_x: false,
            flip_y: false,
            animations: Vec::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_time: 0.0,
        }
    }
}

impl Sprite {
    /// Solid-color sprite of the given size.
    pub fn colored(color: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            texture: color.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Builder: register an animation.
    pub fn with_animation(mut self, animation: SpriteAnimation) -> Self {
        self.animations.push(animation);
        self
    }

    /// Whether `texture` is a literal color token.
    pub fn is_color(&self) -> bool {
        self.texture.starts_with('#')
    }

    /// Fill used by the renderer: the color token, or the placeholder for assets.
    pub fn fill(&self) -> &str {
        if self.is_color() {
            &self.texture
        } else {
            PLACEHOLDER_FILL
        }
    }

    /// Look up an animation by name.
    pub fn animation(&self, name: &str) -> Option<&SpriteAnimation> {
        self.animations.iter().find(|a| a.name == name)
    }

    /// The animation selected by `current_animation`, if it exists.
    pub fn active_animation(&self) -> Option<&SpriteAnimation> {
        if self.current_animation.is_empty() {
            return None;
        }
        self.animation(&self.current_animation)
    }

    /// Switch to `name`, restarting playback only when it differs from the
    /// current animation.
    pub fn play(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.current_animation != name {
            self.current_animation = name;
            self.current_frame = 0;
            self.frame_time = 0.0;
        }
    }

    /// Sprite-sheet frame currently displayed.
    pub fn current_frame_value(&self) -> Option<usize> {
        self.active_animation()
            .and_then(|a| a.frames.get(self.current_frame).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking() -> Sprite {
        Sprite::default()
            .with_animation(SpriteAnimation::new("walk", vec![4, 5, 6], 100.0, true))
            .with_animation(SpriteAnimation::new("idle", vec![0], 500.0, true))
    }

    #[test]
    fn test_sprite_defaults() {
        let s = Sprite::default();
        assert_eq!(s.texture, "#ffffff");
        assert_eq!(s.width, 32.0);
        assert_eq!(s.opacity, 1.0);
        assert!(s.current_animation.is_empty());
        assert!(s.active_animation().is_none());
    }

    #[test]
    fn test_fill_uses_placeholder_for_assets() {
        assert_eq!(Sprite::colored("#00ff00", 1.0, 1.0).fill(), "#00ff00");
        assert_eq!(Sprite::colored("hero_sheet", 1.0, 1.0).fill(), PLACEHOLDER_FILL);
    }

    #[test]
    fn test_play_resets_only_on_change() {
        let mut s = walking();
        s.play("walk");
        s.current_frame = 2;
        s.frame_time = 40.0;

        s.play("walk");
        assert_eq!(s.current_frame, 2);
        assert_eq!(s.frame_time, 40.0);

        s.play("idle");
        assert_eq!(s.current_animation, "idle");
        assert_eq!(s.current_frame, 0);
        assert_eq!(s.frame_time, 0.0);
    }

    #[test]
    fn test_current_frame_value() {
        let mut s = walking();
        assert_eq!(s.current_frame_value(), None);
        s.play("walk");
        s.current_frame = 1;
        assert_eq!(s.current_frame_value(), Some(5));
    }

    #[test]
    fn test_last_index_empty() {
        let a = SpriteAnimation::default();
        assert_eq!(a.last_index(), None);
    }
}
