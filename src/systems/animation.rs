//! Sprite animation playback.
//!
//! [`animation_system`] advances the active [`SpriteAnimation`] of every
//! sprite in the frame snapshot by the frame delta (milliseconds). Several
//! frames may be skipped in one step when the delta exceeds the frame
//! duration. Looping animations wrap to their first frame; one-shot
//! animations hold their last frame forever.
//!
//! Switching animations is done by gameplay code through
//! [`Sprite::play`](crate::components::sprite::Sprite::play).
//!
//! [`SpriteAnimation`]: crate::components::sprite::SpriteAnimation

use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::snapshot::FrameSnapshot;
use crate::resources::worldtime::WorldTime;

pub fn animation_system(
    snapshot: Res<FrameSnapshot>,
    time: Res<WorldTime>,
    mut query: Query<&mut Sprite>,
) {
    for entity in snapshot.iter() {
        let Ok(mut sprite) = query.get_mut(entity) else {
            continue;
        };
        advance_animation(&mut sprite, time.delta);
    }
}

/// Advance `sprite`'s active animation by `dt` milliseconds.
///
/// Sprites with no (or an unknown) active animation, an empty frame list or a
/// non-positive frame duration are left untouched.
pub fn advance_animation(sprite: &mut Sprite, dt: f32) {
    let Some(animation) = sprite.active_animation() else {
        return;
    };
    let Some(last) = animation.last_index() else {
        return;
    };
    let duration = animation.frame_duration;
    let looped = animation.looped;
    if duration <= 0.0 {
        return;
    }

    if !looped && sprite.current_frame >= last {
        sprite.current_frame = last;
        return;
    }

    sprite.frame_time += dt;
    if !sprite.frame_time.is_finite() {
        sprite.frame_time = 0.0;
        return;
    }
    if sprite.frame_time < duration {
        return;
    }

    // Whole frame durations elapsed; computed in one go so a huge delta
    // cannot stall on f32 rounding.
    let steps = (sprite.frame_time / duration).floor();
    sprite.frame_time = sprite.frame_time.rem_euclid(duration);
    let len = (last + 1) as u64;
    if looped {
        let advance = (steps as u64 % len) as usize;
        sprite.current_frame = (sprite.current_frame + advance) % (last + 1);
    } else {
        let advance = steps.min(len as f32) as usize;
        sprite.current_frame = (sprite.current_frame + advance).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::SpriteAnimation;

    fn sprite(looped: bool) -> Sprite {
        let mut s = Sprite::default().with_animation(SpriteAnimation::new(
            "run",
            vec![0, 1, 2],
            100.0,
            looped,
        ));
        s.play("run");
        s
    }

    #[test]
    fn test_looping_wraps() {
        let mut s = sprite(true);
        advance_animation(&mut s, 250.0);
        assert_eq!(s.current_frame, 2);
        assert_eq!(s.frame_time, 50.0);
        advance_animation(&mut s, 100.0);
        assert_eq!(s.current_frame, 0);
        assert_eq!(s.frame_time, 50.0);
    }

    #[test]
    fn test_one_shot_clamps_forever() {
        let mut s = sprite(false);
        advance_animation(&mut s, 1000.0);
        assert_eq!(s.current_frame, 2);
        let frame_time = s.frame_time;
        for _ in 0..10 {
            advance_animation(&mut s, 500.0);
            assert_eq!(s.current_frame, 2);
            assert_eq!(s.frame_time, frame_time);
        }
    }

    #[test]
    fn test_huge_delta_catches_up_at_once() {
        let mut s = Sprite::default().with_animation(SpriteAnimation::new(
            "blink",
            vec![0, 1, 2],
            1.0,
            true,
        ));
        s.play("blink");
        // 1e8 frames: 1e8 % 3 == 1.
        advance_animation(&mut s, 1.0e8);
        assert_eq!(s.current_frame, 1);
        assert_eq!(s.frame_time, 0.0);

        let mut once = sprite(false);
        advance_animation(&mut once, 1.0e9);
        assert_eq!(once.current_frame, 2);
        assert!(once.frame_time < 100.0);
    }

    #[test]
    fn test_skips_unplayable_animations() {
        let mut idle = Sprite::default();
        advance_animation(&mut idle, 500.0);
        assert_eq!((idle.current_frame, idle.frame_time), (0, 0.0));

        let mut unknown = sprite(true);
        unknown.current_animation = "missing".into();
        advance_animation(&mut unknown, 500.0);
        assert_eq!((unknown.current_frame, unknown.frame_time), (0, 0.0));

        let mut empty = Sprite::default()
            .with_animation(SpriteAnimation::new("empty", vec![], 100.0, true));
        empty.play("empty");
        advance_animation(&mut empty, 500.0);
        assert_eq!(empty.frame_time, 0.0);

        let mut frozen = Sprite::default()
            .with_animation(SpriteAnimation::new("frozen", vec![1, 2], 0.0, true));
        frozen.play("frozen");
        advance_animation(&mut frozen, 500.0);
        assert_eq!((frozen.current_frame, frozen.frame_time), (0, 0.0));
    }

    #[test]
    fn test_system_uses_world_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 120.0,
            ..WorldTime::default()
        });
        let e = world.spawn(sprite(true)).id();
        world.insert_resource(FrameSnapshot::from_entities(vec![e]));

        let mut schedule = Schedule::default();
        schedule.add_systems(animation_system);
        schedule.run(&mut world);

        let s = world.get::<Sprite>(e).unwrap();
        assert_eq!(s.current_frame, 1);
        assert_eq!(s.frame_time, 20.0);
    }
}
