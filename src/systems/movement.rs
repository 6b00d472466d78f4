//! Player intent to velocity.
//!
//! Translates the sampled [`InputState`] into velocity changes for every
//! entity carrying a [`PlayerController`]: horizontal walking, grounded,
//! double and wall jumps, and timed dashes. Position integration is left to
//! the physics system.
use bevy_ecs::prelude::*;

use crate::components::physics::Physics;
use crate::components::playercontroller::PlayerController;
use crate::components::transform::Transform;
use crate::resources::input::InputState;
use crate::resources::snapshot::FrameSnapshot;
use crate::resources::worldtime::WorldTime;

/// Wall jumps push away from the wall faster than walking.
pub const WALL_JUMP_BOOST: f32 = 1.5;

/// Apply player intent to every controlled entity in the frame snapshot.
pub fn movement_system(
    snapshot: Res<FrameSnapshot>,
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut query: Query<(&mut Physics, &mut PlayerController), With<Transform>>,
) {
    for entity in snapshot.iter() {
        let Ok((mut physics, mut controller)) = query.get_mut(entity) else {
            continue;
        };
        apply_intent(&mut physics, &mut controller, &input, time.delta);
    }
}

/// Advance dash timers by `dt` milliseconds and apply the held actions.
pub fn apply_intent(
    physics: &mut Physics,
    controller: &mut PlayerController,
    input: &InputState,
    dt: f32,
) {
    controller.dash_cooldown_remaining = (controller.dash_cooldown_remaining - dt).max(0.0);

    if controller.is_dashing {
        controller.dash_time_remaining = (controller.dash_time_remaining - dt).max(0.0);
        if controller.dash_time_remaining > 0.0 {
            return;
        }
        controller.is_dashing = false;
    }

    physics.velocity.x = 0.0;
    if input.left.active {
        physics.velocity.x = -controller.move_speed;
    }
    if input.right.active {
        physics.velocity.x = controller.move_speed;
    }

    if input.jump_held() {
        if physics.is_grounded {
            physics.velocity.y = -controller.jump_force;
            controller.has_used_double_jump = false;
        } else if controller.can_double_jump && !controller.has_used_double_jump {
            physics.velocity.y = -controller.jump_force;
            controller.has_used_double_jump = true;
        } else if controller.can_wall_jump && controller.is_touching_wall {
            physics.velocity.y = -controller.jump_force;
            physics.velocity.x = controller.wall_normal_x * controller.move_speed * WALL_JUMP_BOOST;
        }
    }

    if input.dash.active && controller.dash_ready() {
        controller.is_dashing = true;
        controller.dash_time_remaining = controller.dash_duration;
        controller.dash_cooldown_remaining = controller.dash_cooldown;
        let direction = if physics.velocity.x < 0.0 { -1.0 } else { 1.0 };
        physics.velocity.x = controller.dash_speed * direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::{Action, HeldActions};

    fn input(actions: &[Action]) -> InputState {
        let mut held = HeldActions::new();
        for a in actions {
            held.press(*a);
        }
        let mut state = InputState::default();
        state.sample(&held);
        state
    }

    fn grounded() -> Physics {
        Physics {
            is_grounded: true,
            ..Physics::default()
        }
    }

    #[test]
    fn test_right_wins_over_left() {
        let mut p = grounded();
        let mut c = PlayerController::default();
        apply_intent(&mut p, &mut c, &input(&[Action::Left, Action::Right]), 16.0);
        assert_eq!(p.velocity.x, 200.0);
        apply_intent(&mut p, &mut c, &input(&[Action::Left]), 16.0);
        assert_eq!(p.velocity.x, -200.0);
        apply_intent(&mut p, &mut c, &input(&[]), 16.0);
        assert_eq!(p.velocity.x, 0.0);
    }

    #[test]
    fn test_grounded_jump_resets_double_jump() {
        let mut p = grounded();
        let mut c = PlayerController {
            has_used_double_jump: true,
            ..PlayerController::default()
        };
        apply_intent(&mut p, &mut c, &input(&[Action::Up]), 16.0);
        assert_eq!(p.velocity.y, -400.0);
        assert!(!c.has_used_double_jump);
    }

    #[test]
    fn test_double_jump_only_once() {
        let mut p = Physics::default();
        let mut c = PlayerController::default().with_all_abilities();
        apply_intent(&mut p, &mut c, &input(&[Action::Jump]), 16.0);
        assert_eq!(p.velocity.y, -400.0);
        assert!(c.has_used_double_jump);

        p.velocity.y = 10.0;
        apply_intent(&mut p, &mut c, &input(&[Action::Jump]), 16.0);
        assert_eq!(p.velocity.y, 10.0);
    }

    #[test]
    fn test_wall_jump_pushes_away_from_wall() {
        let mut p = Physics::default();
        let mut c = PlayerController {
            can_wall_jump: true,
            is_touching_wall: true,
            wall_normal_x: -1.0,
            ..PlayerController::default()
        };
        apply_intent(&mut p, &mut c, &input(&[Action::Up]), 16.0);
        assert_eq!(p.velocity.y, -400.0);
        assert_eq!(p.velocity.x, -300.0);
    }

    #[test]
    fn test_dash_locks_velocity_until_it_ends() {
        let mut p = grounded();
        let mut c = PlayerController {
            can_dash: true,
            ..PlayerController::default()
        };
        apply_intent(&mut p, &mut c, &input(&[Action::Dash]), 16.0);
        assert!(c.is_dashing);
        assert_eq!(p.velocity.x, 500.0);
        assert_eq!(c.dash_cooldown_remaining, 1000.0);

        // Input is ignored while dashing.
        apply_intent(&mut p, &mut c, &input(&[Action::Left]), 100.0);
        assert!(c.is_dashing);
        assert_eq!(p.velocity.x, 500.0);

        apply_intent(&mut p, &mut c, &input(&[Action::Left]), 100.0);
        assert!(!c.is_dashing);
        assert_eq!(p.velocity.x, -200.0);
        assert_eq!(c.dash_cooldown_remaining, 800.0);
    }

    #[test]
    fn test_dash_follows_walking_direction() {
        let mut p = grounded();
        let mut c = PlayerController {
            can_dash: true,
            ..PlayerController::default()
        };
        apply_intent(&mut p, &mut c, &input(&[Action::Left, Action::Dash]), 16.0);
        assert_eq!(p.velocity.x, -500.0);
    }

    #[test]
    fn test_dash_respects_cooldown() {
        let mut p = grounded();
        let mut c = PlayerController {
            can_dash: true,
            dash_cooldown_remaining: 500.0,
            ..PlayerController::default()
        };
        apply_intent(&mut p, &mut c, &input(&[Action::Dash]), 16.0);
        assert!(!c.is_dashing);
        assert_eq!(c.dash_cooldown_remaining, 484.0);
    }

    #[test]
    fn test_system_requires_transform() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 16.0,
            ..WorldTime::default()
        });
        world.insert_resource(input(&[Action::Right]));
        let with = world
            .spawn((Transform::default(), grounded(), PlayerController::default()))
            .id();
        let without = world.spawn((grounded(), PlayerController::default())).id();
        world.insert_resource(FrameSnapshot::from_entities(vec![with, without]));

        let mut schedule = Schedule::default();
        schedule.add_systems(movement_system);
        schedule.run(&mut world);

        assert_eq!(world.get::<Physics>(with).unwrap().velocity.x, 200.0);
        assert_eq!(world.get::<Physics>(without).unwrap().velocity.x, 0.0);
    }
}
