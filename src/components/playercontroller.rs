//! Player abilities and their runtime state.
//!
//! Tuning fields (`move_speed`, `jump_force`, dash parameters, ability flags)
//! are set at spawn; the remaining fields are the state machine the
//! [`movement_system`](crate::systems::movement::movement_system) advances each
//! frame. All times are in milliseconds, speeds in scene units per second.
//!
//! `is_touching_wall` and `wall_normal_x` are not computed by the core; a
//! gameplay layer that wants wall jumps sets them.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerController {
    pub move_speed: f32,
    pub jump_force: f32,
    pub can_double_jump: bool,
    pub can_wall_jump: bool,
    pub can_dash: bool,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub dash_cooldown_remaining: f32,
    pub is_dashing: bool,
    pub dash_time_remaining: f32,
    pub has_used_double_jump: bool,
    pub is_touching_wall: bool,
    /// Horizontal direction pointing away from the touched wall (+1 or -1).
    pub wall_normal_x: f32,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            move_speed: 200.0,
            jump_force: 400.0,
            can_double_jump: false,
            can_wall_jump: false,
            can_dash: false,
            dash_speed: 500.0,
            dash_duration: 200.0,
            dash_cooldown: 1000.0,
            dash_cooldown_remaining: 0.0,
            is_dashing: false,
            dash_time_remaining: 0.0,
            has_used_double_jump: false,
            is_touching_wall: false,
            wall_normal_x: 1.0,
        }
    }
}

impl PlayerController {
    /// Builder: enable every ability.
    pub fn with_all_abilities(mut self) -> Self {
        self.can_double_jump = true;
        self.can_wall_jump = true;
        self.can_dash = true;
        self
    }

    /// Whether a dash could start right now (ignoring input).
    pub fn dash_ready(&self) -> bool {
        self.can_dash && !self.is_dashing && self.dash_cooldown_remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pc = PlayerController::default();
        assert_eq!(pc.move_speed, 200.0);
        assert_eq!(pc.jump_force, 400.0);
        assert_eq!(pc.dash_speed, 500.0);
        assert_eq!(pc.dash_duration, 200.0);
        assert_eq!(pc.dash_cooldown, 1000.0);
        assert!(!pc.can_dash);
        assert!(!pc.dash_ready());
    }

    #[test]
    fn test_dash_ready_respects_cooldown() {
        let mut pc = PlayerController::default().with_all_abilities();
        assert!(pc.dash_ready());
        pc.dash_cooldown_remaining = 10.0;
        assert!(!pc.dash_ready());
    }
}
