//! Enemy AI tuning data.
//!
//! The core runs no enemy AI; this is data for a gameplay layer to read and
//! write between frames.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyBehavior {
    #[default]
    Patrol,
    Chase,
    Stationary,
    Flying,
}

/// Speeds in units per second, ranges in units, times in milliseconds.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enemy {
    pub behavior: EnemyBehavior,
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_damage: i32,
    pub attack_cooldown: f32,
    pub attack_cooldown_remaining: f32,
    pub health: i32,
    pub max_health: i32,
    pub patrol_points: Vec<Vec2>,
    pub current_patrol_index: usize,
    /// -1 = left, 1 = right.
    pub patrol_direction: i32,
    pub is_chasing: bool,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            behavior: EnemyBehavior::Patrol,
            move_speed: 100.0,
            detection_range: 150.0,
            attack_range: 50.0,
            attack_damage: 1,
            attack_cooldown: 1000.0,
            attack_cooldown_remaining: 0.0,
            health: 3,
            max_health: 3,
            patrol_points: Vec::new(),
            current_patrol_index: 0,
            patrol_direction: 1,
            is_chasing: false,
        }
    }
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Patrol point the enemy is currently heading to.
    pub fn patrol_target(&self) -> Option<Vec2> {
        self.patrol_points.get(self.current_patrol_index).copied()
    }
}
