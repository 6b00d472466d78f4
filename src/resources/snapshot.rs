//! Entity snapshot for the current frame.
//!
//! The engine captures the registry's entity list once, before any system
//! runs. Every built-in system iterates this list instead of querying the
//! world directly, so all systems see the same entities in the same order and
//! nobody observes same-frame spawns. The order is entity creation order,
//! which also fixes the collision pair order.

use bevy_ecs::prelude::*;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub entities: Vec<Entity>,
}

impl FrameSnapshot {
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
